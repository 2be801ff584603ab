//! Host adapter: executes planned actions against browser capabilities.
//!
//! The planner only ever returns [`Action`] values. This module defines the
//! capability traits a host environment implements (document flags, timers,
//! location) and [`perform`], which turns an action list into a Stillwater
//! effect that runs against such an environment. Tests drive the same
//! adapter with recording environments instead of a real browser.

use std::time::Duration;

use stillwater::effect::Effect;
use stillwater::prelude::*;

use crate::core::{Action, PresentationFlag, Wake};

/// Errors raised by a host refusing to execute an action.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Presentation surface refused flag '{flag}': {reason}")]
    SurfaceRefused { flag: &'static str, reason: String },

    #[error("Timer host refused a {delay:?} schedule: {reason}")]
    ScheduleRefused { delay: Duration, reason: String },

    #[error("Navigation sink refused '{url}': {reason}")]
    AssignRefused { url: String, reason: String },
}

/// The document side of the host: presentation flags and click suppression.
pub trait PresentationSurface {
    /// Add a presentation flag to the document.
    fn apply(&self, flag: PresentationFlag) -> Result<(), HostError>;

    /// Remove a presentation flag from the document.
    fn withdraw(&self, flag: PresentationFlag) -> Result<(), HostError>;

    /// Prevent the default handling of the click being processed.
    fn suppress_native_click(&self) -> Result<(), HostError>;
}

/// Fire-and-forget timer capability.
///
/// The host arranges for `wake` to come back through the controller's
/// wake entry point once `delay` has elapsed. No cancellation.
pub trait TimerHost {
    fn schedule(&self, delay: Duration, wake: Wake) -> Result<(), HostError>;
}

/// The location side of the host: the real navigation.
pub trait NavigationSink {
    /// Assign the destination, carried verbatim from the plan.
    fn assign(&self, url: &str) -> Result<(), HostError>;
}

/// Execute a planned action list against a host environment.
///
/// Returns `impl Effect` for composition; run it with the environment to
/// execute. Actions run in plan order and the first refusal aborts the
/// rest, yielding the refusing host's error. The output is the number of
/// actions executed.
pub fn perform<Env>(
    actions: Vec<Action>,
) -> impl Effect<Output = usize, Error = HostError, Env = Env>
where
    Env: PresentationSurface + TimerHost + NavigationSink + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        for action in &actions {
            perform_one(env, action)?;
        }
        Ok(actions.len())
    })
}

fn perform_one<Env>(env: &Env, action: &Action) -> Result<(), HostError>
where
    Env: PresentationSurface + TimerHost + NavigationSink,
{
    match action {
        Action::Apply(flag) => env.apply(*flag),
        Action::Withdraw(flag) => env.withdraw(*flag),
        Action::SuppressNativeClick => env.suppress_native_click(),
        Action::Schedule { delay, wake } => env.schedule(*delay, wake.clone()),
        Action::Assign { url } => env.assign(url),
    }
}
