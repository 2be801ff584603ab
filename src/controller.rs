//! The transition controller: imperative shell over the pure planner.
//!
//! One controller serves one page instance. It owns the current
//! [`ControllerState`], feeds every incoming [`PageEvent`] through
//! [`react`], records phase changes, and hands the planned actions back to
//! the caller for execution. It never touches the document, timers, or
//! location itself.

use chrono::Utc;
use tracing::{debug, trace};
use url::Url;

use crate::core::{
    react, Action, Anchor, ControllerState, Outcome, PageEvent, PagePhase, PhaseChange, PhaseLog,
    ReadyState, Timing, Wake,
};

/// Per-page transition controller.
///
/// Construct one through [`ControllerBuilder`](crate::builder::ControllerBuilder)
/// when the page loads and wire its entry points to the matching browser
/// signals; the actions each entry point returns are meant for a host
/// adapter to execute.
#[derive(Debug)]
pub struct TransitionController {
    state: ControllerState,
    timing: Timing,
    page_url: Url,
    log: PhaseLog,
}

impl TransitionController {
    pub(crate) fn from_parts(page_url: Url, timing: Timing) -> Self {
        Self {
            state: ControllerState::fresh(),
            timing,
            page_url,
            log: PhaseLog::new(),
        }
    }

    /// Current visual phase (pure)
    pub fn phase(&self) -> PagePhase {
        self.state.phase
    }

    /// Whether an outbound navigation is in flight (pure)
    pub fn navigation_in_flight(&self) -> bool {
        self.state.guard_engaged
    }

    /// The timing envelope this controller runs with (pure)
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// The URL of the page this controller serves (pure)
    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// Phase change log (pure)
    pub fn log(&self) -> &PhaseLog {
        &self.log
    }

    /// Feed one event through the planner and absorb the resulting state.
    ///
    /// Returns the planned actions for the caller to execute, in order.
    /// Entry points below are the named wiring for each browser signal;
    /// `dispatch` itself stays public for harnesses that drive raw events.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Action> {
        let reaction = react(self.state, &event, self.timing, &self.page_url);

        if reaction.state.phase != self.state.phase {
            trace!(
                "transition: phase {} -> {} cause={}",
                self.state.phase.name(),
                reaction.state.phase.name(),
                event.kind().name()
            );
            self.log = self.log.record(PhaseChange {
                from: self.state.phase,
                to: reaction.state.phase,
                at: Utc::now(),
                cause: event.kind(),
            });
        }

        match &reaction.outcome {
            Outcome::Idle => {}
            Outcome::RevealDeferred => {
                trace!("transition: reveal deferred until dom ready");
            }
            Outcome::RevealArmed => {
                trace!(
                    "transition: reveal armed delay={:?}",
                    self.timing.ready_delay
                );
            }
            Outcome::Revealed => {
                debug!("transition: page revealed");
            }
            Outcome::ClickPassedThrough(reason) => {
                trace!("transition: click left to browser reason={reason}");
            }
            Outcome::NavigationAccepted { url } => {
                debug!(
                    "transition: exit begun url={url} duration={:?}",
                    self.timing.exit_duration
                );
            }
            Outcome::NavigationIgnored { url } => {
                debug!("transition: navigation dropped, one already in flight url={url}");
            }
            Outcome::NavigationCommitted { url } => {
                debug!("transition: navigation committed url={url}");
            }
            Outcome::GuardReleased {
                restored_from_cache,
            } => {
                debug!("transition: page shown restored={restored_from_cache}");
            }
        }

        self.state = reaction.state;
        reaction.actions
    }

    /// Entry point for installation: begin revealing the page.
    ///
    /// Pass the document readiness observed at install time. On a parsed
    /// document this arms the ready-delay timer; while still parsing the
    /// reveal waits for [`dom_content_loaded`](Self::dom_content_loaded).
    pub fn reveal(&mut self, ready_state: ReadyState) -> Vec<Action> {
        self.dispatch(PageEvent::Attached { ready_state })
    }

    /// Entry point for the DOM-ready signal.
    pub fn dom_content_loaded(&mut self) -> Vec<Action> {
        self.dispatch(PageEvent::DomContentLoaded)
    }

    /// Entry point for a delegated document click.
    ///
    /// `anchor` is the closest anchor ancestor of the click target, `None`
    /// when the click hit nothing link-like.
    pub fn link_activated(&mut self, anchor: Option<Anchor>) -> Vec<Action> {
        self.dispatch(PageEvent::ClickObserved { anchor })
    }

    /// Entry point for programmatic navigation with a fade-out.
    ///
    /// The URL is carried to the navigation sink verbatim; callers decide
    /// what counts as valid, exactly as with a raw location assignment.
    pub fn navigate(&mut self, url: impl Into<String>) -> Vec<Action> {
        self.dispatch(PageEvent::NavigationRequested { url: url.into() })
    }

    /// Entry point for an elapsed timer previously planned via
    /// [`Action::Schedule`].
    pub fn wake_elapsed(&mut self, wake: Wake) -> Vec<Action> {
        self.dispatch(PageEvent::WakeElapsed(wake))
    }

    /// Entry point for the page-show lifecycle signal.
    ///
    /// `restored_from_cache` mirrors the event's persisted indicator: true
    /// when the page instance was revived from the history cache.
    pub fn page_shown(&mut self, restored_from_cache: bool) -> Vec<Action> {
        self.dispatch(PageEvent::PageShown {
            restored_from_cache,
        })
    }
}
