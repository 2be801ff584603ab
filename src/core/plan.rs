//! Pure planner: one page event in, the next state and an action list out.
//!
//! Every listener of the transition controller is expressed through
//! [`react`], a pure function with no environment access. Side effects are
//! returned as [`Action`] values and executed elsewhere by the host adapter,
//! keeping the decision logic deterministic and testable without a document
//! or timers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::link::{classify, Anchor, ClickDisposition, NativeReason};
use super::phase::{PagePhase, PresentationFlag};

/// Time reserved for the fade-out before the real navigation is issued.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(550);

/// Settle delay before a freshly loaded page is revealed.
pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(50);

/// Fixed timing envelope for one controller instance.
///
/// Not reloadable at runtime; constructed once through the builder.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timing {
    /// How long the fade-out runs before the destination is assigned.
    pub exit_duration: Duration,
    /// How long to wait before revealing a freshly loaded page.
    pub ready_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            exit_duration: DEFAULT_EXIT_DURATION,
            ready_delay: DEFAULT_READY_DELAY,
        }
    }
}

/// Document readiness sampled by the host when the controller attaches.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadyState {
    /// Still parsing; the DOM-ready signal has not fired yet.
    Loading,
    /// DOM parsed, subresources possibly outstanding.
    Interactive,
    /// Fully loaded.
    Complete,
}

impl ReadyState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Identity of a fire-and-forget timer, carried by a schedule action and
/// handed back unchanged when the delay elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// The ready-delay timer: reveal the page.
    Reveal,
    /// The exit-duration timer: issue the real navigation.
    CommitNavigation { url: String },
}

/// Discrete browser signals the controller reacts to.
///
/// The host dispatches `Attached` once when the controller is installed and
/// forwards `DomContentLoaded` only if it fires afterwards; timers scheduled
/// through [`Action::Schedule`] come back as `WakeElapsed`.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// Controller installed on a fresh page instance.
    Attached { ready_state: ReadyState },
    /// The deferred branch of reveal: the DOM finished parsing.
    DomContentLoaded,
    /// A delegated document click; `None` when no anchor ancestor exists.
    ClickObserved { anchor: Option<Anchor> },
    /// Programmatic navigation request (the `navigate` entry point).
    NavigationRequested { url: String },
    /// A previously scheduled timer fired.
    WakeElapsed(Wake),
    /// The page-show lifecycle signal, with the history-cache indicator.
    PageShown { restored_from_cache: bool },
}

/// Coarse event category, recorded as the cause of a phase change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventKind {
    Attach,
    DomReady,
    Click,
    NavigationRequest,
    RevealWake,
    NavigationWake,
    PageShow,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attach => "Attach",
            Self::DomReady => "DomReady",
            Self::Click => "Click",
            Self::NavigationRequest => "NavigationRequest",
            Self::RevealWake => "RevealWake",
            Self::NavigationWake => "NavigationWake",
            Self::PageShow => "PageShow",
        }
    }
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Attached { .. } => EventKind::Attach,
            Self::DomContentLoaded => EventKind::DomReady,
            Self::ClickObserved { .. } => EventKind::Click,
            Self::NavigationRequested { .. } => EventKind::NavigationRequest,
            Self::WakeElapsed(Wake::Reveal) => EventKind::RevealWake,
            Self::WakeElapsed(Wake::CommitNavigation { .. }) => EventKind::NavigationWake,
            Self::PageShown { .. } => EventKind::PageShow,
        }
    }
}

/// Side effects planned by [`react`] and executed by the host adapter,
/// never by the planner itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Add a presentation flag to the document.
    Apply(PresentationFlag),
    /// Remove a presentation flag from the document.
    Withdraw(PresentationFlag),
    /// Prevent the browser's default handling of the intercepted click.
    SuppressNativeClick,
    /// Arm a fire-and-forget timer; not cancellable once issued.
    Schedule { delay: Duration, wake: Wake },
    /// Assign the destination: the real browser navigation.
    ///
    /// Carried verbatim; the controller never validates it here. An
    /// unusable value degrades to whatever the navigation sink does with
    /// it, exactly as a raw location assignment would.
    Assign { url: String },
}

/// Per-instance mutable state: the re-entrancy guard and the visual phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ControllerState {
    /// True once a transition-triggered navigation has started. At most one
    /// outbound navigation may be in flight per page instance.
    pub guard_engaged: bool,
    /// Current visual phase.
    pub phase: PagePhase,
}

impl ControllerState {
    /// State of a freshly loaded page instance.
    pub fn fresh() -> Self {
        Self {
            guard_engaged: false,
            phase: PagePhase::Loading,
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::fresh()
    }
}

/// What the planner decided, for shells that want to log or branch on it.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to do.
    Idle,
    /// Still parsing; reveal waits for the DOM-ready signal.
    RevealDeferred,
    /// Reveal timer armed.
    RevealArmed,
    /// The ready flag was applied; the page is visible.
    Revealed,
    /// The click was left to the browser for the given reason.
    ClickPassedThrough(NativeReason),
    /// A navigation was accepted: fade-out begun, commit timer armed.
    NavigationAccepted { url: String },
    /// A navigation arrived while one was already in flight; dropped.
    NavigationIgnored { url: String },
    /// The commit timer elapsed; the destination is being assigned.
    NavigationCommitted { url: String },
    /// Page-show processed: guard released, phase forced if cache-restored.
    GuardReleased { restored_from_cache: bool },
}

/// Result of one pure planning step.
#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub state: ControllerState,
    pub outcome: Outcome,
    pub actions: Vec<Action>,
}

impl Reaction {
    fn idle(state: ControllerState) -> Self {
        Self {
            state,
            outcome: Outcome::Idle,
            actions: Vec::new(),
        }
    }
}

/// The pure step function: (state, event) to (next state, actions).
///
/// `page` is the URL of the document this controller instance serves; the
/// click policy resolves destinations against it.
pub fn react(state: ControllerState, event: &PageEvent, timing: Timing, page: &Url) -> Reaction {
    match event {
        PageEvent::Attached { ready_state } => {
            if ready_state.is_loading() {
                Reaction {
                    state,
                    outcome: Outcome::RevealDeferred,
                    actions: Vec::new(),
                }
            } else {
                arm_reveal(state, timing)
            }
        }

        PageEvent::DomContentLoaded => {
            if state.phase == PagePhase::Loading {
                arm_reveal(state, timing)
            } else {
                Reaction::idle(state)
            }
        }

        PageEvent::ClickObserved { anchor } => match classify(page, anchor.as_ref()) {
            ClickDisposition::Native(reason) => Reaction {
                state,
                outcome: Outcome::ClickPassedThrough(reason),
                actions: Vec::new(),
            },
            ClickDisposition::Intercept(destination) => {
                // The native click is suppressed even when the guard then
                // drops the navigation: the in-flight fade must not race a
                // default page load.
                let mut reaction = accept_navigation(state, destination.to_string(), timing);
                reaction.actions.insert(0, Action::SuppressNativeClick);
                reaction
            }
        },

        PageEvent::NavigationRequested { url } => accept_navigation(state, url.clone(), timing),

        PageEvent::WakeElapsed(Wake::Reveal) => {
            if state.phase == PagePhase::Loading {
                let mut next = state;
                next.phase = PagePhase::Ready;
                Reaction {
                    state: next,
                    outcome: Outcome::Revealed,
                    actions: vec![Action::Apply(PresentationFlag::Ready)],
                }
            } else {
                // Already revealed, or mid-exit; the ready flag is applied
                // at most once per instance.
                Reaction::idle(state)
            }
        }

        PageEvent::WakeElapsed(Wake::CommitNavigation { url }) => Reaction {
            state,
            outcome: Outcome::NavigationCommitted { url: url.clone() },
            actions: vec![Action::Assign { url: url.clone() }],
        },

        PageEvent::PageShown { restored_from_cache } => {
            let mut next = state;
            next.guard_engaged = false;

            let actions = if *restored_from_cache {
                // A cached page must not reappear mid-fade-out: clear the
                // exit residue and show it immediately, no settle delay.
                next.phase = PagePhase::Ready;
                vec![
                    Action::Withdraw(PresentationFlag::Exit),
                    Action::Apply(PresentationFlag::Ready),
                ]
            } else {
                Vec::new()
            };

            Reaction {
                state: next,
                outcome: Outcome::GuardReleased {
                    restored_from_cache: *restored_from_cache,
                },
                actions,
            }
        }
    }
}

fn arm_reveal(state: ControllerState, timing: Timing) -> Reaction {
    Reaction {
        state,
        outcome: Outcome::RevealArmed,
        actions: vec![Action::Schedule {
            delay: timing.ready_delay,
            wake: Wake::Reveal,
        }],
    }
}

fn accept_navigation(state: ControllerState, url: String, timing: Timing) -> Reaction {
    if state.guard_engaged {
        return Reaction {
            state,
            outcome: Outcome::NavigationIgnored { url },
            actions: Vec::new(),
        };
    }

    let mut next = state;
    next.guard_engaged = true;
    next.phase = PagePhase::Exiting;

    Reaction {
        state: next,
        outcome: Outcome::NavigationAccepted { url: url.clone() },
        actions: vec![
            Action::Apply(PresentationFlag::Exit),
            Action::Schedule {
                delay: timing.exit_duration,
                wake: Wake::CommitNavigation { url },
            },
        ],
    }
}
