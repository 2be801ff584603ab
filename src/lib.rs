//! Curtain: page navigation with a fade between pages
//!
//! Curtain is built on Stillwater's "pure core, imperative shell" philosophy.
//! Every decision the controller makes is a pure function from the current
//! state and an incoming page event to a new state and a list of actions,
//! while the actions themselves (document flags, timers, the real
//! navigation) are executed through the host adapter's Effect.
//!
//! # Core Concepts
//!
//! - **Phases**: each page instance moves Loading, then Ready, then Exiting
//! - **Click policy**: pure classification of which clicks to intercept
//! - **Planner**: `(state, event)` to `(new state, actions)`, no side effects
//! - **Host adapter**: capability traits plus an Effect executing planned actions
//!
//! # Example
//!
//! ```rust
//! use curtain::builder::ControllerBuilder;
//! use curtain::core::{Action, Anchor, PresentationFlag, ReadyState, Wake};
//!
//! let mut controller = ControllerBuilder::new()
//!     .page_url("https://site.example/guides/intro")
//!     .build()
//!     .unwrap();
//!
//! // The page finished loading: arm the reveal and let the timer fire.
//! controller.reveal(ReadyState::Complete);
//! let actions = controller.wake_elapsed(Wake::Reveal);
//! assert_eq!(actions, vec![Action::Apply(PresentationFlag::Ready)]);
//!
//! // An in-site link click: keep the browser out of it and fade out first.
//! let actions = controller.link_activated(Some(Anchor::to("/dashboard")));
//! assert_eq!(actions[0], Action::SuppressNativeClick);
//! assert_eq!(actions[1], Action::Apply(PresentationFlag::Exit));
//! assert!(controller.navigation_in_flight());
//! ```

pub mod builder;
pub mod controller;
pub mod core;
pub mod host;

// Re-export commonly used types
pub use crate::builder::{BuildError, ControllerBuilder};
pub use crate::controller::TransitionController;
pub use crate::core::{
    Action, Anchor, ControllerState, PageEvent, PagePhase, PresentationFlag, ReadyState, Timing,
    Wake,
};
pub use crate::host::{HostError, NavigationSink, PresentationSurface, TimerHost};
