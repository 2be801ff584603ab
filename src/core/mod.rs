//! Core transition types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - Visual phases and presentation flags
//! - The click policy deciding which navigations to intercept
//! - The planner turning page events into states and action lists
//! - Immutable phase logging
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod link;
mod log;
mod phase;
mod plan;

pub use link::{audit, classify, Anchor, ClickDisposition, NativeReason};
pub use log::{PhaseChange, PhaseLog};
pub use phase::{PagePhase, PresentationFlag};
pub use plan::{
    react, Action, ControllerState, EventKind, Outcome, PageEvent, Reaction, ReadyState, Timing,
    Wake, DEFAULT_EXIT_DURATION, DEFAULT_READY_DELAY,
};
