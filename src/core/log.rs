//! Phase change log.
//!
//! Immutable record of the visual phases a page instance moved through,
//! with timestamps and the event that caused each move.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::phase::PagePhase;
use super::plan::EventKind;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use curtain::core::{EventKind, PagePhase, PhaseChange};
/// use chrono::Utc;
///
/// let change = PhaseChange {
///     from: PagePhase::Loading,
///     to: PagePhase::Ready,
///     at: Utc::now(),
///     cause: EventKind::RevealWake,
/// };
/// assert_eq!(change.to, PagePhase::Ready);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    /// The phase being left.
    pub from: PagePhase,
    /// The phase being entered.
    pub to: PagePhase,
    /// When the change occurred.
    pub at: DateTime<Utc>,
    /// The event category that caused it.
    pub cause: EventKind,
}

/// Ordered log of phase changes.
///
/// The log is immutable: `record` returns a new log with the change
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use curtain::core::{EventKind, PagePhase, PhaseChange, PhaseLog};
/// use chrono::Utc;
///
/// let log = PhaseLog::new();
/// let log = log.record(PhaseChange {
///     from: PagePhase::Loading,
///     to: PagePhase::Ready,
///     at: Utc::now(),
///     cause: EventKind::RevealWake,
/// });
/// let log = log.record(PhaseChange {
///     from: PagePhase::Ready,
///     to: PagePhase::Exiting,
///     at: Utc::now(),
///     cause: EventKind::Click,
/// });
///
/// assert_eq!(
///     log.path(),
///     vec![PagePhase::Loading, PagePhase::Ready, PagePhase::Exiting]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseLog {
    changes: Vec<PhaseChange>,
}

impl PhaseLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new log.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// The phases traversed in order: the starting phase, then the `to`
    /// phase of each change.
    pub fn path(&self) -> Vec<PagePhase> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        for change in &self.changes {
            path.push(change.to);
        }
        path
    }

    /// Elapsed time from the first to the last recorded change, `None`
    /// while the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded changes in order.
    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }
}
