//! Page phase and the presentation-flag contract.
//!
//! A page instance moves through a small visual lifecycle: hidden while the
//! document settles and revealed once layout is ready; when a navigation is
//! accepted it fades back out. The phase is reflected onto the document as
//! two independent flags that an external stylesheet maps to fade rules; the
//! controller guarantees only the flag transitions, never their styling.

use serde::{Deserialize, Serialize};

/// Visual lifecycle phase of one loaded page instance.
///
/// The flag contract per phase:
///
/// - `Loading`: neither flag set.
/// - `Ready`: `page-ready` set, `page-exit` absent.
/// - `Exiting`: `page-exit` set (governs the fade-out), independent of
///   whether `page-ready` was ever applied.
///
/// # Example
///
/// ```rust
/// use curtain::PagePhase;
///
/// let phase = PagePhase::Loading;
/// assert_eq!(phase.name(), "Loading");
/// assert!(!phase.is_terminal());
/// assert!(PagePhase::Exiting.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PagePhase {
    /// Fresh document, not yet revealed.
    Loading,
    /// Revealed and interactive.
    Ready,
    /// Fade-out underway; the document is about to be torn down.
    Exiting,
}

impl PagePhase {
    /// The phase's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Ready => "Ready",
            Self::Exiting => "Exiting",
        }
    }

    /// Whether this phase ends the instance's normal lifecycle.
    ///
    /// `Exiting` is terminal for the page instance: the document unloads
    /// before any reverse transition, except for the history-cache restore
    /// path, which forces the phase back to `Ready`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exiting)
    }
}

/// Document-level presentation flags consumed by an external stylesheet.
///
/// The stylesheet maps presence/absence of these flags to CSS transition
/// rules; the controller only adds and removes them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PresentationFlag {
    /// `page-ready`: the page may animate in.
    Ready,
    /// `page-exit`: the page is fading out ahead of a navigation.
    Exit,
}

impl PresentationFlag {
    /// The flag name as it appears on the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "page-ready",
            Self::Exit => "page-exit",
        }
    }
}
