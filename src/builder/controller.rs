//! Builder for constructing transition controllers.

use std::time::Duration;

use url::Url;

use crate::builder::error::BuildError;
use crate::controller::TransitionController;
use crate::core::Timing;

/// Builder for constructing a transition controller with a fluent API.
///
/// The page URL is the one required field; timing falls back to the
/// standard fade-out duration and reveal delay.
pub struct ControllerBuilder {
    page_url: Option<String>,
    timing: Timing,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            page_url: None,
            timing: Timing::default(),
        }
    }

    /// Set the URL of the page this controller serves (required).
    ///
    /// Link destinations are resolved against it, so it must be an
    /// absolute, base-capable URL.
    pub fn page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }

    /// Override how long the fade-out runs before navigating.
    pub fn exit_duration(mut self, duration: Duration) -> Self {
        self.timing.exit_duration = duration;
        self
    }

    /// Override the settle delay before a loaded page is revealed.
    pub fn ready_delay(mut self, delay: Duration) -> Self {
        self.timing.ready_delay = delay;
        self
    }

    /// Replace the whole timing envelope.
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Build the controller.
    /// Returns an error if the page URL is missing or unusable.
    pub fn build(self) -> Result<TransitionController, BuildError> {
        let raw = self.page_url.ok_or(BuildError::MissingPageUrl)?;

        let url = Url::parse(&raw).map_err(|source| BuildError::InvalidPageUrl {
            url: raw.clone(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(BuildError::OpaquePageUrl { url: raw });
        }

        Ok(TransitionController::from_parts(url, self.timing))
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
