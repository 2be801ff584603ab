//! Builder API for ergonomic controller construction.
//!
//! This module provides a fluent builder for creating transition
//! controllers with minimal boilerplate while keeping construction
//! fallible only where it has to be.

pub mod controller;
pub mod error;

pub use controller::ControllerBuilder;
pub use error::BuildError;

use crate::controller::TransitionController;

/// Create a controller for a page with the standard timing.
///
/// # Example
///
/// ```
/// use curtain::builder::standard_controller;
///
/// let controller = standard_controller("https://site.example/guides/intro").unwrap();
/// assert!(!controller.navigation_in_flight());
/// ```
pub fn standard_controller(
    page_url: impl Into<String>,
) -> Result<TransitionController, BuildError> {
    ControllerBuilder::new().page_url(page_url).build()
}
