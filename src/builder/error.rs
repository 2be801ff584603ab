//! Build errors for the controller builder.

use thiserror::Error;

/// Errors that can occur when building a transition controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Page URL not specified. Call .page_url(url) before .build()")]
    MissingPageUrl,

    #[error("Page URL {url:?} is not an absolute URL")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Page URL {url:?} cannot serve as a base for resolving links")]
    OpaquePageUrl { url: String },
}
