//! Anchor-click classification policy.
//!
//! Decides, for one observed click, whether the controller should intercept
//! the navigation and fade out first, or leave the browser's default
//! behavior untouched. The policy is a pure function: rules are evaluated in
//! a fixed order and the first matching rule wins. Every non-intercepting
//! outcome is silent; a malformed destination is never an error, just a
//! reason to stand aside.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use url::Url;

/// What the click handler observed about the activated anchor.
///
/// `None` fields model missing attributes; an empty `href` counts as no
/// destination, matching how the browser treats it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, absolute or relative.
    pub href: Option<String>,
    /// Raw `target` attribute.
    pub target: Option<String>,
}

impl Anchor {
    /// Anchor with a destination and no target attribute.
    pub fn to(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            target: None,
        }
    }

    /// Set the `target` attribute.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Outcome of classifying one click.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickDisposition {
    /// Suppress the native navigation and transition to the resolved URL.
    Intercept(Url),
    /// Leave the browser's default behavior untouched.
    Native(NativeReason),
}

/// Why a click was left to the browser, one reason per policy rule.
///
/// These double as the violation values accumulated by [`audit`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NativeReason {
    #[error("click target is not an anchor or has no destination")]
    NoDestination,

    #[error("anchor opens in a new tab")]
    NewTab,

    #[error("destination scheme is not navigational")]
    NonNavigationalScheme,

    #[error("destination is a same-document fragment")]
    FragmentJump,

    #[error("destination could not be parsed")]
    MalformedDestination,

    #[error("destination origin differs from the page origin")]
    CrossOrigin,

    #[error("destination path matches the current page")]
    SamePage,
}

/// Classify one click against the page URL.
///
/// Rules, in order, short-circuiting on the first match:
///
/// 1. no anchor, or no (or empty) `href`: native;
/// 2. `target="_blank"`: native;
/// 3. `mailto:` / `tel:` destination: native;
/// 4. fragment-only destination: native;
/// 5. destination fails to resolve against the page URL: native;
/// 6. destination origin differs from the page origin: native;
/// 7. destination path equals the current path: native;
/// 8. otherwise intercept with the resolved URL.
///
/// # Example
///
/// ```rust
/// use curtain::core::{classify, Anchor, ClickDisposition, NativeReason};
/// use url::Url;
///
/// let page = Url::parse("https://site.example/").unwrap();
///
/// match classify(&page, Some(&Anchor::to("/dashboard"))) {
///     ClickDisposition::Intercept(url) => {
///         assert_eq!(url.as_str(), "https://site.example/dashboard");
///     }
///     ClickDisposition::Native(_) => panic!("same-origin link should intercept"),
/// }
///
/// let foreign = Anchor::to("https://other.example/page");
/// assert_eq!(
///     classify(&page, Some(&foreign)),
///     ClickDisposition::Native(NativeReason::CrossOrigin),
/// );
/// ```
pub fn classify(page: &Url, anchor: Option<&Anchor>) -> ClickDisposition {
    let Some(anchor) = anchor else {
        return ClickDisposition::Native(NativeReason::NoDestination);
    };
    let Some(href) = anchor.href.as_deref().filter(|href| !href.is_empty()) else {
        return ClickDisposition::Native(NativeReason::NoDestination);
    };

    if anchor.target.as_deref() == Some("_blank") {
        return ClickDisposition::Native(NativeReason::NewTab);
    }
    if href.starts_with("mailto:") || href.starts_with("tel:") {
        return ClickDisposition::Native(NativeReason::NonNavigationalScheme);
    }
    if href.starts_with('#') {
        return ClickDisposition::Native(NativeReason::FragmentJump);
    }

    let Ok(destination) = page.join(href) else {
        return ClickDisposition::Native(NativeReason::MalformedDestination);
    };

    if destination.origin() != page.origin() {
        return ClickDisposition::Native(NativeReason::CrossOrigin);
    }
    if destination.path() == page.path() {
        return ClickDisposition::Native(NativeReason::SamePage);
    }

    ClickDisposition::Intercept(destination)
}

/// Diagnostic companion to [`classify`]: evaluate every applicable rule
/// instead of stopping at the first match, accumulating ALL reasons a click
/// would be left to the browser.
///
/// Returns `Success` with the resolved URL when the click would be
/// intercepted, otherwise `Failure` with every reason that applies. Not used
/// on the interception path; exists for embedders debugging why a link does
/// not transition.
pub fn audit(page: &Url, anchor: Option<&Anchor>) -> Validation<Url, NonEmptyVec<NativeReason>> {
    let Some(anchor) = anchor else {
        return Validation::fail(NativeReason::NoDestination);
    };

    let mut checks: Vec<Validation<(), NonEmptyVec<NativeReason>>> = Vec::new();
    let href = anchor.href.as_deref().filter(|href| !href.is_empty());

    checks.push(match href {
        Some(_) => Validation::success(()),
        None => Validation::fail(NativeReason::NoDestination),
    });
    checks.push(if anchor.target.as_deref() == Some("_blank") {
        Validation::fail(NativeReason::NewTab)
    } else {
        Validation::success(())
    });

    let mut destination = None;
    if let Some(href) = href {
        checks.push(if href.starts_with("mailto:") || href.starts_with("tel:") {
            Validation::fail(NativeReason::NonNavigationalScheme)
        } else {
            Validation::success(())
        });
        checks.push(if href.starts_with('#') {
            Validation::fail(NativeReason::FragmentJump)
        } else {
            Validation::success(())
        });

        match page.join(href) {
            Ok(resolved) => {
                checks.push(if resolved.origin() != page.origin() {
                    Validation::fail(NativeReason::CrossOrigin)
                } else {
                    Validation::success(())
                });
                checks.push(if resolved.path() == page.path() {
                    Validation::fail(NativeReason::SamePage)
                } else {
                    Validation::success(())
                });
                destination = Some(resolved);
            }
            Err(_) => checks.push(Validation::fail(NativeReason::MalformedDestination)),
        }
    }

    match (Validation::all_vec(checks), destination) {
        (Validation::Success(_), Some(resolved)) => Validation::success(resolved),
        (Validation::Failure(reasons), _) => Validation::Failure(reasons),
        // A missing or unparsable href always contributes a failure above.
        (Validation::Success(_), None) => Validation::fail(NativeReason::NoDestination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://site.example/").unwrap()
    }

    #[test]
    fn missing_anchor_is_left_to_the_browser() {
        assert_eq!(
            classify(&page(), None),
            ClickDisposition::Native(NativeReason::NoDestination)
        );
    }

    #[test]
    fn missing_or_empty_href_is_left_to_the_browser() {
        let no_href = Anchor::default();
        let empty_href = Anchor::to("");

        assert_eq!(
            classify(&page(), Some(&no_href)),
            ClickDisposition::Native(NativeReason::NoDestination)
        );
        assert_eq!(
            classify(&page(), Some(&empty_href)),
            ClickDisposition::Native(NativeReason::NoDestination)
        );
    }

    #[test]
    fn blank_target_is_never_intercepted() {
        let anchor = Anchor::to("/dashboard").with_target("_blank");
        assert_eq!(
            classify(&page(), Some(&anchor)),
            ClickDisposition::Native(NativeReason::NewTab)
        );
    }

    #[test]
    fn named_targets_do_not_block_interception() {
        let anchor = Anchor::to("/dashboard").with_target("content");
        assert!(matches!(
            classify(&page(), Some(&anchor)),
            ClickDisposition::Intercept(_)
        ));
    }

    #[test]
    fn mailto_and_tel_pass_through() {
        let mail = Anchor::to("mailto:team@site.example");
        let tel = Anchor::to("tel:+15551234567");

        assert_eq!(
            classify(&page(), Some(&mail)),
            ClickDisposition::Native(NativeReason::NonNavigationalScheme)
        );
        assert_eq!(
            classify(&page(), Some(&tel)),
            ClickDisposition::Native(NativeReason::NonNavigationalScheme)
        );
    }

    #[test]
    fn fragment_jump_passes_through() {
        let anchor = Anchor::to("#pricing");
        assert_eq!(
            classify(&page(), Some(&anchor)),
            ClickDisposition::Native(NativeReason::FragmentJump)
        );
    }

    #[test]
    fn unparsable_destination_passes_through() {
        let anchor = Anchor::to("https://[not-a-host/");
        assert_eq!(
            classify(&page(), Some(&anchor)),
            ClickDisposition::Native(NativeReason::MalformedDestination)
        );
    }

    #[test]
    fn cross_origin_passes_through() {
        for href in [
            "https://other.example/page",
            "http://site.example/page",
            "https://site.example:8443/page",
        ] {
            assert_eq!(
                classify(&page(), Some(&Anchor::to(href))),
                ClickDisposition::Native(NativeReason::CrossOrigin),
                "href {href} should be cross-origin"
            );
        }
    }

    #[test]
    fn same_path_passes_through_even_with_query_or_fragment() {
        let current = Url::parse("https://site.example/about").unwrap();

        for href in ["/about", "/about?tab=team", "/about#history"] {
            assert_eq!(
                classify(&current, Some(&Anchor::to(href))),
                ClickDisposition::Native(NativeReason::SamePage),
                "href {href} should count as the same page"
            );
        }
    }

    #[test]
    fn trailing_slash_counts_as_a_different_path() {
        let current = Url::parse("https://site.example/about").unwrap();
        assert!(matches!(
            classify(&current, Some(&Anchor::to("/about/"))),
            ClickDisposition::Intercept(_)
        ));
    }

    #[test]
    fn relative_href_resolves_against_the_page() {
        let current = Url::parse("https://site.example/guides/intro").unwrap();
        match classify(&current, Some(&Anchor::to("advanced"))) {
            ClickDisposition::Intercept(url) => {
                assert_eq!(url.as_str(), "https://site.example/guides/advanced");
            }
            other => panic!("expected interception, got {other:?}"),
        }
    }

    #[test]
    fn rule_order_prefers_new_tab_over_scheme() {
        // A _blank mailto anchor must report NewTab, not the scheme rule.
        let anchor = Anchor::to("mailto:team@site.example").with_target("_blank");
        assert_eq!(
            classify(&page(), Some(&anchor)),
            ClickDisposition::Native(NativeReason::NewTab)
        );
    }

    #[test]
    fn audit_accepts_what_classify_intercepts() {
        let anchor = Anchor::to("/dashboard");
        let audited = audit(&page(), Some(&anchor));

        match audited {
            Validation::Success(url) => {
                assert_eq!(url.as_str(), "https://site.example/dashboard");
            }
            Validation::Failure(reasons) => panic!("unexpected reasons: {reasons:?}"),
        }
    }

    #[test]
    fn audit_accumulates_every_applicable_reason() {
        // New tab AND same-document fragment at once.
        let anchor = Anchor::to("#top").with_target("_blank");
        let audited = audit(&page(), Some(&anchor));

        match audited {
            Validation::Failure(reasons) => {
                assert!(reasons.iter().any(|r| matches!(r, NativeReason::NewTab)));
                assert!(reasons
                    .iter()
                    .any(|r| matches!(r, NativeReason::FragmentJump)));
            }
            Validation::Success(url) => panic!("expected failure, resolved {url}"),
        }
    }

    #[test]
    fn audit_reports_malformed_destination_once() {
        let anchor = Anchor::to("https://[not-a-host/");
        let audited = audit(&page(), Some(&anchor));

        match audited {
            Validation::Failure(reasons) => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons
                    .iter()
                    .any(|r| matches!(r, NativeReason::MalformedDestination)));
            }
            Validation::Success(url) => panic!("expected failure, resolved {url}"),
        }
    }

    #[test]
    fn audit_and_classify_agree_on_interception() {
        let cases = [
            Anchor::to("/dashboard"),
            Anchor::to("#top"),
            Anchor::to("https://other.example/"),
            Anchor::to("mailto:x@y.example"),
            Anchor::default(),
        ];

        for anchor in &cases {
            let intercepted = matches!(
                classify(&page(), Some(anchor)),
                ClickDisposition::Intercept(_)
            );
            let audited_ok = audit(&page(), Some(anchor)).is_success();
            assert_eq!(intercepted, audited_ok, "disagreement on {anchor:?}");
        }
    }
}
