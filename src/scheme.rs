//! Scheme-defaulting policy shared by every operation.
//!
//! Inputs without a literal `http://`/`https://` prefix get one injected
//! before they reach the parser: `force_https` wins, then `force_http`, then
//! the operation's own default (http for the read-style operations, https
//! for the constructive ones).

use crate::types::Options;
use std::borrow::Cow;

/// The two schemes this crate deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Exact, case-sensitive literal prefix check.
///
/// Deliberately shallow rather than a scheme-grammar check: `"httpx://a"`
/// and `"HTTP://A"` both count as schemeless and get a scheme injected,
/// keeping observable behavior on edge inputs identical across entry points.
pub(crate) fn has_explicit_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolve which scheme to inject: `force_https` always wins over
/// `force_http`; with neither set, the operation's default applies.
pub(crate) fn select_scheme(options: Options, default: Scheme) -> Scheme {
    if options.force_https {
        Scheme::Https
    } else if options.force_http {
        Scheme::Http
    } else {
        default
    }
}

/// Prefix a schemeless input with the selected scheme; inputs that already
/// carry one pass through unchanged.
pub(crate) fn apply_scheme<'a>(url: &'a str, options: Options, default: Scheme) -> Cow<'a, str> {
    if has_explicit_scheme(url) {
        Cow::Borrowed(url)
    } else {
        let scheme = select_scheme(options, default);
        Cow::Owned(format!("{}://{}", scheme.as_str(), url))
    }
}
