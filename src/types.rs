//! Core value types exchanged by the URL helpers.

use indexmap::IndexMap;

/// Scheme-forcing options accepted by every operation.
///
/// Both flags only matter for schemeless input; a URL that already starts
/// with `http://` or `https://` is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Force `https://` when a scheme has to be injected (highest priority).
    pub force_https: bool,
    /// Force `http://` when a scheme has to be injected (ignored when
    /// `force_https` is set).
    pub force_http: bool,
}

impl Options {
    /// Options that force `https://` onto schemeless input.
    pub fn https() -> Self {
        Self {
            force_https: true,
            force_http: false,
        }
    }

    /// Options that force `http://` onto schemeless input.
    pub fn http() -> Self {
        Self {
            force_https: false,
            force_http: true,
        }
    }
}

/// URL components extracted by [`parse`](crate::parse).
///
/// Fields follow the WHATWG accessor conventions: `protocol` keeps its
/// trailing colon, `search` and `hash` keep their leading `?`/`#` and are
/// empty when the component is absent or empty, and `port` is empty when the
/// scheme default applies.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUrl {
    /// Scheme including the trailing colon (e.g. "https:").
    pub protocol: String,
    /// Hostname plus `:port` when a non-default port is present.
    pub host: String,
    /// Hostname only (e.g. "api.example.com").
    pub hostname: String,
    /// Port as text; empty when the scheme default applies.
    pub port: String,
    /// Path including the leading slash.
    pub pathname: String,
    /// Query including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    /// Decoded query parameters. Insertion-ordered; a repeated key keeps its
    /// first position and its last value.
    pub params: IndexMap<String, String>,
}

impl ParsedUrl {
    /// Check if a non-default port is present.
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// Check if a query string is present.
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Look up a single query parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Components for [`build`](crate::build).
///
/// `pathname`, `search`, and `hash` are concatenated onto the authority
/// verbatim, so `search`/`hash` are expected to carry their own leading
/// `?`/`#` and `pathname` its leading slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    /// Host, optionally with a port (e.g. "api.example.com:8080"). Required.
    pub host: String,
    /// Path; defaults to "/".
    pub pathname: String,
    /// Query including its leading `?`; defaults to empty.
    pub search: String,
    /// Fragment including its leading `#`; defaults to empty.
    pub hash: String,
}

impl BuildSpec {
    /// Create a spec for `host` with the root pathname and no search/hash.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }
}

impl Default for BuildSpec {
    fn default() -> Self {
        Self::new("")
    }
}

/// Base and path segments for [`join`](crate::join).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JoinSpec {
    /// Base URL. When absent (or empty), `join` falls back to the caller's
    /// origin provider, or to a root-relative path without one.
    pub base: Option<String>,
    /// Path segments appended to the base path, in order.
    pub paths: Vec<String>,
}

impl JoinSpec {
    /// Segments only, no base.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: None,
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Segments joined onto `base`.
    pub fn with_base<B, I, S>(base: B, paths: I) -> Self
    where
        B: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: Some(base.into()),
            ..Self::new(paths)
        }
    }
}
