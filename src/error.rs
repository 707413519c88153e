//! Error types for URL helper operations.

use thiserror::Error;

/// Errors that can occur while parsing, building, or rewriting URLs.
///
/// Display messages are intentionally generic (they mirror the messages
/// callers already match on); the underlying parser failure is retained as
/// the error source where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlHelperError {
    /// The URL parser rejected the (possibly scheme-defaulted) input.
    #[error("Invalid URL")]
    InvalidUrl(#[source] url::ParseError),

    /// `build` was called with an empty host.
    #[error("Host is required to build a URL")]
    MissingHost,

    /// `join_strict` requires the base to carry a literal `http://` or
    /// `https://` prefix.
    #[error("Invalid base URL: Missing schema (http/https)")]
    MissingBaseScheme,

    /// A join base failed to parse as a URL.
    #[error("Invalid base URL")]
    InvalidBaseUrl(#[source] url::ParseError),
}
