//! url-helper - Convenience helpers for http(s) URL strings
//!
//! This crate wraps the [`url`] crate's WHATWG parser with a small set of
//! string-in/string-out operations: parsing a URL into its components,
//! building one from parts, joining a base with path segments, normalizing
//! paths, and updating query parameters.
//!
//! # Features
//!
//! - **Scheme defaulting**: schemeless inputs get `http://` or `https://`
//!   per operation, overridable through [`Options`]
//! - **WHATWG semantics**: every result round-trips through the `url`
//!   crate's parser, so outputs are always well-formed
//! - **Ordered parameters**: query parameters keep their document order
//!   through parsing and updates
//! - **No environment reads**: ambient origins are injected by the caller,
//!   never discovered
//!
//! # Quick Start
//!
//! ```
//! use url_helper::{build, join, normalize, parse, set_query_params};
//! use url_helper::{BuildSpec, JoinSpec, Options};
//!
//! // Parse a URL into components
//! let parts = parse("api.example.com:8080/search?q=rust#results", Options::default())?;
//! assert_eq!(parts.hostname, "api.example.com");
//! assert_eq!(parts.param("q"), Some("rust"));
//!
//! // Build a URL from components
//! let mut spec = BuildSpec::new("example.com");
//! spec.pathname = "/docs".to_string();
//! assert_eq!(build(&spec, Options::default())?, "https://example.com/docs");
//!
//! // Join a base with path segments
//! let spec = JoinSpec::with_base("https://example.com/api/", ["/v1/", "users"]);
//! assert_eq!(join(&spec, Options::default())?, "https://example.com/api/v1/users");
//!
//! // Normalize a path
//! let url = normalize("example.com/a/./b/../c", Options::default())?;
//! assert_eq!(url, "http://example.com/a/c");
//!
//! // Update query parameters
//! let url = set_query_params("https://example.com?page=1", &[("page", "2")], Options::default())?;
//! assert_eq!(url, "https://example.com/?page=2");
//! # Ok::<(), url_helper::UrlHelperError>(())
//! ```
//!
//! # Scheme Defaulting
//!
//! Only inputs starting with the literal `http://` or `https://` count as
//! having a scheme; anything else is prefixed before parsing. [`parse`],
//! [`normalize`], and [`set_query_params`] default to `http://`, while
//! [`build`] and [`join`] default to `https://`. `Options::force_https` and
//! `Options::force_http` override the default, with https winning when both
//! are set.
//!
//! # Error Handling
//!
//! All operations return `Result<T, UrlHelperError>`. Messages are generic
//! on purpose so raw input never leaks into logs; the underlying parser
//! error stays reachable through `std::error::Error::source`.

// Re-export the core operations
pub use build::build;
pub use join::{join, join_strict, join_with_origin};
pub use normalize::normalize;
pub use parse::parse;
pub use query::set_query_params;

// Re-export public types
pub use error::UrlHelperError;
pub use types::{BuildSpec, JoinSpec, Options, ParsedUrl};

// Module declarations
pub mod build;
pub mod error;
pub mod join;
pub mod normalize;
pub mod parse;
pub mod query;
pub mod types;

mod scheme;
