//! URL parsing into a component record.

use indexmap::IndexMap;
use url::Url;
use crate::error::UrlHelperError;
use crate::scheme::{apply_scheme, Scheme};
use crate::types::{Options, ParsedUrl};

/// Parse a URL string, possibly schemeless, into its components.
///
/// Input without a literal `http://`/`https://` prefix is defaulted to
/// `http://` (or whatever [`Options`] forces) before parsing. Parsing itself
/// is delegated to the `url` crate, so encoding and canonicalization follow
/// the URL Standard; a rejected input fails with
/// [`UrlHelperError::InvalidUrl`].
///
/// # Examples
///
/// ```
/// use url_helper::{parse, Options};
///
/// let parts = parse("api.example.com:8080/search?q=rust#results", Options::default()).unwrap();
/// assert_eq!(parts.protocol, "http:");
/// assert_eq!(parts.host, "api.example.com:8080");
/// assert_eq!(parts.pathname, "/search");
/// assert_eq!(parts.hash, "#results");
/// assert_eq!(parts.param("q"), Some("rust"));
/// ```
pub fn parse(url: &str, options: Options) -> Result<ParsedUrl, UrlHelperError> {
    let candidate = apply_scheme(url, options, Scheme::Http);
    let parsed = Url::parse(&candidate).map_err(UrlHelperError::InvalidUrl)?;

    // Insert folding: a repeated key keeps its first position and takes its
    // last value.
    let mut params = IndexMap::new();
    for (key, value) in parsed.query_pairs() {
        params.insert(key.into_owned(), value.into_owned());
    }

    // http(s) URLs always carry a host, and the parser drops default ports.
    let hostname = parsed.host_str().unwrap_or_default().to_string();
    let port = parsed.port().map(|p| p.to_string()).unwrap_or_default();
    let host = if port.is_empty() {
        hostname.clone()
    } else {
        format!("{}:{}", hostname, port)
    };

    Ok(ParsedUrl {
        protocol: format!("{}:", parsed.scheme()),
        host,
        hostname,
        port,
        pathname: parsed.path().to_string(),
        search: match parsed.query() {
            Some(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        },
        hash: match parsed.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{}", fragment),
            _ => String::new(),
        },
        params,
    })
}
