//! Path normalization for http(s) URLs.

use url::Url;
use crate::error::UrlHelperError;
use crate::scheme::{apply_scheme, Scheme};
use crate::types::Options;

/// Normalize a URL's path.
///
/// Duplicate slashes are collapsed, `.` segments are dropped, and `..`
/// segments pop their parent (never rising above the root). The query and
/// fragment are left untouched, and a schemeless input is defaulted to
/// `http://` first (or whatever [`Options`] forces).
///
/// Normalizing is idempotent: feeding the output back in returns it
/// unchanged. An input that does not parse after scheme defaulting fails
/// with [`UrlHelperError::InvalidUrl`].
///
/// # Examples
///
/// ```
/// use url_helper::{normalize, Options};
///
/// let url = normalize("example.com/a/./b/../c", Options::default()).unwrap();
/// assert_eq!(url, "http://example.com/a/c");
///
/// let url = normalize("https://example.com/x//y/", Options::default()).unwrap();
/// assert_eq!(url, "https://example.com/x/y");
/// ```
pub fn normalize(url: &str, options: Options) -> Result<String, UrlHelperError> {
    let candidate = apply_scheme(url, options, Scheme::Http);
    let mut parsed = Url::parse(&candidate).map_err(UrlHelperError::InvalidUrl)?;

    // The parser has already resolved literal dot segments; this pass also
    // collapses duplicate slashes and drops any dots the parser kept.
    let path = parsed.path().to_string();
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        match segment {
            ".." => {
                stack.pop();
            }
            "." => {}
            _ => stack.push(segment),
        }
    }

    parsed.set_path(&format!("/{}", stack.join("/")));
    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_dot_segments() {
        let cases = vec![
            ("http://example.com/x/y/../z", "http://example.com/x/z"),
            ("http://example.com/a/./b", "http://example.com/a/b"),
            ("http://example.com/../../x", "http://example.com/x"),
            ("http://example.com/a//b", "http://example.com/a/b"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize(input, Options::default()).unwrap(),
                expected,
                "normalizing {}",
                input
            );
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("example.com/a/./b/../c//d/", Options::default()).unwrap();
        let twice = normalize(&once, Options::default()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_defaults_to_http() {
        assert_eq!(
            normalize("example.com/a/../b", Options::default()).unwrap(),
            "http://example.com/b"
        );
        assert_eq!(
            normalize("example.com/a/../b", Options::https()).unwrap(),
            "https://example.com/b"
        );
    }

    #[test]
    fn test_normalize_keeps_query_and_fragment() {
        assert_eq!(
            normalize("http://example.com/a/../b?q=1#frag", Options::default()).unwrap(),
            "http://example.com/b?q=1#frag"
        );
    }

    #[test]
    fn test_normalize_root_path() {
        assert_eq!(
            normalize("http://example.com", Options::default()).unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_normalize_invalid_url() {
        let err = normalize("http://", Options::default()).unwrap_err();
        assert!(matches!(err, UrlHelperError::InvalidUrl(_)));
    }
}
