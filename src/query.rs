//! Query string parameter updates.

use url::Url;
use crate::error::UrlHelperError;
use crate::scheme::{apply_scheme, Scheme};
use crate::types::Options;

/// Set query parameters on a URL, upserting each key in order.
///
/// For every `(key, value)` pair the first existing occurrence of `key` is
/// overwritten in place, later duplicates of it are removed, and keys not
/// yet present are appended at the end. Untouched parameters keep their
/// relative order. A schemeless input is defaulted to `http://` first (or
/// whatever [`Options`] forces).
///
/// When `params` is non-empty the whole query is re-serialized as
/// `application/x-www-form-urlencoded`, so pre-encoded values may come back
/// in an equivalent encoding (a `%20` turns into `+`). An empty `params`
/// leaves the query byte-for-byte alone. An input that does not parse after
/// scheme defaulting fails with [`UrlHelperError::InvalidUrl`].
///
/// # Examples
///
/// ```
/// use url_helper::{set_query_params, Options};
///
/// let url = set_query_params(
///     "example.com/search?q=old",
///     &[("q", "rust"), ("page", "2")],
///     Options::default(),
/// )
/// .unwrap();
/// assert_eq!(url, "http://example.com/search?q=rust&page=2");
/// ```
pub fn set_query_params<K, V>(
    url: &str,
    params: &[(K, V)],
    options: Options,
) -> Result<String, UrlHelperError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let candidate = apply_scheme(url, options, Scheme::Http);
    let mut parsed = Url::parse(&candidate).map_err(UrlHelperError::InvalidUrl)?;

    if params.is_empty() {
        return Ok(parsed.to_string());
    }

    let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        let mut seen = false;
        pairs.retain_mut(|(existing_key, existing_value)| {
            if existing_key.as_str() != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *existing_value = value.to_string();
            true
        });
        if !seen {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    parsed.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(parsed.to_string())
}
