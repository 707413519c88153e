//! URL construction from components.

use url::Url;
use crate::error::UrlHelperError;
use crate::scheme::{select_scheme, Scheme};
use crate::types::{BuildSpec, Options};

/// Build a URL string from its components.
///
/// The protocol comes purely from [`Options`] (https unless forced
/// otherwise); unlike the other operations, `build` never looks for an
/// existing scheme in its input. The concatenated
/// `scheme://host + pathname + search + hash` string is parsed and
/// re-serialized by the `url` crate, which normalizes and percent-encodes
/// the result.
///
/// Fails with [`UrlHelperError::MissingHost`] when `spec.host` is empty, and
/// with [`UrlHelperError::InvalidUrl`] when the concatenation does not parse
/// (invalid host characters, for example).
///
/// # Examples
///
/// ```
/// use url_helper::{build, BuildSpec, Options};
///
/// let url = build(&BuildSpec::new("example.com"), Options::default()).unwrap();
/// assert_eq!(url, "https://example.com/");
///
/// let spec = BuildSpec {
///     pathname: "/docs/install".to_string(),
///     search: "?lang=en".to_string(),
///     hash: "#linux".to_string(),
///     ..BuildSpec::new("example.com")
/// };
/// assert_eq!(
///     build(&spec, Options::http()).unwrap(),
///     "http://example.com/docs/install?lang=en#linux"
/// );
/// ```
pub fn build(spec: &BuildSpec, options: Options) -> Result<String, UrlHelperError> {
    if spec.host.is_empty() {
        return Err(UrlHelperError::MissingHost);
    }

    let scheme = select_scheme(options, Scheme::Https);
    let candidate = format!(
        "{}://{}{}{}{}",
        scheme.as_str(),
        spec.host,
        spec.pathname,
        spec.search,
        spec.hash
    );

    let url = Url::parse(&candidate).map_err(UrlHelperError::InvalidUrl)?;
    Ok(url.to_string())
}
