//! Joining base URLs with path segments.

use url::Url;
use crate::error::UrlHelperError;
use crate::scheme::{apply_scheme, has_explicit_scheme, Scheme};
use crate::types::{JoinSpec, Options};
use std::borrow::Cow;

/// Join a base URL with path segments.
///
/// The base path and every entry of `paths` are trimmed of leading/trailing
/// slashes, empty entries are dropped, and the rest are joined with `/` and
/// assigned back as the URL's path; the base's query and fragment pass
/// through untouched. A schemeless base is defaulted to `https://` (or
/// whatever [`Options`] forces).
///
/// Without a base there is no origin to anchor on in this headless form, so
/// the result is a root-relative path built from `paths` alone. Callers that
/// do have an ambient origin should use [`join_with_origin`]. A base that
/// does not parse after scheme defaulting fails with
/// [`UrlHelperError::InvalidBaseUrl`].
///
/// # Examples
///
/// ```
/// use url_helper::{join, JoinSpec, Options};
///
/// let spec = JoinSpec::with_base("http://example.com/base/", ["/seg1/", "seg2"]);
/// assert_eq!(join(&spec, Options::default()).unwrap(), "http://example.com/base/seg1/seg2");
///
/// let rootless = JoinSpec::new(["api", "v1"]);
/// assert_eq!(join(&rootless, Options::default()).unwrap(), "/api/v1");
/// ```
pub fn join(spec: &JoinSpec, options: Options) -> Result<String, UrlHelperError> {
    join_with_origin(spec, options, || None)
}

/// [`join`] with an injected origin provider.
///
/// `origin` is consulted only when `spec.base` is absent (or empty): a
/// returned origin becomes the base, and `None` falls back to the
/// root-relative form. The provider stands in for the ambient page origin a
/// browser would supply, keeping this crate free of environment reads.
///
/// # Examples
///
/// ```
/// use url_helper::{join_with_origin, JoinSpec, Options};
///
/// let spec = JoinSpec::new(["profile", "settings"]);
/// let url = join_with_origin(&spec, Options::default(), || {
///     Some("https://app.example.com".to_string())
/// })
/// .unwrap();
/// assert_eq!(url, "https://app.example.com/profile/settings");
/// ```
pub fn join_with_origin<F>(
    spec: &JoinSpec,
    options: Options,
    origin: F,
) -> Result<String, UrlHelperError>
where
    F: FnOnce() -> Option<String>,
{
    let base = match spec.base.as_deref().filter(|base| !base.is_empty()) {
        Some(base) => Cow::Borrowed(base),
        None => match origin() {
            Some(origin) => Cow::Owned(origin),
            None => return Ok(root_relative(&spec.paths)),
        },
    };

    let candidate = apply_scheme(&base, options, Scheme::Https);
    let mut url = Url::parse(&candidate).map_err(UrlHelperError::InvalidBaseUrl)?;
    set_joined_path(&mut url, &spec.paths);
    Ok(url.to_string())
}

/// Join path segments onto a base that must already be absolute.
///
/// The strict form takes no options and performs no scheme defaulting: the
/// base has to start with a literal `http://` or `https://`, otherwise it
/// fails with [`UrlHelperError::MissingBaseScheme`] (a base that has the
/// prefix but still does not parse fails with
/// [`UrlHelperError::InvalidBaseUrl`]). Segment handling is the same
/// trim/filter/join as [`join`].
///
/// # Examples
///
/// ```
/// use url_helper::join_strict;
///
/// let url = join_strict("https://cdn.example.com/assets", &["img", "logo.svg"]).unwrap();
/// assert_eq!(url, "https://cdn.example.com/assets/img/logo.svg");
///
/// let err = join_strict("cdn.example.com", &["img"]).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid base URL: Missing schema (http/https)");
/// ```
pub fn join_strict<S>(base: &str, paths: &[S]) -> Result<String, UrlHelperError>
where
    S: AsRef<str>,
{
    if !has_explicit_scheme(base) {
        return Err(UrlHelperError::MissingBaseScheme);
    }

    let mut url = Url::parse(base).map_err(UrlHelperError::InvalidBaseUrl)?;
    set_joined_path(&mut url, paths);
    Ok(url.to_string())
}

/// Replace `url`'s path with its current path plus `paths`, each trimmed of
/// surrounding slashes, empties dropped.
fn set_joined_path<S: AsRef<str>>(url: &mut Url, paths: &[S]) {
    let base_path = url.path().to_string();
    let mut segments: Vec<&str> = Vec::new();
    for part in std::iter::once(base_path.as_str()).chain(paths.iter().map(AsRef::as_ref)) {
        let trimmed = part.trim_matches('/');
        if !trimmed.is_empty() {
            segments.push(trimmed);
        }
    }
    url.set_path(&format!("/{}", segments.join("/")));
}

/// Root-relative fallback for the originless form. Segments are trimmed but
/// not filtered here, so empty entries keep their slot.
fn root_relative<S: AsRef<str>>(paths: &[S]) -> String {
    let trimmed: Vec<&str> = paths
        .iter()
        .map(|path| path.as_ref().trim_matches('/'))
        .collect();
    format!("/{}", trimmed.join("/"))
}
