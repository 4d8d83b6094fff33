//! Route and URL helpers.
//!
//! - Routes are site-relative, decoded (human-readable) and start with `/`
//! - Absolute URLs are produced through the `url` crate, which handles
//!   percent-encoding of non-ASCII segments (`/zh/指南` and friends)

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::Url;

/// Normalize a requested route.
///
/// Strips query string and fragment, decodes percent-encoding and ensures a
/// leading `/`. Trailing slashes are kept as given: `/guide/usage` and
/// `/guide/` are different pages.
pub fn normalize_route(raw: &str) -> String {
    let trimmed = raw.trim();
    let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| path.to_string());

    if decoded.starts_with('/') {
        decoded
    } else {
        format!("/{decoded}")
    }
}

/// Strip the deploy base from a route.
///
/// ```ignore
/// strip_base("/windows-folder-remark/zh/", "/windows-folder-remark/") -> "/zh/"
/// strip_base("/windows-folder-remark", "/windows-folder-remark/")     -> "/"
/// strip_base("/zh/", "/")                                             -> "/zh/"
/// ```
pub fn strip_base<'a>(route: &'a str, base: &str) -> Cow<'a, str> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Cow::Borrowed(route);
    }
    match route.strip_prefix(base) {
        Some("") => Cow::Borrowed("/"),
        Some(rest) if rest.starts_with('/') => Cow::Borrowed(rest),
        _ => Cow::Borrowed(route),
    }
}

/// Check that a path-like setting starts and ends with `/`.
pub fn is_dir_path(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}

/// Join a route onto a site URL.
///
/// The mount point is the URL's own path when it has one, otherwise the
/// site `base`: `https://example.github.io` + base `/docs/` + `/zh/` gives
/// `https://example.github.io/docs/zh/`.
pub fn join_url(site_url: &Url, base: &str, route: &str) -> String {
    let mount = mount_path(site_url, base);
    let mut url = site_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.set_path(&format!(
        "{}/{}",
        mount.trim_end_matches('/'),
        route.trim_start_matches('/')
    ));
    url.to_string()
}

/// Path a site is served under: the URL's own path, else `base`.
pub fn mount_path<'a>(site_url: &'a Url, base: &'a str) -> &'a str {
    match site_url.path() {
        "" | "/" => base,
        own => own,
    }
}

/// Decoded path component of an absolute URL, or `None` if it doesn't parse.
pub fn url_path(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    Some(
        percent_decode_str(parsed.path())
            .decode_utf8()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| parsed.path().to_string()),
    )
}

/// Replace scheme, host and port of `raw` with those of `host`.
///
/// Used for sitemap hostname rewriting; the path is left untouched.
pub fn rewrite_origin(raw: &str, host: &Url) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;
    url.set_scheme(host.scheme()).ok()?;
    url.set_host(host.host_str()).ok()?;
    url.set_port(host.port()).ok()?;
    Some(url.to_string())
}

/// Validate an http(s) URL with a host; returns the reason on failure.
pub fn check_site_url(raw: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(parsed)
}
