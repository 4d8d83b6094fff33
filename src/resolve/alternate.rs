//! Cross-locale alternate links.
//!
//! Rendered as:
//!
//! ```html
//! <link rel="alternate" hreflang="en-US" href="https://example.com/guide/">
//! <link rel="alternate" hreflang="zh-CN" href="https://example.com/zh/guide/">
//! <link rel="alternate" hreflang="x-default" href="https://example.com/guide/">
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::LocaleId;
use crate::utils::html::escape_attr;

/// `hreflang` value of the fallback entry.
pub const X_DEFAULT: &str = "x-default";

/// One locale's version of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub locale: LocaleId,
    pub hreflang: String,
    pub href: String,
}

/// All locale versions of one page, in locale display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    /// Locale owning the requested path.
    pub current: LocaleId,
    pub links: Vec<AlternateLink>,
    /// URL advertised as `x-default`.
    pub x_default: String,
}

impl Alternates {
    /// URL for a locale.
    pub fn href(&self, locale: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.locale.as_str() == locale)
            .map(|link| link.href.as_str())
    }

    /// The current page's own URL.
    pub fn canonical(&self) -> Option<&str> {
        self.href(self.current.as_str())
    }

    /// Flat `locale id → URL` map with an extra `x-default` key.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.links
            .iter()
            .map(|link| (link.locale.to_string(), link.href.clone()))
            .chain(std::iter::once((X_DEFAULT.to_string(), self.x_default.clone())))
            .collect()
    }

    /// `<link rel="alternate">` tags, one per line, `x-default` last.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(96 * (self.links.len() + 1));
        let tags = self
            .links
            .iter()
            .map(|link| (link.hreflang.as_str(), link.href.as_str()))
            .chain(std::iter::once((X_DEFAULT, self.x_default.as_str())));
        for (hreflang, href) in tags {
            out.push_str("<link rel=\"alternate\" hreflang=\"");
            out.push_str(&escape_attr(hreflang));
            out.push_str("\" href=\"");
            out.push_str(&escape_attr(href));
            out.push_str("\">\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Alternates {
        Alternates {
            current: "zh".into(),
            links: vec![
                AlternateLink {
                    locale: "root".into(),
                    hreflang: "en-US".into(),
                    href: "https://example.com/guide/?a=1&b=2".into(),
                },
                AlternateLink {
                    locale: "zh".into(),
                    hreflang: "zh-CN".into(),
                    href: "https://example.com/zh/guide/".into(),
                },
            ],
            x_default: "https://example.com/guide/".into(),
        }
    }

    #[test]
    fn test_lookup() {
        let alt = sample();
        assert_eq!(alt.canonical(), Some("https://example.com/zh/guide/"));
        assert_eq!(alt.href("fr"), None);
    }

    #[test]
    fn test_to_map_has_x_default() {
        let map = sample().to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["x-default"], "https://example.com/guide/");
        assert_eq!(map["zh"], "https://example.com/zh/guide/");
    }

    #[test]
    fn test_to_html_escapes_and_orders() {
        let html = sample().to_html();
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("hreflang=\"en-US\""));
        assert!(lines[0].contains("?a=1&amp;b=2"));
        assert!(lines[2].contains("hreflang=\"x-default\""));
    }
}
