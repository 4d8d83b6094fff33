//! Sitemap generation.
//!
//! Lists every declared page with its alternates for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/guide/</loc>
//!     <xhtml:link rel="alternate" hreflang="en-US" href="https://example.com/guide/"/>
//!     <xhtml:link rel="alternate" hreflang="zh-CN" href="https://example.com/zh/guide/"/>
//!     <xhtml:link rel="alternate" hreflang="x-default" href="https://example.com/guide/"/>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use url::Url;

use crate::core::url::rewrite_origin;
use crate::log;
use crate::resolve::{LocaleNavResolver, X_DEFAULT};
use crate::utils::{html::escape_xml, plural_count};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Sitemap of the declared site map.
#[derive(Debug, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug)]
struct UrlEntry {
    loc: String,
    /// `(hreflang, href)`, `x-default` last. Empty on single-locale sites.
    alternates: Vec<(String, String)>,
}

impl Sitemap {
    /// Resolve alternates for every declared page.
    ///
    /// `[site.sitemap] hostname` replaces scheme and host of every URL.
    pub fn build(resolver: &LocaleNavResolver<'_>) -> Result<Self> {
        let config = resolver.config();
        let host = config
            .site
            .sitemap
            .hostname
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("invalid [site.sitemap] hostname")?;
        let rewrite = |href: &str| match &host {
            Some(host) => rewrite_origin(href, host).unwrap_or_else(|| href.to_string()),
            None => href.to_string(),
        };

        let mut urls = Vec::new();
        for route in config.declared_links() {
            let alt = resolver
                .resolve_alternates(&route)
                .with_context(|| format!("failed to resolve alternates of `{route}`"))?;
            let loc = rewrite(alt.canonical().unwrap_or(&alt.x_default));

            let alternates = if alt.links.len() > 1 {
                alt.links
                    .iter()
                    .map(|link| (link.hreflang.clone(), rewrite(&link.href)))
                    .chain(std::iter::once((X_DEFAULT.to_string(), rewrite(&alt.x_default))))
                    .collect()
            } else {
                Vec::new()
            };
            urls.push(UrlEntry { loc, alternates });
        }

        crate::debug!("sitemap"; "{}", plural_count(urls.len(), "url"));
        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 * (self.urls.len() + 1));

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            for (hreflang, href) in &entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(&escape_xml(hreflang));
                xml.push_str("\" href=\"");
                xml.push_str(&escape_xml(href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the sitemap, creating parent directories.
    pub fn write(self, path: &Path) -> Result<()> {
        let count = self.len();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{} ({})", path.display(), plural_count(count, "url"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::default().into_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"xmlns:xhtml="{XHTML_NS}""#)));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_lists_declared_pages_with_alternates() {
        let config = test_parse_config("");
        let resolver = LocaleNavResolver::new(&config);
        let sitemap = Sitemap::build(&resolver).unwrap();
        assert_eq!(sitemap.len(), config.declared_links().len());

        let xml = sitemap.into_xml();
        assert_eq!(xml.matches("<url>").count(), 6);
        assert!(xml.contains(
            "<loc>https://example.github.io/windows-folder-remark/zh/guide/getting-started</loc>"
        ));
        // 2 locales + x-default per page
        assert_eq!(xml.matches("<xhtml:link").count(), 18);
        assert!(xml.contains(
            r#"hreflang="x-default" href="https://example.github.io/windows-folder-remark/guide/"/>"#
        ));
    }

    #[test]
    fn test_sitemap_hostname_rewrite() {
        let mut config = test_parse_config("");
        config.site.sitemap.hostname = Some("http://localhost:4173".into());
        let resolver = LocaleNavResolver::new(&config);
        let xml = Sitemap::build(&resolver).unwrap().into_xml();
        assert!(xml.contains("<loc>http://localhost:4173/windows-folder-remark/guide/</loc>"));
        assert!(!xml.contains("example.github.io"));
    }

    #[test]
    fn test_single_locale_has_no_alternates() {
        let mut config = test_parse_config("");
        config.locales.remove("zh");
        config.nav.remove("zh");
        config.sidebar.remove("/zh/");
        config.nav.get_mut("root").unwrap().pop();
        let resolver = LocaleNavResolver::new(&config);
        let xml = Sitemap::build(&resolver).unwrap().into_xml();
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(!xml.contains("<xhtml:link"));
    }

    #[test]
    fn test_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist/sitemap.xml");
        let config = test_parse_config("");
        let resolver = LocaleNavResolver::new(&config);
        Sitemap::build(&resolver).unwrap().write(&path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("<urlset"));
    }
}
