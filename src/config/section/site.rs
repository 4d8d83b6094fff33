//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Windows Folder Remark Tool"
//! description = "Add remarks to Windows folders"
//! hostname = "https://example.github.io"
//! base = "/windows-folder-remark/"
//! fallback_lang = "en-US"
//!
//! [site.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::core::url::{check_site_url, is_dir_path};

/// Site-wide metadata and URL settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Default title, locales may override it.
    pub title: String,

    /// Default description, locales may override it.
    pub description: String,

    /// Canonical site URL used for alternate links (e.g. "https://example.github.io").
    /// A path component doubles as the deploy base when `base` is unset.
    pub hostname: Option<String>,

    /// Deploy base path, stripped from requested paths (e.g. "/my-project/").
    #[config(inline_doc = "defaults to the hostname path, or \"/\"")]
    pub base: Option<String>,

    /// `lang` of the locale advertised as `x-default`.
    #[config(default = "en-US")]
    pub fallback_lang: String,

    /// Sitemap generation settings.
    #[config(sub)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            hostname: None,
            base: None,
            fallback_lang: "en-US".into(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate URL and base settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(hostname) = &self.hostname
            && let Err(reason) = check_site_url(hostname)
        {
            diag.error_with_hint(
                Self::FIELDS.hostname,
                reason,
                "use format like https://example.com",
            );
        }

        if let Some(base) = &self.base
            && !is_dir_path(base)
        {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base `{base}` must start and end with `/`"),
                format!("use \"/{}/\"", base.trim_matches('/')),
            );
        }

        if self.fallback_lang.trim().is_empty() {
            diag.error(Self::FIELDS.fallback_lang, "must not be empty");
        }

        self.sitemap.validate(diag);
    }
}

/// Sitemap generation from the declared site map.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.sitemap")]
pub struct SitemapConfig {
    #[config(inline_doc = "Enable sitemap generation")]
    pub enable: bool,

    #[config(default = "sitemap.xml", inline_doc = "Output path, relative to the config file")]
    pub path: PathBuf,

    #[config(inline_doc = "Replace scheme and host of every sitemap URL")]
    pub hostname: Option<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "sitemap.xml".into(),
            hostname: None,
        }
    }
}

impl SitemapConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(hostname) = &self.hostname
            && let Err(reason) = check_site_url(hostname)
        {
            diag.error(Self::FIELDS.hostname, reason);
        }
        if self.path.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.path,
                "must be relative to the config file",
                "e.g. \"sitemap.xml\" or \"dist/sitemap.xml\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let site = SiteSectionConfig::default();
        assert_eq!(site.fallback_lang, "en-US");
        assert!(site.base.is_none());
        assert!(!site.sitemap.enable);
        assert_eq!(site.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SiteSectionConfig::FIELDS.hostname.as_str(), "site.hostname");
        assert_eq!(SitemapConfig::FIELDS.path.as_str(), "site.sitemap.path");
    }

    #[test]
    fn test_validate_bad_values() {
        let site = SiteSectionConfig {
            hostname: Some("example.com".into()),
            base: Some("docs".into()),
            ..SiteSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.hostname", "site.base"]);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use \"/docs/\""));
    }

    #[test]
    fn test_template_mentions_sitemap() {
        let template = SiteSectionConfig::template_with_header();
        assert!(template.contains("[site]"));
        assert!(template.contains("fallback_lang = \"en-US\""));
        assert!(template.contains("[site.sitemap]"));
        assert!(template.contains("path = \"sitemap.xml\""));
    }
}
