//! Site map configuration for `lingonav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── check      # [check]
//! │   ├── locale     # [locales.<id>]
//! │   ├── nav        # [[nav.<id>]], [[sidebar."<prefix>"]]
//! │   └── site       # [site], [site.sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is immutable and passed by reference to
//! [`LocaleNavResolver`](crate::resolve::LocaleNavResolver).

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    CheckConfig, CheckLevel, LocaleConfig, NavItem, SidebarGroup, SidebarLink, SiteSectionConfig,
    SitemapConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::LocaleId;
use crate::core::url::{check_site_url, is_dir_path, normalize_route};
use crate::log;
use crate::resolve::LocaleNavResolver;
use util::extract_url_path;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `lingonav.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata, URLs and sitemap settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Severity settings for `lingonav check`
    #[serde(default)]
    pub check: CheckConfig,

    /// Declared locales, keyed by id
    #[serde(default)]
    pub locales: BTreeMap<LocaleId, LocaleConfig>,

    /// Per-locale canonical base URLs
    #[serde(default)]
    pub alternates: BTreeMap<LocaleId, String>,

    /// Navigation bar entries per locale
    #[serde(default)]
    pub nav: BTreeMap<LocaleId, Vec<NavItem>>,

    /// Sidebar groups per path prefix
    #[serde(default)]
    pub sidebar: BTreeMap<String, Vec<SidebarGroup>>,
}

impl SiteConfig {
    /// Load configuration from a file, warning about unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.finalize();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.finalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Derive `base` from the hostname path when it is not set.
    ///
    /// `hostname = "https://example.github.io/my-project"` gives
    /// `base = "/my-project/"`.
    fn finalize(&mut self) {
        if self.site.base.is_none()
            && let Some(hostname) = &self.site.hostname
            && let Some(path) = extract_url_path(hostname)
            && !path.is_empty()
        {
            self.site.base = Some(format!("/{path}/"));
        }
    }

    /// Deploy base path, `/` when unset.
    pub fn base(&self) -> &str {
        self.site.base.as_deref().unwrap_or("/")
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Every distinct internal link of the nav tables and sidebar trees,
    /// normalized, in first-seen order.
    ///
    /// This is the page set `lingonav check` and the sitemap work on.
    pub fn declared_links(&self) -> Vec<String> {
        let nav = self.nav.values().flatten().map(|item| item.link.as_str());
        let sidebar = self
            .sidebar
            .values()
            .flatten()
            .flat_map(|group| &group.items)
            .map(|item| item.link.as_str());

        let mut seen = FxHashSet::default();
        nav.chain(sidebar)
            .filter(|link| !link.contains("://") && link.starts_with('/'))
            .map(normalize_route)
            .filter(|route| seen.insert(route.clone()))
            .collect()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole site map.
    ///
    /// Collects all problems and returns them at once. Warnings are printed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Collect structural and link scope problems without printing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.validate_locales(&mut diag);
        self.validate_alternates(&mut diag);
        self.validate_tables(&mut diag);

        // Link scope needs a coherent locale table.
        if !diag.has_errors() {
            for err in LocaleNavResolver::new(self).validate() {
                let field = err.field().unwrap_or_else(|| FieldPath::new("nav"));
                diag.error(field, err.to_string());
            }
        }

        if self.site.sitemap.hostname.is_some() && !self.site.sitemap.enable {
            diag.warn(
                SitemapConfig::FIELDS.hostname,
                "has no effect while the sitemap is disabled",
            );
        }

        diag
    }

    fn validate_locales(&self, diag: &mut ConfigDiagnostics) {
        let locales = FieldPath::new("locales");
        if self.locales.is_empty() {
            diag.error_with_hint(
                locales,
                "no locales declared",
                "add a [locales.root] table with `label` and `lang`",
            );
            return;
        }

        let roots: Vec<_> = self.locales.iter().filter(|(_, l)| l.is_root()).collect();
        for (id, _) in roots.iter().skip(1) {
            diag.error_with_hint(
                locales.key(id.as_str()),
                format!("only one locale may omit `link`, `{}` already does", roots[0].0),
                format!("add link = \"/{id}/\""),
            );
        }

        let mut prefixes: Vec<(&LocaleId, String)> = Vec::new();
        for (id, locale) in &self.locales {
            let field = locales.key(id.as_str());

            if locale.label.trim().is_empty() {
                diag.error(field.key("label"), "must not be empty");
            }
            if locale.lang.trim().is_empty() {
                diag.error_with_hint(field.key("lang"), "must not be empty", "e.g. \"zh-CN\"");
            }

            let Some(link) = &locale.link else { continue };
            if link == "/" {
                diag.error_with_hint(
                    field.key("link"),
                    "`/` belongs to the root locale",
                    "omit `link` for the root locale",
                );
                continue;
            }
            if !is_dir_path(link) {
                diag.error_with_hint(
                    field.key("link"),
                    format!("link `{link}` must start and end with `/`"),
                    format!("use \"/{}/\"", link.trim_matches('/')),
                );
                continue;
            }

            for (other, prefix) in &prefixes {
                if prefix == link {
                    diag.error(
                        field.key("link"),
                        format!("link `{link}` is already used by locale `{other}`"),
                    );
                } else if link.starts_with(prefix.as_str()) || prefix.starts_with(link.as_str()) {
                    diag.error(
                        field.key("link"),
                        format!("link `{link}` overlaps `{prefix}` of locale `{other}`"),
                    );
                }
            }
            prefixes.push((id, link.clone()));
        }
    }

    fn validate_alternates(&self, diag: &mut ConfigDiagnostics) {
        let alternates = FieldPath::new("alternates");
        for (id, raw) in &self.alternates {
            let field = alternates.key(id.as_str());
            if !self.locales.contains_key(id) {
                diag.error(field, format!("`{id}` is not a declared locale"));
            } else if let Err(reason) = check_site_url(raw) {
                diag.error_with_hint(field, reason, "use format like https://example.com");
            }
        }

        if self.site.hostname.is_some() {
            return;
        }
        for id in self.locales.keys() {
            if !self.alternates.contains_key(id) {
                diag.error_with_hint(
                    FieldPath::new("locales").key(id.as_str()),
                    "no base URL for alternate links",
                    format!("set [site] hostname or [alternates] {id}"),
                );
            }
        }
    }

    fn validate_tables(&self, diag: &mut ConfigDiagnostics) {
        let nav = FieldPath::new("nav");
        for id in self.nav.keys() {
            if !self.locales.contains_key(id) {
                diag.error(nav.key(id.as_str()), format!("`{id}` is not a declared locale"));
            }
        }

        let sidebar = FieldPath::new("sidebar");
        for prefix in self.sidebar.keys() {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    sidebar.key(prefix),
                    format!("sidebar key `{prefix}` must start with `/`"),
                    format!("use \"{}\"", normalize_route(prefix)),
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// The bilingual site map the resolver tests run against.
///
/// English at `/`, Chinese at `/zh/`, sidebars under `/` and `/zh/`.
#[cfg(test)]
pub const TEST_SITE: &str = r#"
[site]
title = "Windows Folder Remark Tool"
description = "Add remarks to Windows folders"
hostname = "https://example.github.io"
base = "/windows-folder-remark/"

[locales.root]
label = "English"
lang = "en-US"

[locales.zh]
label = "简体中文"
lang = "zh-CN"
link = "/zh/"
title = "Windows 文件夹备注工具"

[[nav.root]]
text = "Guide"
link = "/guide/"

[[nav.root]]
text = "中文"
link = "/zh/"

[[nav.zh]]
text = "指南"
link = "/zh/guide/"

[[nav.zh]]
text = "English"
link = "/"

[[sidebar."/"]]
text = "Guide"
items = [
    { text = "Introduction", link = "/" },
    { text = "Getting Started", link = "/guide/getting-started" },
]

[[sidebar."/zh/"]]
text = "指南"
collapsed = false
items = [
    { text = "介绍", link = "/zh/" },
    { text = "快速开始", link = "/zh/guide/getting-started" },
]
"#;

/// Parse a config, appending `extra` to [`TEST_SITE`].
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("{TEST_SITE}\n{extra}");
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn error_fields(config: &SiteConfig) -> Vec<String> {
        config
            .diagnose()
            .errors()
            .iter()
            .map(|e| e.field.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_test_site_is_valid() {
        let config = test_parse_config("");
        assert!(config.diagnose().is_empty(), "{}", config.diagnose());
        assert_eq!(config.locales.len(), 2);
        assert_eq!(config.nav["root"].len(), 2);
        assert_eq!(config.sidebar["/zh/"][0].collapsed, Some(false));
    }

    #[test]
    fn test_base_defaults_to_root() {
        let config = SiteConfig::default();
        assert_eq!(config.base(), "/");
        assert_eq!(config.root, PathBuf::new());
    }

    #[test]
    fn test_base_derived_from_hostname() {
        let config = SiteConfig::from_str(
            "[site]\nhostname = \"https://example.github.io/windows-folder-remark\"",
        )
        .unwrap();
        assert_eq!(config.base(), "/windows-folder-remark/");

        let config = SiteConfig::from_str(
            "[site]\nhostname = \"https://example.github.io/a/\"\nbase = \"/b/\"",
        )
        .unwrap();
        assert_eq!(config.base(), "/b/");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Docs\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Docs");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_load_sets_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingonav.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(TEST_SITE.as_bytes()).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(
            config.root_join("sitemap.xml"),
            dir.path().join("sitemap.xml")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_declared_links_first_seen_order() {
        let mut config = test_parse_config("");
        config.nav.get_mut("root").unwrap().push(NavItem {
            text: "GitHub".into(),
            link: "https://github.com/example/repo".into(),
        });
        assert_eq!(
            config.declared_links(),
            [
                "/guide/",
                "/zh/",
                "/zh/guide/",
                "/",
                "/guide/getting-started",
                "/zh/guide/getting-started",
            ]
        );
    }

    #[test]
    fn test_no_locales() {
        let config = SiteConfig::from_str("[site]\nhostname = \"https://example.com\"").unwrap();
        assert_eq!(error_fields(&config), ["locales"]);
    }

    #[test]
    fn test_second_root_locale() {
        let config = test_parse_config("[locales.ja]\nlabel = \"日本語\"\nlang = \"ja-JP\"");
        assert_eq!(error_fields(&config), ["locales.root"]);
    }

    #[test]
    fn test_bad_links() {
        let config = test_parse_config(
            r#"
[locales.ja]
label = "日本語"
lang = "ja-JP"
link = "ja"

[locales.tw]
label = "繁體中文"
lang = "zh-TW"
link = "/zh/tw/"

[locales.zz]
label = "Other"
lang = ""
link = "/zh/"
"#,
        );
        let fields = error_fields(&config);
        assert!(fields.contains(&"locales.ja.link".to_string()));
        // `/zh/` is declared after `/zh/tw/` in key order
        assert!(fields.contains(&"locales.zh.link".to_string()));
        assert!(fields.contains(&"locales.zz.link".to_string()));
        assert!(fields.contains(&"locales.zz.lang".to_string()));
    }

    #[test]
    fn test_alternates_checked() {
        let config = test_parse_config(
            "[alternates]\nzh = \"example.cn\"\nfr = \"https://example.fr\"",
        );
        let fields = error_fields(&config);
        assert!(fields.contains(&"alternates.zh".to_string()));
        assert!(fields.contains(&"alternates.fr".to_string()));
    }

    #[test]
    fn test_missing_base_url() {
        let config = SiteConfig::from_str(
            "[locales.root]\nlabel = \"English\"\nlang = \"en-US\"\n\n[alternates]\n",
        )
        .unwrap();
        assert_eq!(error_fields(&config), ["locales.root"]);
    }

    #[test]
    fn test_undeclared_tables() {
        let config = test_parse_config(
            "[[nav.fr]]\ntext = \"Guide\"\nlink = \"/guide/\"\n\n[[sidebar.\"guide\"]]\ntext = \"x\"",
        );
        let fields = error_fields(&config);
        assert!(fields.contains(&"nav.fr".to_string()));
        assert!(fields.contains(&"sidebar.guide".to_string()));
    }

    #[test]
    fn test_scope_errors_use_field_paths() {
        let mut config = test_parse_config("");
        config.nav.get_mut("root").unwrap()[0].link = "/en/guide/".into();
        let diag = config.diagnose();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "nav.root[0].link");
        assert!(diag.errors()[0].message.contains("/en/guide/"));
    }

    #[test]
    fn test_sitemap_hostname_warning() {
        let mut config = test_parse_config("");
        config.site.sitemap.hostname = Some("http://localhost:4173".into());
        let diag = config.diagnose();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
