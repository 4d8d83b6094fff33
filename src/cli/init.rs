//! Starter config generation.
//!
//! The `[site]` and `[check]` parts are generated by `#[derive(Config)]`;
//! keyed tables (locales, nav, sidebar) have no fixed field set and come
//! from [`LOCALES_TEMPLATE`].

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::config::{CheckConfig, SiteSectionConfig};
use crate::log;

/// English at `/`, Chinese at `/zh/`, one guide sidebar each.
const LOCALES_TEMPLATE: &str = r#"
# Declared locales. The root locale omits `link` and is served at `/`.
[locales.root]
label = "English"
lang = "en-US"

[locales.zh]
label = "简体中文"
lang = "zh-CN"
link = "/zh/"
# title = ""
# description = ""

# Per-locale base URLs, defaulting to [site] hostname.
# [alternates]
# zh = "https://example.cn"

# Navigation bar per locale. Exactly one entry links to another
# locale's home page: the language switch.
[[nav.root]]
text = "Guide"
link = "/guide/"

[[nav.root]]
text = "简体中文"
link = "/zh/"

[[nav.zh]]
text = "指南"
link = "/zh/guide/"

[[nav.zh]]
text = "English"
link = "/"

# Sidebar groups per path prefix. The longest matching prefix wins.
[[sidebar."/guide/"]]
text = "Guide"
items = [
    { text = "Introduction", link = "/guide/" },
    { text = "Getting Started", link = "/guide/getting-started" },
]

[[sidebar."/zh/guide/"]]
text = "指南"
items = [
    { text = "介绍", link = "/zh/guide/" },
    { text = "快速开始", link = "/zh/guide/getting-started" },
]
"#;

/// Generate the commented starter `lingonav.toml`.
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# lingonav configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');
    out.push_str(&CheckConfig::template_with_header());
    out.push_str(LOCALES_TEMPLATE);
    out
}

/// Write the starter config into `dir`, refusing to overwrite.
///
/// With `dry_run` the template is printed to stdout instead.
pub fn new_site(dir: Option<&Path>, config_name: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let path = root.join(config_name);
    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }

    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}, set [site] hostname before running `lingonav check`", path.display());
    Ok(())
}
