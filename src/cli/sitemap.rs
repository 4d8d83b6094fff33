//! Sitemap command.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::generator::Sitemap;
use crate::log;
use crate::resolve::LocaleNavResolver;

/// Write the sitemap to `output`, or to `[site.sitemap] path` when enabled.
pub fn build_sitemap(config: &SiteConfig, output: Option<&Path>) -> Result<()> {
    let Some(path) = target_path(config, output) else {
        log!("sitemap"; "disabled, set [site.sitemap] enable = true or pass --output");
        return Ok(());
    };

    let resolver = LocaleNavResolver::new(config);
    Sitemap::build(&resolver)?.write(&path)
}

fn target_path(config: &SiteConfig, output: Option<&Path>) -> Option<PathBuf> {
    match output {
        Some(path) => Some(path.to_path_buf()),
        None if config.site.sitemap.enable => Some(config.root_join(&config.site.sitemap.path)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    #[test]
    fn test_disabled_without_output() {
        let config = test_parse_config("");
        assert!(target_path(&config, None).is_none());
        assert!(build_sitemap(&config, None).is_ok());
    }

    #[test]
    fn test_enabled_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.root = dir.path().to_path_buf();
        config.site.sitemap.enable = true;

        build_sitemap(&config, None).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.github.io/windows-folder-remark/</loc>"));
    }
}
