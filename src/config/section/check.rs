//! `[check]` section configuration.
//!
//! Severity of recoverable findings reported by `lingonav check`.
//!
//! ```toml
//! [check]
//! missing_sidebar = "warn"   # error | warn
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Severity settings for `lingonav check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check")]
pub struct CheckConfig {
    #[config(inline_doc = "Pages without a sidebar tree: error | warn")]
    pub missing_sidebar: CheckLevel,
}

/// How a finding affects the exit status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Fail the check.
    Error,
    /// Report and continue.
    #[default]
    Warn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(CheckConfig::default().missing_sidebar, CheckLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        let config: CheckConfig = toml::from_str("missing_sidebar = \"error\"").unwrap();
        assert_eq!(config.missing_sidebar, CheckLevel::Error);
        assert!(toml::from_str::<CheckConfig>("missing_sidebar = \"fatal\"").is_err());
    }

    #[test]
    fn test_section_and_field_paths() {
        assert_eq!(CheckConfig::TEMPLATE_SECTION, "check");
        assert_eq!(
            CheckConfig::FIELDS.missing_sidebar.as_str(),
            "check.missing_sidebar"
        );
        assert!(CheckConfig::template_with_header().starts_with("# "));
    }

    #[test]
    fn test_template_renders_runtime_default() {
        assert!(CheckConfig::template().contains("missing_sidebar = \"warn\""));
    }
}
