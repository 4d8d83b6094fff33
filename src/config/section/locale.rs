//! `[locales.<id>]` and `[alternates]` configuration.
//!
//! ```toml
//! [locales.root]
//! label = "English"
//! lang = "en-US"
//!
//! [locales.zh]
//! label = "简体中文"
//! lang = "zh-CN"
//! link = "/zh/"
//! title = "Windows 文件夹备注工具"
//!
//! [alternates]
//! zh = "https://example.cn"
//! ```

use serde::{Deserialize, Serialize};

/// One declared locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Name shown in the language switcher.
    pub label: String,

    /// BCP-47 language tag (`en-US`, `zh-CN`).
    pub lang: String,

    /// Path prefix (`/zh/`). Omitted for the root locale served at `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Overrides `[site] title` for pages of this locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Overrides `[site] description` for pages of this locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocaleConfig {
    pub fn is_root(&self) -> bool {
        self.link.is_none()
    }
}
