//! `[nav.<locale>]` and `[sidebar."<prefix>"]` configuration.
//!
//! ```toml
//! [[nav.root]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[nav.root]]
//! text = "中文"
//! link = "/zh/"
//!
//! [[sidebar."/zh/"]]
//! text = "指南"
//! items = [
//!     { text = "介绍", link = "/zh/" },
//!     { text = "快速开始", link = "/zh/guide/getting-started" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A navigation bar entry as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,

    /// Passed through to the theme; `None` means not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    #[serde(default)]
    pub items: Vec<SidebarLink>,
}

/// A single sidebar page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    pub text: String,
    pub link: String,
}
