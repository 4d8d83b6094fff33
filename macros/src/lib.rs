//! Proc macros for lingonav.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site-wide settings.
//! pub struct SiteSectionConfig {
//!     /// Deploy base path.
//!     #[config(default = "/")]
//!     pub base: String,
//!
//!     /// Sitemap settings.
//!     #[config(sub)]
//!     pub sitemap: SitemapConfig,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.base -> FieldPath("site.base")
//! // - SiteSectionConfig::template() -> TOML body with comments
//! // - SiteSectionConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (required)
//!
//! Field-level:
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc = "x")]` - Trailing comment instead of doc lines

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
