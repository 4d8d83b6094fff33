//! lingonav - locale-aware navigation for multilingual documentation sites.
//!
//! ```ignore
//! let config = SiteConfig::load(Path::new("lingonav.toml"))?;
//! config.validate()?;
//!
//! let resolver = LocaleNavResolver::new(&config);
//! let page = resolver.resolve_page("/zh/guide/getting-started")?;
//! print!("{}", page.alternates.to_html());
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod logger;
pub mod resolve;
pub mod utils;

pub use config::SiteConfig;
pub use resolve::{Alternates, LocaleNavResolver, NavEntry, NavError, PageNav};
