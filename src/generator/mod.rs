//! Output generated from the declared site map.
//!
//! - **Sitemap**: `sitemap.xml` with `xhtml:link` alternates per page
//!
//! Nothing here crawls rendered output: the page set is
//! [`SiteConfig::declared_links`](crate::config::SiteConfig::declared_links).

pub mod sitemap;

pub use sitemap::Sitemap;
