//! Configuration section definitions.
//!
//! | Section               | Purpose                                      |
//! |-----------------------|----------------------------------------------|
//! | `[site]`              | Titles, hostname, base, x-default language   |
//! | `[site.sitemap]`      | Sitemap output                               |
//! | `[check]`             | Severity levels for `lingonav check`         |
//! | `[locales.<id>]`      | Declared locales and their prefixes          |
//! | `[alternates]`        | Per-locale canonical base URLs               |
//! | `[[nav.<id>]]`        | Navigation bar entries per locale            |
//! | `[[sidebar."<pfx>"]]` | Sidebar groups per path prefix               |

mod check;
mod locale;
mod nav;
mod site;

pub use check::{CheckConfig, CheckLevel};
pub use locale::LocaleConfig;
pub use nav::{NavItem, SidebarGroup, SidebarLink};
pub use site::{SiteSectionConfig, SitemapConfig};
