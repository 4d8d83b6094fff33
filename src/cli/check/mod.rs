//! Site map check command.
//!
//! 1. Structural and link scope validation of the config
//! 2. Every declared page resolved in parallel against one shared resolver

mod report;

use anyhow::{Result, bail};
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::{CheckLevel, SiteConfig};
use crate::log;
use crate::resolve::LocaleNavResolver;
use crate::utils::plural_count;

use super::CheckArgs;
use report::CheckReport;

/// Validate the site map and resolve every declared page.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    config.validate()?;
    log!("check"; "config ok, {}", plural_count(config.locales.len(), "locale"));

    let pages = config.declared_links();
    log!("check"; "resolving {}", plural_count(pages.len(), "page"));

    let report = check_pages(config, &pages, args.warn_only);
    report.print();

    if report.error_count() > 0 {
        bail!(
            "found {} in {}",
            plural_count(report.error_count(), "error"),
            plural_count(pages.len(), "page")
        );
    }
    log!("check"; "{report}");
    Ok(())
}

/// Resolve `pages` on the rayon pool, collecting findings.
fn check_pages(config: &SiteConfig, pages: &[String], warn_only: bool) -> CheckReport {
    let resolver = LocaleNavResolver::new(config);
    let level = |configured: CheckLevel| {
        if warn_only { CheckLevel::Warn } else { configured }
    };
    let report = RwLock::new(CheckReport::default());

    pages.par_iter().for_each(|route| {
        let resolved = resolver
            .locale_of(route)
            .and_then(|slot| resolver.resolve_nav(slot.id.as_str()))
            .and_then(|_| resolver.resolve_alternates(route));
        if let Err(err) = resolved {
            report.write().add(route, err.to_string(), level(CheckLevel::Error));
        }

        match resolver.resolve_sidebar(route) {
            Ok(groups) => {
                crate::debug!("check"; "{route}: {}", plural_count(groups.len(), "sidebar group"));
            }
            Err(err) if err.is_recoverable() => {
                report
                    .write()
                    .add(route, err.to_string(), level(config.check.missing_sidebar));
            }
            Err(err) => report.write().add(route, err.to_string(), level(CheckLevel::Error)),
        }
    });

    report.into_inner()
}
