//! Locale-aware navigation resolution.
//!
//! [`LocaleNavResolver`] answers, for one page being rendered:
//!
//! | Operation            | Input   | Output                                   |
//! |----------------------|---------|------------------------------------------|
//! | `resolve_nav`        | locale  | navigation bar entries, switch link mark |
//! | `resolve_sidebar`    | path    | sidebar groups of the longest prefix     |
//! | `resolve_alternates` | path    | every locale's URL of the page + x-default |
//! | `resolve_page`       | path    | all of the above for the owning locale   |
//!
//! The resolver only borrows the config and holds no mutable state, so one
//! instance can be shared across render workers.

mod alternate;
mod error;
mod validate;

pub use alternate::{AlternateLink, Alternates, X_DEFAULT};
pub use error::{LinkOrigin, NavError, ScopeReason};

use serde::Serialize;
use url::Url;

use crate::config::{SidebarGroup, SiteConfig};
use crate::core::url::{join_url, mount_path, normalize_route, strip_base};
use crate::core::{LocaleId, LocaleSlot, LocaleTable};

/// A navigation bar entry ready for templating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub text: String,
    pub link: String,
    /// Set on the locale switch entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_to: Option<LocaleId>,
}

impl NavEntry {
    pub fn is_switch(&self) -> bool {
        self.switch_to.is_some()
    }
}

/// Everything the templating layer needs for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageNav<'a> {
    /// Requested path, normalized and without the deploy base.
    pub path: String,
    pub locale: LocaleId,
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub nav: Vec<NavEntry>,
    pub sidebar: &'a [SidebarGroup],
    pub alternates: Alternates,
}

/// Resolves nav, sidebar and alternate links against one site config.
#[derive(Debug, Clone)]
pub struct LocaleNavResolver<'a> {
    config: &'a SiteConfig,
    locales: LocaleTable,
}

impl<'a> LocaleNavResolver<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            locales: LocaleTable::from_config(&config.locales),
        }
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Normalize a requested path and strip the deploy base.
    ///
    /// A bare locale home (`/zh`) becomes its prefix (`/zh/`), so every
    /// resolution sees one route per page.
    pub fn route(&self, path: &str) -> String {
        let route = normalize_route(path);
        let route = strip_base(&route, self.config.base());
        match self.locales.home_of(&route) {
            Some(slot) => slot.prefix.clone(),
            None => route.into_owned(),
        }
    }

    /// Locale owning `path`.
    pub fn locale_of(&self, path: &str) -> Result<&LocaleSlot, NavError> {
        let route = self.route(path);
        self.locales
            .owner_of(&route)
            .ok_or(NavError::UnownedPath(route))
    }

    fn slot(&self, id: &str) -> Result<&LocaleSlot, NavError> {
        self.locales
            .get(id)
            .ok_or_else(|| NavError::UnknownLocale(LocaleId::new(id)))
    }

    // ========================================================================
    // nav
    // ========================================================================

    /// Navigation bar entries of `locale`, in declaration order.
    ///
    /// Fails on the first link outside the locale's namespace, or when the
    /// table does not contain exactly one locale switch entry (none on a
    /// single-locale site).
    pub fn resolve_nav(&self, locale: &str) -> Result<Vec<NavEntry>, NavError> {
        let slot = self.slot(locale)?;
        let (entries, mut errors) = self.scan_nav(slot);
        if errors.is_empty() {
            Ok(entries)
        } else {
            Err(errors.swap_remove(0))
        }
    }

    /// Check every nav entry of `slot`, collecting all failures.
    fn scan_nav(&self, slot: &LocaleSlot) -> (Vec<NavEntry>, Vec<NavError>) {
        let items = self
            .config
            .nav
            .get(slot.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut entries = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let origin = LinkOrigin::Nav {
                locale: slot.id.clone(),
                index,
            };
            match self.check_scope(&item.link, slot, origin, true) {
                Ok(switch_to) => entries.push(NavEntry {
                    text: item.text.clone(),
                    link: item.link.clone(),
                    switch_to,
                }),
                Err(err) => errors.push(err),
            }
        }

        let found = entries.iter().filter(|e| e.is_switch()).count();
        let expected = usize::from(self.locales.len() > 1);
        if errors.is_empty() && found != expected {
            errors.push(NavError::SwitchLinkCount {
                locale: slot.id.clone(),
                found,
                expected,
            });
        }
        (entries, errors)
    }

    /// Check that `link` stays inside `slot`'s namespace.
    ///
    /// Returns the switched-to locale when `allow_switch` is set and the link
    /// is another locale's home page. External URLs are not checked.
    fn check_scope(
        &self,
        link: &str,
        slot: &LocaleSlot,
        origin: LinkOrigin,
        allow_switch: bool,
    ) -> Result<Option<LocaleId>, NavError> {
        if is_external(link) {
            return Ok(None);
        }
        let route = normalize_route(link);

        if allow_switch
            && let Some(home) = self.locales.home_of(&route)
            && home.id != slot.id
        {
            return Ok(Some(home.id.clone()));
        }

        let violation = |reason| NavError::LinkScopeViolation {
            origin: origin.clone(),
            link: link.to_string(),
            expected: slot.id.clone(),
            reason,
        };

        if let Some(lang) = self.locales.undeclared_namespace(&route) {
            return Err(violation(ScopeReason::UndeclaredNamespace {
                lang: lang.to_string(),
            }));
        }
        match self.locales.owner_of(&route) {
            Some(owner) if owner.id == slot.id => Ok(None),
            Some(owner) => Err(violation(ScopeReason::ForeignLocale(owner.id.clone()))),
            None => Err(violation(ScopeReason::Unowned)),
        }
    }

    // ========================================================================
    // sidebar
    // ========================================================================

    /// Sidebar groups registered under the longest prefix of `path`.
    pub fn resolve_sidebar(&self, path: &str) -> Result<&'a [SidebarGroup], NavError> {
        self.sidebar_for(self.route(path))
    }

    fn sidebar_for(&self, route: String) -> Result<&'a [SidebarGroup], NavError> {
        let with_slash = format!("{route}/");
        let matched = self
            .config
            .sidebar
            .iter()
            .filter(|(prefix, _)| route.starts_with(prefix.as_str()) || with_slash == **prefix)
            .max_by_key(|(prefix, _)| prefix.len());

        match matched {
            Some((prefix, groups)) => {
                crate::debug!("sidebar"; "{route} -> {prefix}");
                Ok(groups.as_slice())
            }
            None => Err(NavError::NoSidebarForPath(route)),
        }
    }

    // ========================================================================
    // alternates
    // ========================================================================

    /// URLs of `path` in every declared locale, plus `x-default`.
    pub fn resolve_alternates(&self, path: &str) -> Result<Alternates, NavError> {
        self.alternates_for(&self.route(path))
    }

    fn alternates_for(&self, route: &str) -> Result<Alternates, NavError> {
        let current = self
            .locales
            .owner_of(route)
            .ok_or_else(|| NavError::UnownedPath(route.to_string()))?;

        let mut links = Vec::with_capacity(self.locales.len());
        for slot in self.locales.iter() {
            let target = self
                .locales
                .localize(route, current, slot)
                .ok_or_else(|| NavError::UnownedPath(route.to_string()))?;
            links.push(AlternateLink {
                locale: slot.id.clone(),
                hreflang: slot.lang.clone(),
                href: self.absolute(slot, &target),
            });
        }

        let fallback = self
            .locales
            .x_default(&self.config.site.fallback_lang)
            .map(|slot| slot.id.clone())
            .unwrap_or_else(|| current.id.clone());
        let x_default = links
            .iter()
            .find(|link| link.locale == fallback)
            .map(|link| link.href.clone())
            .unwrap_or_default();

        Ok(Alternates {
            current: current.id.clone(),
            links,
            x_default,
        })
    }

    /// Substitute `from`'s prefix in `path` with `to`'s.
    ///
    /// `path` may carry the mount point of `from`'s site URL, so localizing
    /// the URL path of `alternates[L]` from `L` back to the current locale
    /// yields the original path.
    pub fn localize_path(&self, path: &str, from: &str, to: &str) -> Result<String, NavError> {
        let from = self.slot(from)?;
        let to = self.slot(to)?;
        let base = self.config.base();
        let route = normalize_route(path);
        let route = match self.site_url(&from.id) {
            Some(site_url) => strip_base(&route, mount_path(&site_url, base)).into_owned(),
            None => strip_base(&route, base).into_owned(),
        };
        self.locales
            .localize(&route, from, to)
            .ok_or(NavError::UnownedPath(route))
    }

    /// Absolute URL of `route` for `slot`.
    ///
    /// Without a configured base URL the site-relative path is returned;
    /// config validation reports that case.
    fn absolute(&self, slot: &LocaleSlot, route: &str) -> String {
        match self.site_url(&slot.id) {
            Some(site_url) => join_url(&site_url, self.config.base(), route),
            None => format!("{}{}", self.config.base().trim_end_matches('/'), route),
        }
    }

    /// Base URL for a locale: its `[alternates]` entry, else `[site] hostname`.
    pub fn site_url(&self, locale: &LocaleId) -> Option<Url> {
        self.config
            .alternates
            .get(locale)
            .or(self.config.site.hostname.as_ref())
            .and_then(|raw| Url::parse(raw).ok())
    }

    // ========================================================================
    // page
    // ========================================================================

    /// Resolve everything for one page.
    ///
    /// A missing sidebar is not fatal: the page gets an empty sidebar and a
    /// warning is logged.
    pub fn resolve_page(&self, path: &str) -> Result<PageNav<'a>, NavError> {
        let route = self.route(path);
        let slot = self
            .locales
            .owner_of(&route)
            .ok_or_else(|| NavError::UnownedPath(route.clone()))?;
        let locale = self
            .config
            .locales
            .get(&slot.id)
            .ok_or_else(|| NavError::UnknownLocale(slot.id.clone()))?;

        let nav = self.resolve_nav(slot.id.as_str())?;
        let alternates = self.alternates_for(&route)?;
        let sidebar = match self.sidebar_for(route.clone()) {
            Ok(groups) => groups,
            Err(err) if err.is_recoverable() => {
                crate::log!("warning"; "{err}, rendering without sidebar");
                &[]
            }
            Err(err) => return Err(err),
        };

        Ok(PageNav {
            path: route,
            locale: slot.id.clone(),
            lang: &locale.lang,
            title: locale.title.as_deref().unwrap_or(&self.config.site.title),
            description: locale
                .description
                .as_deref()
                .unwrap_or(&self.config.site.description),
            nav,
            sidebar,
            alternates,
        })
    }
}

/// Absolute URLs and non-path schemes are left alone.
fn is_external(link: &str) -> bool {
    link.contains("://") || link.starts_with("mailto:") || link.starts_with("tel:")
}
