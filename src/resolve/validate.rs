//! Whole-site link scope check.

use super::{LinkOrigin, LocaleNavResolver, NavError, ScopeReason};
use crate::core::url::normalize_route;

impl LocaleNavResolver<'_> {
    /// Check every nav and sidebar link of the site, collecting all failures.
    ///
    /// Unlike [`resolve_nav`](Self::resolve_nav), which stops at the first
    /// bad entry, this reports everything at once. Sidebar trees are checked
    /// against the locale owning their prefix; switch links are only allowed
    /// in the navigation bar.
    pub fn validate(&self) -> Vec<NavError> {
        let mut errors = Vec::new();

        for slot in self.locales.iter() {
            errors.extend(self.scan_nav(slot).1);
        }

        for (prefix, groups) in &self.config.sidebar {
            let key = normalize_route(prefix);
            let owner = self.locales.owner_of(&key);

            let reason = match (owner, self.locales.undeclared_namespace(&key)) {
                (_, Some(lang)) => Some(ScopeReason::UndeclaredNamespace {
                    lang: lang.to_string(),
                }),
                (None, None) => Some(ScopeReason::Unowned),
                (Some(_), None) => None,
            };

            if let Some(reason) = reason {
                // Blame the owner when there is one, else the first locale.
                let Some(expected) = owner.or_else(|| self.locales.iter().next()) else {
                    continue;
                };
                errors.push(NavError::LinkScopeViolation {
                    origin: LinkOrigin::SidebarKey {
                        prefix: prefix.clone(),
                    },
                    link: prefix.clone(),
                    expected: expected.id.clone(),
                    reason,
                });
                continue;
            }

            let Some(owner) = owner else { continue };
            for (group_index, group) in groups.iter().enumerate() {
                for (item_index, item) in group.items.iter().enumerate() {
                    let origin = LinkOrigin::Sidebar {
                        prefix: prefix.clone(),
                        group: group_index,
                        item: item_index,
                    };
                    if let Err(err) = self.check_scope(&item.link, owner, origin, false) {
                        errors.push(err);
                    }
                }
            }
        }

        if !errors.is_empty() {
            crate::debug!("check"; "{} link scope error(s)", errors.len());
        }
        errors
    }
}
