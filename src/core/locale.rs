//! Locale identifiers and prefix ownership.
//!
//! A [`LocaleTable`] is the routing view of `[locales]`: every locale owns
//! the routes under its prefix, the root locale (no `link`) owns `/` and
//! everything no other prefix claims.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::LocaleConfig;

/// Opaque locale key, e.g. `root`, `en`, `zh`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One declared locale with its normalized prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSlot {
    pub id: LocaleId,
    /// `/` for the root locale, otherwise `/segment/`.
    pub prefix: String,
    /// BCP-47 language tag.
    pub lang: String,
    pub is_root: bool,
}

impl LocaleSlot {
    /// Primary language subtag, lowercased: `zh-CN` → `zh`.
    pub fn primary_lang(&self) -> String {
        self.lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Whether `route` is this locale's home page (`/zh/` or `/zh`).
    pub fn is_home(&self, route: &str) -> bool {
        route == self.prefix || format!("{route}/") == self.prefix
    }

    /// Route relative to this locale's prefix, without leading slash.
    fn relative<'r>(&self, route: &'r str) -> Option<&'r str> {
        if self.is_home(route) {
            return Some("");
        }
        route.strip_prefix(self.prefix.as_str())
    }
}

/// Locales in display order: root first, then ascending id.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    slots: Vec<LocaleSlot>,
}

impl LocaleTable {
    pub fn from_config(locales: &BTreeMap<LocaleId, LocaleConfig>) -> Self {
        let mut slots: Vec<LocaleSlot> = locales
            .iter()
            .map(|(id, locale)| LocaleSlot {
                id: id.clone(),
                prefix: normalize_prefix(locale.link.as_deref()),
                lang: locale.lang.clone(),
                is_root: locale.link.is_none(),
            })
            .collect();
        // BTreeMap already yields ascending ids; a stable sort keeps that.
        slots.sort_by_key(|slot| !slot.is_root);
        Self { slots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LocaleSlot> {
        self.slots.iter().find(|slot| slot.id.as_str() == id)
    }

    pub fn root(&self) -> Option<&LocaleSlot> {
        self.slots.iter().find(|slot| slot.is_root)
    }

    /// Locale owning `route`: the longest matching prefix.
    pub fn owner_of(&self, route: &str) -> Option<&LocaleSlot> {
        self.slots
            .iter()
            .filter(|slot| slot.relative(route).is_some())
            .max_by_key(|slot| slot.prefix.len())
    }

    /// Locale whose home page is exactly `route`.
    pub fn home_of(&self, route: &str) -> Option<&LocaleSlot> {
        self.slots.iter().find(|slot| slot.is_home(route))
    }

    /// Substitute `from`'s prefix with `to`'s. `None` if `route` is not
    /// under `from`.
    pub fn localize(&self, route: &str, from: &LocaleSlot, to: &LocaleSlot) -> Option<String> {
        let rest = from.relative(route)?;
        Some(format!("{}{rest}", to.prefix))
    }

    /// Detect links into a locale namespace nobody declared.
    ///
    /// Returns the `lang` whose primary subtag matches the first path
    /// segment when no locale is served under that segment, e.g. `/en/guide/`
    /// on a site serving `en-US` at `/`.
    pub fn undeclared_namespace(&self, route: &str) -> Option<&str> {
        let segment = route.trim_start_matches('/').split('/').next()?;
        if segment.is_empty() {
            return None;
        }
        let declared = format!("/{segment}/");
        if self.slots.iter().any(|slot| slot.prefix == declared) {
            return None;
        }
        self.slots
            .iter()
            .find(|slot| slot.primary_lang().eq_ignore_ascii_case(segment))
            .map(|slot| slot.lang.as_str())
    }

    /// Target of `x-default`: the locale with `fallback_lang`, else root,
    /// else the first locale.
    pub fn x_default(&self, fallback_lang: &str) -> Option<&LocaleSlot> {
        self.slots
            .iter()
            .find(|slot| slot.lang.eq_ignore_ascii_case(fallback_lang))
            .or_else(|| self.root())
            .or_else(|| self.slots.first())
    }
}

/// `None` → `/`; `zh`, `/zh`, `zh/` → `/zh/`.
fn normalize_prefix(link: Option<&str>) -> String {
    match link.map(|l| l.trim_matches('/')) {
        None | Some("") => "/".to_string(),
        Some(inner) => format!("/{inner}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, Option<&str>, &str)]) -> LocaleTable {
        let locales = entries
            .iter()
            .map(|(id, link, lang)| {
                (
                    LocaleId::from(*id),
                    LocaleConfig {
                        label: id.to_string(),
                        lang: lang.to_string(),
                        link: link.map(str::to_string),
                        ..LocaleConfig::default()
                    },
                )
            })
            .collect();
        LocaleTable::from_config(&locales)
    }

    fn bilingual() -> LocaleTable {
        table(&[("zh", Some("/zh/"), "zh-CN"), ("root", None, "en-US")])
    }

    #[test]
    fn test_display_order_root_first() {
        let t = table(&[
            ("ja", Some("/ja/"), "ja-JP"),
            ("zh", Some("/zh/"), "zh-CN"),
            ("en", None, "en-US"),
        ]);
        let ids: Vec<_> = t.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["en", "ja", "zh"]);
    }

    #[test]
    fn test_owner_of_longest_prefix() {
        let t = bilingual();
        assert_eq!(t.owner_of("/zh/guide/").unwrap().id.as_str(), "zh");
        assert_eq!(t.owner_of("/zh").unwrap().id.as_str(), "zh");
        assert_eq!(t.owner_of("/zhx/").unwrap().id.as_str(), "root");
        assert_eq!(t.owner_of("/guide/").unwrap().id.as_str(), "root");
    }

    #[test]
    fn test_owner_of_without_root() {
        let t = table(&[("en", Some("/en/"), "en-US"), ("zh", Some("/zh/"), "zh-CN")]);
        assert!(t.owner_of("/guide/").is_none());
        assert!(t.root().is_none());
    }

    #[test]
    fn test_localize() {
        let t = bilingual();
        let root = t.get("root").unwrap();
        let zh = t.get("zh").unwrap();
        assert_eq!(t.localize("/guide/usage", root, zh).unwrap(), "/zh/guide/usage");
        assert_eq!(t.localize("/zh/guide/usage", zh, root).unwrap(), "/guide/usage");
        assert_eq!(t.localize("/zh", zh, root).unwrap(), "/");
        assert!(t.localize("/guide/", zh, root).is_none());
    }

    #[test]
    fn test_undeclared_namespace() {
        let t = bilingual();
        assert_eq!(t.undeclared_namespace("/en/guide/"), Some("en-US"));
        assert_eq!(t.undeclared_namespace("/zh/guide/"), None);
        assert_eq!(t.undeclared_namespace("/guide/"), None);
        assert_eq!(t.undeclared_namespace("/"), None);
    }

    #[test]
    fn test_x_default() {
        let t = bilingual();
        assert_eq!(t.x_default("en-US").unwrap().id.as_str(), "root");
        assert_eq!(t.x_default("zh-cn").unwrap().id.as_str(), "zh");
        assert_eq!(t.x_default("fr-FR").unwrap().id.as_str(), "root");
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix(None), "/");
        assert_eq!(normalize_prefix(Some("zh")), "/zh/");
        assert_eq!(normalize_prefix(Some("/zh")), "/zh/");
        assert_eq!(normalize_prefix(Some("/zh/")), "/zh/");
    }
}
