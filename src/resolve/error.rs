//! Resolution errors.

use std::fmt;
use thiserror::Error;

use crate::config::FieldPath;
use crate::core::LocaleId;

/// Where a checked link was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOrigin {
    /// `[[nav.<locale>]]` entry.
    Nav { locale: LocaleId, index: usize },
    /// The `[sidebar."<prefix>"]` key itself.
    SidebarKey { prefix: String },
    /// An item inside a sidebar group.
    Sidebar {
        prefix: String,
        group: usize,
        item: usize,
    },
}

impl LinkOrigin {
    /// Config field the link was read from.
    pub fn field(&self) -> FieldPath {
        match self {
            Self::Nav { locale, index } => FieldPath::new("nav")
                .key(locale.as_str())
                .index(*index)
                .key("link"),
            Self::SidebarKey { prefix } => FieldPath::new("sidebar").key(prefix),
            Self::Sidebar {
                prefix,
                group,
                item,
            } => FieldPath::new("sidebar")
                .key(prefix)
                .index(*group)
                .key("items")
                .index(*item)
                .key("link"),
        }
    }
}

impl fmt::Display for LinkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().as_str())
    }
}

/// Why a link is outside its locale's namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeReason {
    /// Owned by another declared locale.
    ForeignLocale(LocaleId),
    /// First segment names a language no locale is served under.
    UndeclaredNamespace { lang: String },
    /// Under no declared prefix (sites without a root locale).
    Unowned,
}

impl fmt::Display for ScopeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignLocale(owner) => write!(f, "points into locale `{owner}`"),
            Self::UndeclaredNamespace { lang } => {
                write!(f, "points into an undeclared `{lang}` namespace")
            }
            Self::Unowned => f.write_str("is not under any declared locale"),
        }
    }
}

/// Errors raised while resolving navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown locale `{0}`")]
    UnknownLocale(LocaleId),

    #[error("{origin}: link `{link}` of locale `{expected}` {reason}")]
    LinkScopeViolation {
        origin: LinkOrigin,
        link: String,
        expected: LocaleId,
        reason: ScopeReason,
    },

    #[error("no sidebar for path `{0}`")]
    NoSidebarForPath(String),

    #[error("nav of locale `{locale}` has {found} locale switch links, expected {expected}")]
    SwitchLinkCount {
        locale: LocaleId,
        found: usize,
        expected: usize,
    },

    #[error("path `{0}` is not under any declared locale")]
    UnownedPath(String),
}

impl NavError {
    /// A page can still render (with an empty sidebar).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSidebarForPath(_))
    }

    /// Config field to blame, if the error comes from the site map itself.
    pub fn field(&self) -> Option<FieldPath> {
        match self {
            Self::LinkScopeViolation { origin, .. } => Some(origin.field()),
            Self::SwitchLinkCount { locale, .. } => Some(FieldPath::new("nav").key(locale.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_fields() {
        let nav = LinkOrigin::Nav {
            locale: "root".into(),
            index: 0,
        };
        assert_eq!(nav.field().as_str(), "nav.root[0].link");

        let item = LinkOrigin::Sidebar {
            prefix: "/zh/".into(),
            group: 0,
            item: 2,
        };
        assert_eq!(item.field().as_str(), "sidebar.\"/zh/\"[0].items[2].link");
    }

    #[test]
    fn test_scope_violation_message() {
        let err = NavError::LinkScopeViolation {
            origin: LinkOrigin::Nav {
                locale: "zh".into(),
                index: 0,
            },
            link: "/en/guide/".into(),
            expected: "zh".into(),
            reason: ScopeReason::UndeclaredNamespace {
                lang: "en-US".into(),
            },
        };
        let text = err.to_string();
        assert!(text.starts_with("nav.zh[0].link"));
        assert!(text.contains("`/en/guide/`"));
        assert!(text.contains("undeclared `en-US` namespace"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable() {
        assert!(NavError::NoSidebarForPath("/x/".into()).is_recoverable());
        assert!(!NavError::UnknownLocale("fr".into()).is_recoverable());
    }
}
