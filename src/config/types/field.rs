//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted TOML field path used in diagnostics.
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(SiteSectionConfig::FIELDS.hostname, "invalid URL");
/// ```
///
/// Keyed tables (`[locales.<id>]`, `[sidebar."<prefix>"]`) build theirs at
/// runtime with [`FieldPath::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a table key, quoting it when it is not a bare TOML key.
    ///
    /// ```ignore
    /// FieldPath::new("sidebar").key("/zh/")  // sidebar."/zh/"
    /// FieldPath::new("locales").key("zh")    // locales.zh
    /// ```
    pub fn key(&self, key: &str) -> Self {
        let bare = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        let segment = if bare {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(format!("\"{}\"", key.replace('"', "\\\"")))
        };
        if self.0.is_empty() {
            Self(Cow::Owned(segment.into_owned()))
        } else {
            Self(Cow::Owned(format!("{}.{}", self.0, segment)))
        }
    }

    /// Append an array index: `nav.root[1]`.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bare_and_quoted() {
        let locales = FieldPath::new("locales");
        assert_eq!(locales.key("zh").as_str(), "locales.zh");
        assert_eq!(locales.key("zh").key("link").as_str(), "locales.zh.link");

        let sidebar = FieldPath::new("sidebar");
        assert_eq!(sidebar.key("/zh/").as_str(), "sidebar.\"/zh/\"");
    }

    #[test]
    fn test_index() {
        let nav = FieldPath::new("nav").key("root").index(1);
        assert_eq!(nav.as_str(), "nav.root[1]");
    }

    #[test]
    fn test_key_on_empty_root() {
        assert_eq!(FieldPath::new("").key("site").as_str(), "site");
    }
}
