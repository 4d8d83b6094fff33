//! Small shared helpers.

pub mod html;

/// `"s"` unless `n == 1`: `"{n} page{}"`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "page")` -> `"3 pages"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural_count(0, "page"), "0 pages");
        assert_eq!(plural_count(1, "locale"), "1 locale");
        assert_eq!(plural_count(2, "error"), "2 errors");
    }
}
