//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::CheckLevel;
use crate::utils::plural_s;

/// A single page finding.
#[derive(Debug, Clone)]
pub struct Finding {
    pub message: String,
    pub level: CheckLevel,
}

/// Findings of `lingonav check`, grouped by page route.
#[derive(Debug, Default)]
pub struct CheckReport {
    pages: BTreeMap<String, Vec<Finding>>,
}

impl CheckReport {
    pub fn add(&mut self, route: &str, message: impl Into<String>, level: CheckLevel) {
        self.pages
            .entry(route.to_string())
            .or_default()
            .push(Finding {
                message: message.into(),
                level,
            });
    }

    /// Total findings at `level`.
    pub fn count(&self, level: CheckLevel) -> usize {
        self.pages
            .values()
            .flatten()
            .filter(|finding| finding.level == level)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(CheckLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(CheckLevel::Warn)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Print findings to stderr, one block per page.
    pub fn print(&self) {
        if self.pages.is_empty() {
            return;
        }
        eprintln!();
        for (route, findings) in &self.pages {
            eprintln!("{}{}{}", "[".dimmed(), route.cyan(), "]".dimmed());
            for finding in findings {
                match finding.level {
                    CheckLevel::Error => eprintln!("{} {}", "→".red(), finding.message),
                    CheckLevel::Warn => eprintln!("{} {}", "→".yellow(), finding.message),
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            errors.to_string().red().bold(),
            format!("error{}", plural_s(errors)).dimmed(),
            warnings.to_string().yellow().bold(),
            format!("warning{}", plural_s(warnings)).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_level() {
        let mut report = CheckReport::default();
        assert!(report.is_empty());
        report.add("/zh/faq", "no sidebar for path `/zh/faq`", CheckLevel::Warn);
        report.add("/zh/faq", "other", CheckLevel::Error);
        report.add("/guide/", "x", CheckLevel::Warn);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert!(report.to_string().contains("warning"));
    }
}
