use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

use super::{Language, LanguageFormatter};
use crate::error::{DigestError, Result};

/// The fixed set of formatters a run renders, in registration order.
pub struct LanguageRegistry {
    formatters: Vec<Box<dyn LanguageFormatter>>,
}

impl LanguageRegistry {
    /// Registers `formatters`, rejecting any that does not produce usable text.
    pub fn new(formatters: Vec<Box<dyn LanguageFormatter>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for formatter in &formatters {
            if !seen.insert(formatter.code()) {
                return Err(invalid(formatter.as_ref(), "registered more than once"));
            }
            check_conformance(formatter.as_ref())?;
            debug!(code = formatter.code(), "registered formatter");
        }
        Ok(Self { formatters })
    }

    pub fn builtin() -> Result<Self> {
        Self::for_languages(&Language::ALL)
    }

    pub fn for_languages(languages: &[Language]) -> Result<Self> {
        Self::new(languages.iter().map(|l| l.formatter()).collect())
    }

    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let languages = codes
            .iter()
            .map(|c| c.as_ref().parse::<Language>())
            .collect::<Result<Vec<_>>>()?;
        Self::for_languages(&languages)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LanguageFormatter> {
        self.formatters.iter().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

fn invalid(formatter: &dyn LanguageFormatter, reason: impl Into<String>) -> DigestError {
    DigestError::Formatter {
        code: formatter.code().to_string(),
        reason: reason.into(),
    }
}

fn check_conformance(formatter: &dyn LanguageFormatter) -> Result<()> {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
        .ok_or_else(|| DigestError::InvalidDate("sample date".to_string()))?;

    let fragments = [
        ("format_date", formatter.format_date(sample)),
        ("post_title", formatter.post_title(sample)),
        ("post_description", formatter.post_description()),
        ("post_beginning", formatter.post_beginning()),
        (
            "repo_header",
            formatter.repo_header("org/repo", "https://example.org/org/repo"),
        ),
        (
            "commit_header",
            formatter.commit_header("abcdef", "https://example.org/c", sample),
        ),
        ("commit_committer", formatter.commit_committer("name")),
        (
            "commit_author",
            formatter.commit_author("login", "https://example.org/login", Some("name")),
        ),
        ("automatic_commit", formatter.automatic_commit()),
        ("commit_stats", formatter.commit_stats(1, 1)),
    ];
    for (operation, text) in fragments {
        if text.trim().is_empty() {
            return Err(invalid(formatter, format!("{operation} returned empty text")));
        }
    }

    if !formatter.repo_header("org/repo", "u").starts_with("## ") {
        return Err(invalid(formatter, "repo_header must be a level-2 heading"));
    }

    let mut months = HashSet::new();
    for month in 1..=12 {
        let date = NaiveDate::from_ymd_opt(2000, month, 1)
            .ok_or_else(|| DigestError::InvalidDate(format!("sample month {month}")))?;
        let name = formatter.month_name(date);
        if name.trim().is_empty() || !months.insert(name) {
            return Err(invalid(formatter, format!("month {month} has no distinct name")));
        }
    }

    let slug = formatter.file_name();
    let is_slug = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !is_slug {
        return Err(invalid(formatter, format!("file name '{slug}' is not a slug")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::English;

    struct Broken;

    impl LanguageFormatter for Broken {
        fn language(&self) -> Language {
            Language::Italian
        }
        fn month_name(&self, _date: NaiveDate) -> String {
            "mese".to_string()
        }
        fn post_title(&self, _today: NaiveDate) -> String {
            "t".to_string()
        }
        fn post_description(&self) -> String {
            "d".to_string()
        }
        fn post_beginning(&self) -> String {
            "b".to_string()
        }
        fn repo_header(&self, full_name: &str, url: &str) -> String {
            format!("## [{full_name}]({url})")
        }
        fn commit_header(&self, short_sha: &str, url: &str, _date: NaiveDate) -> String {
            format!("[{short_sha}]({url})")
        }
        fn commit_committer(&self, name: &str) -> String {
            name.to_string()
        }
        fn commit_author(&self, login: &str, _url: &str, _name: Option<&str>) -> String {
            login.to_string()
        }
        fn automatic_commit(&self) -> String {
            String::new()
        }
        fn commit_stats(&self, additions: u64, deletions: u64) -> String {
            format!("{additions}/{deletions}")
        }
        fn file_name(&self) -> String {
            "Not A Slug".to_string()
        }
    }

    #[test]
    fn builtin_registers_all_languages_in_order() {
        let registry = LanguageRegistry::builtin().unwrap();
        let codes: Vec<_> = registry.iter().map(|f| f.code()).collect();
        assert_eq!(codes, vec!["en", "sc", "it"]);
    }

    #[test]
    fn rejects_incomplete_formatter_at_registration() {
        let err = LanguageRegistry::new(vec![Box::new(Broken)]).err().unwrap();
        match err {
            DigestError::Formatter { code, reason } => {
                assert_eq!(code, "it");
                assert!(reason.contains("automatic_commit"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = LanguageRegistry::new(vec![Box::new(English), Box::new(English)])
            .err()
            .unwrap();
        assert!(matches!(err, DigestError::Formatter { .. }));
    }

    #[test]
    fn from_codes_propagates_unknown_language() {
        let err = LanguageRegistry::from_codes(&["en", "de"]).err().unwrap();
        assert!(matches!(err, DigestError::UnknownLanguage(code) if code == "de"));
    }

    #[test]
    fn from_codes_keeps_requested_subset() {
        let registry = LanguageRegistry::from_codes(&["it"]).unwrap();
        let codes: Vec<_> = registry.iter().map(|f| f.code()).collect();
        assert_eq!(codes, vec!["it"]);
        assert_eq!(registry.len(), 1);
    }
}
