//! Localized text fragments for activity reports.
//!
//! Every supported locale implements [`LanguageFormatter`]. Formatters only
//! produce inline text: headings, links and emphasis. Line layout belongs to
//! [`crate::report::ReportBuilder`].

pub mod english;
pub mod italian;
pub mod registry;
pub mod sardinian;

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

pub use english::English;
pub use italian::Italian;
pub use registry::LanguageRegistry;
pub use sardinian::Sardinian;

pub trait LanguageFormatter: Send + Sync {
    fn language(&self) -> Language;

    fn month_name(&self, date: NaiveDate) -> String;

    /// Day, month name and year, in that order.
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{} {} {}", date.day(), self.month_name(date), date.year())
    }

    fn post_title(&self, today: NaiveDate) -> String;
    fn post_description(&self) -> String;
    fn post_beginning(&self) -> String;

    fn repo_header(&self, full_name: &str, url: &str) -> String;
    fn commit_header(&self, short_sha: &str, url: &str, date: NaiveDate) -> String;

    fn commit_committer(&self, name: &str) -> String;
    fn commit_author(&self, login: &str, url: &str, name: Option<&str>) -> String;
    fn automatic_commit(&self) -> String;

    fn commit_stats(&self, additions: u64, deletions: u64) -> String;

    fn file_name(&self) -> String;

    fn code(&self) -> &'static str {
        self.language().code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Sardinian,
    Italian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Sardinian, Language::Italian];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Sardinian => "sc",
            Language::Italian => "it",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Sardinian => "Sardu",
            Language::Italian => "Italiano",
        }
    }

    pub fn formatter(self) -> Box<dyn LanguageFormatter> {
        match self {
            Language::English => Box::new(English),
            Language::Sardinian => Box::new(Sardinian),
            Language::Italian => Box::new(Italian),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| DigestError::UnknownLanguage(s.to_string()))
    }
}

fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}
