use chrono::NaiveDate;

use super::{month_index, Language, LanguageFormatter};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl LanguageFormatter for English {
    fn language(&self) -> Language {
        Language::English
    }

    fn month_name(&self, date: NaiveDate) -> String {
        MONTHS[month_index(date)].to_string()
    }

    fn post_title(&self, today: NaiveDate) -> String {
        format!("What we did up to {}", self.format_date(today))
    }

    fn post_description(&self) -> String {
        "A summary of the work done in our repositories over the last 30 days.".to_string()
    }

    fn post_beginning(&self) -> String {
        "Here is what we worked on during the last 30 days, repository by repository.".to_string()
    }

    fn repo_header(&self, full_name: &str, url: &str) -> String {
        format!("## Work in [{full_name}]({url})")
    }

    fn commit_header(&self, short_sha: &str, url: &str, date: NaiveDate) -> String {
        format!("[{short_sha}]({url}) on {}", self.format_date(date))
    }

    fn commit_committer(&self, name: &str) -> String {
        format!("by **{name}**")
    }

    fn commit_author(&self, login: &str, url: &str, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("by **[{login}]({url})** ({name})"),
            None => format!("by **[{login}]({url})**"),
        }
    }

    fn automatic_commit(&self) -> String {
        "was generated automatically".to_string()
    }

    fn commit_stats(&self, additions: u64, deletions: u64) -> String {
        format!("_Stats: {additions} lines added, {deletions} lines removed._")
    }

    fn file_name(&self) -> String {
        "what-we-did".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(English.month_name(date()), "March");
        assert_eq!(English.format_date(date()), "9 March 2024");
    }

    #[test]
    fn renders_commit_fragments() {
        assert_eq!(
            English.commit_header("abc123", "https://x/c", date()),
            "[abc123](https://x/c) on 9 March 2024"
        );
        assert_eq!(
            English.commit_author("octo", "https://x/octo", Some("Octo Cat")),
            "by **[octo](https://x/octo)** (Octo Cat)"
        );
        assert_eq!(
            English.commit_author("octo", "https://x/octo", None),
            "by **[octo](https://x/octo)**"
        );
        assert_eq!(English.commit_committer("Jane"), "by **Jane**");
        assert_eq!(
            English.commit_stats(3, 1),
            "_Stats: 3 lines added, 1 lines removed._"
        );
    }

    #[test]
    fn renders_front_matter_text() {
        assert_eq!(English.post_title(date()), "What we did up to 9 March 2024");
        assert_eq!(
            English.repo_header("org/repo", "https://x/repo"),
            "## Work in [org/repo](https://x/repo)"
        );
    }
}
