use chrono::NaiveDate;

use super::{month_index, Language, LanguageFormatter};

// Month names carry the preposition, as dates are always written "9 de martzu 2024".
const MONTHS: [&str; 12] = [
    "de gennàrgiu",
    "de friàrgiu",
    "de martzu",
    "de abrili",
    "de maju",
    "de làmpadas",
    "de argiolas",
    "de austu",
    "de cabudanni",
    "de ladàmini",
    "de donniasantu",
    "de idas",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Sardinian;

impl LanguageFormatter for Sardinian {
    fn language(&self) -> Language {
        Language::Sardinian
    }

    fn month_name(&self, date: NaiveDate) -> String {
        MONTHS[month_index(date)].to_string()
    }

    fn post_title(&self, today: NaiveDate) -> String {
        format!("Su chi eus fatu finas a su {}", self.format_date(today))
    }

    fn post_description(&self) -> String {
        "Unu arresumu de su traballu fatu in is repositòrios nostus in is ùrtimas 30 dies.".to_string()
    }

    fn post_beginning(&self) -> String {
        "Beni is informus de su chi eus fatu in is ùrtimas 30 dies, repositòriu po repositòriu.".to_string()
    }

    fn repo_header(&self, full_name: &str, url: &str) -> String {
        format!("## Traballu in [{full_name}]({url})")
    }

    fn commit_header(&self, short_sha: &str, url: &str, date: NaiveDate) -> String {
        format!("[{short_sha}]({url}) su {}", self.format_date(date))
    }

    fn commit_committer(&self, name: &str) -> String {
        format!("de **{name}**")
    }

    fn commit_author(&self, login: &str, url: &str, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("de **[{login}]({url})** ({name})"),
            None => format!("de **[{login}]({url})**"),
        }
    }

    fn automatic_commit(&self) -> String {
        "est istètiu generau in automàticu".to_string()
    }

    fn commit_stats(&self, additions: u64, deletions: u64) -> String {
        format!("_Statìsticas: {additions} lìnias agiuntas, {deletions} lìnias bogadas._")
    }

    fn file_name(&self) -> String {
        "su-chi-eus-fatu".to_string()
    }
}
