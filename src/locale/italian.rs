use chrono::NaiveDate;

use super::{month_index, Language, LanguageFormatter};

const MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Italian;

impl LanguageFormatter for Italian {
    fn language(&self) -> Language {
        Language::Italian
    }

    fn month_name(&self, date: NaiveDate) -> String {
        MONTHS[month_index(date)].to_string()
    }

    fn post_title(&self, today: NaiveDate) -> String {
        format!("Cosa abbiamo fatto fino al {}", self.format_date(today))
    }

    fn post_description(&self) -> String {
        "Un riassunto del lavoro svolto nei nostri repository negli ultimi 30 giorni.".to_string()
    }

    fn post_beginning(&self) -> String {
        "Ecco su cosa abbiamo lavorato negli ultimi 30 giorni, repository per repository.".to_string()
    }

    fn repo_header(&self, full_name: &str, url: &str) -> String {
        format!("## Lavoro in [{full_name}]({url})")
    }

    fn commit_header(&self, short_sha: &str, url: &str, date: NaiveDate) -> String {
        format!("[{short_sha}]({url}) il {}", self.format_date(date))
    }

    fn commit_committer(&self, name: &str) -> String {
        format!("da **{name}**")
    }

    fn commit_author(&self, login: &str, url: &str, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("da **[{login}]({url})** ({name})"),
            None => format!("da **[{login}]({url})**"),
        }
    }

    fn automatic_commit(&self) -> String {
        "è stato generato automaticamente".to_string()
    }

    fn commit_stats(&self, additions: u64, deletions: u64) -> String {
        format!("_Statistiche: {additions} righe aggiunte, {deletions} righe rimosse._")
    }

    fn file_name(&self) -> String {
        "cosa-abbiamo-fatto".to_string()
    }
}
