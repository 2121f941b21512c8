use chrono::NaiveDate;

use crate::error::{DigestError, Result};
use crate::locale::{Language, LanguageFormatter};
use crate::model::{Commit, Identity, Repository};

pub const DEFAULT_IMAGE: &str = "/assets/images/activity-report.png";

/// A finished Markdown post for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub language: Language,
    pub reference_date: NaiveDate,
    pub file_name: String,
    pub commit_count: usize,
    lines: Vec<String>,
}

impl ReportDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_markdown(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// `{code}/_posts/{date}-{file_name}-{date}.md`
    pub fn path(&self) -> String {
        let date = self.reference_date.format("%Y-%m-%d");
        format!(
            "{}/_posts/{date}-{}-{date}.md",
            self.language.code(),
            self.file_name
        )
    }

    pub fn commit_message(&self) -> String {
        format!(
            "Add activity report for {} ({})",
            self.reference_date.format("%Y-%m-%d"),
            self.language.code()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    New,
    Started(NaiveDate),
    Finalized(NaiveDate),
}

/// Accumulates the Markdown post of a single language.
///
/// Methods must be called in order: `start` once, then any number of
/// `add_repository`/`add_commit`, then `finalize`. Anything else is an error.
pub struct ReportBuilder<'a> {
    formatter: &'a dyn LanguageFormatter,
    image: String,
    stage: Stage,
    lines: Vec<String>,
    commit_count: usize,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(formatter: &'a dyn LanguageFormatter) -> Self {
        Self {
            formatter,
            image: DEFAULT_IMAGE.to_string(),
            stage: Stage::New,
            lines: Vec::new(),
            commit_count: 0,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn commit_count(&self) -> usize {
        self.commit_count
    }

    pub fn start(&mut self, reference_date: NaiveDate) -> Result<()> {
        if self.stage != Stage::New {
            return Err(self.misuse("start called more than once"));
        }
        let f = self.formatter;
        self.lines.extend([
            "---".to_string(),
            format!("title: {}", f.post_title(reference_date)),
            format!("image: {}", self.image),
            format!("description: {}", f.post_description()),
            format!("reference: {}", reference_date.format("%Y-%m-%d")),
            "---".to_string(),
            String::new(),
            f.post_beginning(),
            String::new(),
        ]);
        self.stage = Stage::Started(reference_date);
        Ok(())
    }

    /// Emits the repository heading. Callers only invoke this for repositories
    /// with at least one qualifying commit.
    pub fn add_repository(&mut self, repo: &Repository) -> Result<()> {
        self.started("add_repository")?;
        let header = self.formatter.repo_header(&repo.full_name, &repo.web_url);
        self.lines.push(header);
        self.lines.push(String::new());
        Ok(())
    }

    /// Appends one commit entry. Commits outside the window are skipped and
    /// `Ok(false)` is returned.
    pub fn add_commit(&mut self, commit: &Commit) -> Result<bool> {
        let reference = self.started("add_commit")?;
        if !commit.qualifies(reference) {
            return Ok(false);
        }
        let f = self.formatter;
        let header = f.commit_header(
            commit.short_sha(),
            &commit.web_url,
            commit.committed_at.date_naive(),
        );
        let who = match &commit.identity {
            Identity::Author {
                login,
                profile_url,
                name,
            } => f.commit_author(login, profile_url, name.as_deref()),
            Identity::Committer { name } => f.commit_committer(name),
            Identity::None => f.automatic_commit(),
        };
        self.lines.push(format!("{header} {who}: {}", commit.message));
        self.lines.push(String::new());
        self.lines
            .push(f.commit_stats(commit.stats.additions, commit.stats.deletions));
        self.lines.push(String::new());
        self.commit_count += 1;
        Ok(true)
    }

    /// Returns the finished document. Repeated calls return the same document.
    pub fn finalize(&mut self) -> Result<ReportDocument> {
        let reference_date = match self.stage {
            Stage::New => return Err(self.misuse("finalize called before start")),
            Stage::Started(date) | Stage::Finalized(date) => date,
        };
        self.stage = Stage::Finalized(reference_date);
        Ok(ReportDocument {
            language: self.formatter.language(),
            reference_date,
            file_name: self.formatter.file_name(),
            commit_count: self.commit_count,
            lines: self.lines.clone(),
        })
    }

    fn started(&self, operation: &str) -> Result<NaiveDate> {
        match self.stage {
            Stage::Started(date) => Ok(date),
            Stage::New => Err(self.misuse(&format!("{operation} called before start"))),
            Stage::Finalized(_) => {
                Err(self.misuse(&format!("{operation} called after finalize")))
            }
        }
    }

    fn misuse(&self, what: &str) -> DigestError {
        DigestError::Builder(format!("[{}] {what}", self.formatter.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{English, Italian, Sardinian};
    use crate::model::CommitStats;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    fn commit(days_ago: i64, identity: Identity) -> Commit {
        let noon = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        Commit {
            sha: "a1b2c3d4e5f6".to_string(),
            web_url: "https://github.com/org/repo/commit/a1b2c3d4e5f6".to_string(),
            message: "Fix the *thing*".to_string(),
            committed_at: noon - Duration::days(days_ago),
            stats: CommitStats {
                additions: 3,
                deletions: 1,
            },
            identity,
        }
    }

    fn repo() -> Repository {
        Repository::new("org/repo", "https://github.com/org/repo")
    }

    fn author() -> Identity {
        Identity::Author {
            login: "octo".to_string(),
            profile_url: "https://github.com/octo".to_string(),
            name: Some("Octo Cat".to_string()),
        }
    }

    #[test]
    fn renders_full_english_document() {
        let mut b = ReportBuilder::new(&English);
        b.start(today()).unwrap();
        b.add_repository(&repo()).unwrap();
        assert!(b.add_commit(&commit(30, author())).unwrap());
        let doc = b.finalize().unwrap();

        let expected = "\
---
title: What we did up to 31 March 2024
image: /assets/images/activity-report.png
description: A summary of the work done in our repositories over the last 30 days.
reference: 2024-03-31
---

Here is what we worked on during the last 30 days, repository by repository.

## Work in [org/repo](https://github.com/org/repo)

[a1b2c3](https://github.com/org/repo/commit/a1b2c3d4e5f6) on 1 March 2024 by **[octo](https://github.com/octo)** (Octo Cat): Fix the *thing*

_Stats: 3 lines added, 1 lines removed._

";
        assert_eq!(doc.to_markdown(), expected);
        assert_eq!(doc.commit_count, 1);
    }

    #[test]
    fn committer_and_automatic_clauses() {
        let mut b = ReportBuilder::new(&Italian);
        b.start(today()).unwrap();
        b.add_repository(&repo()).unwrap();
        b.add_commit(&commit(1, Identity::Committer { name: "Anna".into() }))
            .unwrap();
        b.add_commit(&commit(2, Identity::None)).unwrap();
        let doc = b.finalize().unwrap();
        let md = doc.to_markdown();

        assert!(md.contains("il 30 marzo 2024 da **Anna**: Fix the *thing*"));
        assert!(md.contains(
            "il 29 marzo 2024 è stato generato automaticamente: Fix the *thing*"
        ));
        assert_eq!(doc.commit_count, 2);
    }

    #[test]
    fn skips_commits_outside_window() {
        let mut b = ReportBuilder::new(&English);
        b.start(today()).unwrap();
        assert!(!b.add_commit(&commit(31, author())).unwrap());
        assert_eq!(b.commit_count(), 0);
        assert!(!b.finalize().unwrap().to_markdown().contains("a1b2c3"));
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut b = ReportBuilder::new(&Sardinian);
        b.start(today()).unwrap();
        b.add_repository(&repo()).unwrap();
        b.add_commit(&commit(0, author())).unwrap();
        let first = b.finalize().unwrap();
        let second = b.finalize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_out_of_order_calls() {
        let mut b = ReportBuilder::new(&English);
        assert!(matches!(
            b.add_repository(&repo()),
            Err(DigestError::Builder(_))
        ));
        assert!(matches!(
            b.add_commit(&commit(0, author())),
            Err(DigestError::Builder(_))
        ));
        assert!(matches!(b.finalize(), Err(DigestError::Builder(_))));

        b.start(today()).unwrap();
        assert!(matches!(b.start(today()), Err(DigestError::Builder(_))));

        b.finalize().unwrap();
        assert!(matches!(
            b.add_repository(&repo()),
            Err(DigestError::Builder(_))
        ));
        assert!(matches!(
            b.add_commit(&commit(0, author())),
            Err(DigestError::Builder(_))
        ));
    }

    #[test]
    fn custom_image_lands_in_front_matter() {
        let mut b = ReportBuilder::new(&English).with_image("/img/x.png");
        b.start(today()).unwrap();
        let doc = b.finalize().unwrap();
        assert_eq!(doc.lines()[2], "image: /img/x.png");
    }

    #[test]
    fn path_and_commit_message() {
        let mut b = ReportBuilder::new(&Sardinian);
        b.start(today()).unwrap();
        let doc = b.finalize().unwrap();
        assert_eq!(
            doc.path(),
            "sc/_posts/2024-03-31-su-chi-eus-fatu-2024-03-31.md"
        );
        assert_eq!(
            doc.commit_message(),
            "Add activity report for 2024-03-31 (sc)"
        );
    }
}
