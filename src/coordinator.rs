use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::Result;
use crate::locale::{Language, LanguageFormatter, LanguageRegistry};
use crate::model::ActivitySnapshot;
use crate::report::{ReportBuilder, ReportDocument, DEFAULT_IMAGE};
use crate::sink::PublishSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub documents: Vec<ReportDocument>,
    pub total_commits: usize,
    pub published: bool,
}

impl RunOutcome {
    pub fn commit_count(&self, language: Language) -> Option<usize> {
        self.documents
            .iter()
            .find(|d| d.language == language)
            .map(|d| d.commit_count)
    }
}

/// Renders every registered language from one snapshot and publishes them
/// all, or none when no commit qualified in any language.
pub struct PublishCoordinator<'a> {
    registry: &'a LanguageRegistry,
    image: String,
}

impl<'a> PublishCoordinator<'a> {
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn render_language(
        &self,
        formatter: &dyn LanguageFormatter,
        snapshot: &ActivitySnapshot,
        reference_date: NaiveDate,
    ) -> Result<ReportDocument> {
        let mut builder = ReportBuilder::new(formatter).with_image(self.image.clone());
        builder.start(reference_date)?;
        for (repo, commits) in snapshot.qualifying(reference_date) {
            builder.add_repository(repo)?;
            for commit in commits {
                builder.add_commit(commit)?;
            }
        }
        let document = builder.finalize()?;
        debug!(
            language = formatter.code(),
            commits = document.commit_count,
            "rendered report"
        );
        Ok(document)
    }

    pub fn render(
        &self,
        snapshot: &ActivitySnapshot,
        reference_date: NaiveDate,
    ) -> Result<Vec<ReportDocument>> {
        self.registry
            .iter()
            .map(|f| self.render_language(f, snapshot, reference_date))
            .collect()
    }

    pub fn run(
        &self,
        snapshot: &ActivitySnapshot,
        reference_date: NaiveDate,
        sink: &mut dyn PublishSink,
    ) -> Result<RunOutcome> {
        let documents = self.render(snapshot, reference_date)?;
        let total_commits: usize = documents.iter().map(|d| d.commit_count).sum();

        if total_commits == 0 {
            info!(%reference_date, "no qualifying commits, nothing to publish");
            return Ok(RunOutcome {
                documents,
                total_commits,
                published: false,
            });
        }

        for document in &documents {
            sink.publish(&document.path(), &document.commit_message(), &document.to_markdown())?;
        }
        info!(
            %reference_date,
            languages = documents.len(),
            total_commits,
            "published reports"
        );
        Ok(RunOutcome {
            documents,
            total_commits,
            published: true,
        })
    }
}
