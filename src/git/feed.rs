use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::repo::{GitRepo, RawCommit};
use crate::config::{AuthorConfig, RepositoryConfig};
use crate::error::Result;
use crate::model::{Commit, Identity, Repository};
use crate::source::ActivitySource;

/// Reads activity from local clones of the configured repositories.
pub struct LocalGitFeed {
    repositories: Vec<RepositoryConfig>,
    authors: BTreeMap<String, AuthorConfig>,
    since: DateTime<Utc>,
}

impl LocalGitFeed {
    pub fn new(
        repositories: Vec<RepositoryConfig>,
        authors: BTreeMap<String, AuthorConfig>,
        since: DateTime<Utc>,
    ) -> Self {
        Self {
            repositories,
            authors,
            since,
        }
    }

    fn convert(&self, config: &RepositoryConfig, raw: RawCommit) -> Commit {
        let base = config.web_url.trim_end_matches('/');
        Commit {
            web_url: format!("{base}/commit/{}", raw.sha),
            identity: resolve_identity(&raw, &self.authors),
            sha: raw.sha,
            message: raw.message,
            committed_at: raw.committed_at,
            stats: raw.stats,
        }
    }
}

impl ActivitySource for LocalGitFeed {
    fn repositories(&mut self) -> Result<Vec<Repository>> {
        let mut out = Vec::with_capacity(self.repositories.len());
        for config in &self.repositories {
            let repo = GitRepo::open(&config.path)?;
            let raw = repo.collect_commits(self.since)?;
            debug!(
                repo = %config.full_name,
                path = %repo.path().display(),
                commits = raw.len(),
                "collected commits"
            );

            let mut repository = Repository::new(&config.full_name, &config.web_url);
            repository.commits = raw.into_iter().map(|c| self.convert(config, c)).collect();
            out.push(repository);
        }
        info!(repositories = out.len(), "read local clones");
        Ok(out)
    }
}

/// Known author account first, then committer name, else unattributed.
pub fn resolve_identity(raw: &RawCommit, authors: &BTreeMap<String, AuthorConfig>) -> Identity {
    let email = raw.author_email.to_lowercase();
    if let Some(account) = authors
        .iter()
        .find(|(known, _)| known.to_lowercase() == email)
        .map(|(_, account)| account)
    {
        let name = raw.author_name.trim();
        return Identity::Author {
            login: account.login.clone(),
            profile_url: account.profile_url.clone(),
            name: (!name.is_empty()).then(|| name.to_string()),
        };
    }

    let committer = raw.committer_name.trim();
    if committer.is_empty() {
        Identity::None
    } else {
        Identity::Committer {
            name: committer.to_string(),
        }
    }
}
