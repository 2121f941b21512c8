use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Length of the trailing window, in days, a commit must fall into to be reported.
pub const WINDOW_DAYS: i64 = 30;

pub const SHORT_SHA_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub web_url: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl Repository {
    pub fn new(full_name: impl Into<String>, web_url: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            web_url: web_url.into(),
            commits: Vec::new(),
        }
    }

    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.push(commit);
        self
    }

    /// Commits inside the window ending at `reference`, in feed order.
    pub fn qualifying_commits(&self, reference: NaiveDate) -> Vec<&Commit> {
        self.commits
            .iter()
            .filter(|c| c.qualifies(reference))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Author {
        login: String,
        profile_url: String,
        #[serde(default)]
        name: Option<String>,
    },
    Committer {
        name: String,
    },
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub web_url: String,
    pub message: String,
    pub committed_at: DateTime<Utc>,
    #[serde(default)]
    pub stats: CommitStats,
    #[serde(default)]
    pub identity: Identity,
}

impl Commit {
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    pub fn age_in_days(&self, reference: NaiveDate) -> i64 {
        (reference - self.committed_at.date_naive()).num_days()
    }

    pub fn qualifies(&self, reference: NaiveDate) -> bool {
        self.age_in_days(reference) <= WINDOW_DAYS
    }
}

/// The activity feed of one run, materialized once and shared by every language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub version: u32,
    pub repositories: Vec<Repository>,
}

impl ActivitySnapshot {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            repositories,
        }
    }

    /// Repositories with at least one qualifying commit, paired with those commits.
    pub fn qualifying(
        &self,
        reference: NaiveDate,
    ) -> impl Iterator<Item = (&Repository, Vec<&Commit>)> {
        self.repositories.iter().filter_map(move |repo| {
            let commits = repo.qualifying_commits(reference);
            if commits.is_empty() {
                None
            } else {
                Some((repo, commits))
            }
        })
    }
}
