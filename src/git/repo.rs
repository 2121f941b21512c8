use crate::error::{DigestError, Result};
use crate::model::CommitStats;
use chrono::{DateTime, Utc};
use gix::object::tree::diff::ChangeDetached;
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use similar::{ChangeTag, TextDiff};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// A commit as read from a local clone, before identities are resolved.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub sha: String,
    pub message: String,
    pub committed_at: DateTime<Utc>,
    pub author_name: String,
    pub author_email: String,
    pub committer_name: String,
    pub stats: CommitStats,
}

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks history from HEAD, newest first. Parents of commits older than
    /// `since` are not visited.
    pub fn collect_commits(&self, since: DateTime<Utc>) -> Result<Vec<RawCommit>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut queue: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}", self.path.display()));

        while let Some(commit_id) = queue.pop_front() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let committed_at = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| DigestError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();

            let author = commit.author()?;
            let committer = commit.committer()?;
            let stats = match parents.first() {
                Some(parent_id) => self.diff_stats(commit_id, Some(*parent_id))?,
                None => self.diff_stats(commit_id, None)?,
            };

            commits.push(RawCommit {
                sha: commit_id.to_string(),
                message: commit.message_raw()?.to_string().trim_end().to_string(),
                committed_at,
                author_name: author.name.to_string(),
                author_email: author.email.to_string(),
                committer_name: committer.name.to_string(),
                stats,
            });

            if committed_at >= since {
                queue.extend(parents);
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        commits.sort_by(|a, b| b.committed_at.cmp(&a.committed_at));
        Ok(commits)
    }

    fn diff_stats(&self, commit_id: ObjectId, parent_id: Option<ObjectId>) -> Result<CommitStats> {
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;
        let parent_tree = match parent_id {
            Some(id) => Some(self.repo.find_commit(id)?.tree()?),
            None => None,
        };

        let changes: Vec<ChangeDetached> =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)?;

        let mut stats = CommitStats::default();
        for change in changes {
            let (old, new) = match change {
                ChangeDetached::Addition { id, .. } => (None, Some(id)),
                ChangeDetached::Deletion { id, .. } => (Some(id), None),
                ChangeDetached::Modification {
                    previous_id, id, ..
                } => (Some(previous_id), Some(id)),
                ChangeDetached::Rewrite { source_id, id, copy, .. } => {
                    (if copy { None } else { Some(source_id) }, Some(id))
                }
            };
            let old_text = self.blob_text(old);
            let new_text = self.blob_text(new);
            let (added, deleted) = line_changes(&old_text, &new_text);
            stats.additions += added;
            stats.deletions += deleted;
        }
        Ok(stats)
    }

    // Trees, submodules and binary blobs count as empty.
    fn blob_text(&self, id: Option<ObjectId>) -> String {
        let Some(id) = id else {
            return String::new();
        };
        match self.repo.find_object(id) {
            Ok(obj) if obj.kind == gix::object::Kind::Blob && !is_binary(&obj.data) => {
                String::from_utf8_lossy(&obj.data).into_owned()
            }
            _ => String::new(),
        }
    }
}

fn is_binary(data: &[u8]) -> bool {
    data.iter().take(8192).any(|&b| b == 0)
}

pub fn line_changes(old: &str, new: &str) -> (u64, u64) {
    let diff = TextDiff::from_lines(old, new);
    let mut added = 0u64;
    let mut deleted = 0u64;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => deleted += 1,
            ChangeTag::Equal => {}
        }
    }
    (added, deleted)
}
