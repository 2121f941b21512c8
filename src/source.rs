use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::model::{ActivitySnapshot, Repository};

/// Supplies the repositories of one run. A source may be single-pass;
/// [`materialize`] reads it exactly once.
pub trait ActivitySource {
    fn repositories(&mut self) -> Result<Vec<Repository>>;
}

pub fn materialize(source: &mut dyn ActivitySource) -> Result<ActivitySnapshot> {
    let repositories = source.repositories()?;
    let commits: usize = repositories.iter().map(|r| r.commits.len()).sum();
    info!(
        repositories = repositories.len(),
        commits, "materialized activity feed"
    );
    Ok(ActivitySnapshot::new(repositories))
}

/// A snapshot previously serialized with `repodigest snapshot`.
pub struct JsonFeed {
    path: PathBuf,
}

impl JsonFeed {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ActivitySource for JsonFeed {
    fn repositories(&mut self) -> Result<Vec<Repository>> {
        let contents = fs::read_to_string(&self.path)?;
        let snapshot: ActivitySnapshot = serde_json::from_str(&contents)?;
        Ok(snapshot.repositories)
    }
}

impl ActivitySource for Vec<Repository> {
    fn repositories(&mut self) -> Result<Vec<Repository>> {
        Ok(std::mem::take(self))
    }
}
