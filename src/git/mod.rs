pub mod feed;
pub mod repo;

pub use feed::LocalGitFeed;
pub use repo::{GitRepo, RawCommit};
