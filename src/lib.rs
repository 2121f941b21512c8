pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod git;
pub mod locale;
pub mod model;
pub mod publish;
pub mod report;
pub mod sink;
pub mod snapshot;
pub mod source;
pub mod util;

pub use coordinator::{PublishCoordinator, RunOutcome};
pub use error::{DigestError, Result};
pub use locale::{Language, LanguageFormatter, LanguageRegistry};
pub use model::{ActivitySnapshot, Commit, CommitStats, Identity, Repository};
pub use report::{ReportBuilder, ReportDocument};
pub use sink::PublishSink;
pub use source::ActivitySource;
