use thiserror::Error;

pub type Result<T> = std::result::Result<T, DigestError>;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("Invalid formatter for '{code}': {reason}")]
    Formatter { code: String, reason: String },
    #[error("Report builder misuse: {0}")]
    Builder(String),
    #[error("Publish error for {path}: {reason}")]
    Publish { path: String, reason: String },
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
}

// gix errors are large; keep the enum small by boxing them
impl From<gix::open::Error> for DigestError {
    fn from(err: gix::open::Error) -> Self {
        DigestError::Git(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for DigestError {
    fn from(err: gix::object::commit::Error) -> Self {
        DigestError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for DigestError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        DigestError::RefFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for DigestError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        DigestError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for DigestError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        DigestError::HeadPeel(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for DigestError {
    fn from(err: gix::objs::decode::Error) -> Self {
        DigestError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for DigestError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        DigestError::DiffTreeToTree(Box::new(err))
    }
}
