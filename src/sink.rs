use console::style;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{DigestError, Result};

/// Persists a finished document, e.g. by committing it to the site repository.
pub trait PublishSink {
    fn publish(&mut self, path: &str, message: &str, content: &str) -> Result<()>;
}

/// Writes documents below a site checkout.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl PublishSink for DirectorySink {
    fn publish(&mut self, path: &str, message: &str, content: &str) -> Result<()> {
        let target = self.root.join(path);
        let write = || -> std::io::Result<()> {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)
        };
        write().map_err(|e| DigestError::Publish {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %target.display(), commit_message = message, "published");
        Ok(())
    }
}

/// Debug sink: prints each document instead of persisting it.
pub struct StdoutSink<W: Write> {
    out: W,
}

impl StdoutSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PublishSink for StdoutSink<W> {
    fn publish(&mut self, path: &str, message: &str, content: &str) -> Result<()> {
        writeln!(self.out, "{}", style(format!("==> {path}")).bold())?;
        writeln!(self.out, "{}", style(message).dim())?;
        writeln!(self.out)?;
        write!(self.out, "{content}")?;
        writeln!(self.out)?;
        Ok(())
    }
}
