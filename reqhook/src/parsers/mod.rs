pub mod pipenv;
pub mod poetry;

pub use pipenv::PipenvLock;
pub use poetry::PoetryLock;

use requirements_hook_core::{Category, Error, LockDocument, Result};
use std::fs;
use std::path::Path;

/// Trait for lock-file parsers
pub trait LockParser {
    /// Path of the lock file this parser reads
    fn lock_file(&self) -> &Path;

    /// Parse lock-file text, keeping only entries in the requested categories
    fn parse_str(&self, content: &str, categories: &[Category]) -> Result<LockDocument>;

    /// Read the lock file and parse it
    fn parse(&self, categories: &[Category]) -> Result<LockDocument> {
        let path = self.lock_file();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.parse_str(&content, categories)
    }
}

/// Supported lock-file ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockKind {
    Poetry,
    Pipenv,
}

impl LockKind {
    /// Select the ecosystem from the lock file's base name
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match name.as_str() {
            "Pipfile.lock" => Ok(LockKind::Pipenv),
            "poetry.lock" => Ok(LockKind::Poetry),
            _ => Err(Error::UnsupportedLockFile { name }),
        }
    }

    /// Build the parser for this ecosystem
    pub fn parser(self, lock_file: &Path, lenient_headers: bool) -> Box<dyn LockParser> {
        match self {
            LockKind::Poetry => {
                Box::new(PoetryLock::new(lock_file).with_lenient_headers(lenient_headers))
            }
            LockKind::Pipenv => Box::new(PipenvLock::new(lock_file)),
        }
    }
}
