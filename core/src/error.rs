use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A lock-file entry that cannot be turned into a requirement line
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Package section at line {line} is missing required field '{field}'")]
    MissingField { field: &'static str, line: usize },

    #[error("Cannot parse package '{package}', entry = {metadata}")]
    UnrecognizedPackage { package: String, metadata: String },

    #[error("Git package '{package}' has no 'ref'")]
    MissingRef { package: String },

    #[error("Category '{category}' is not a package table")]
    InvalidCategory { category: String },

    #[error("Malformed section header at line {line}: {header}")]
    MalformedHeader { line: usize, header: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Input file '{name}' not supported yet. Only Pipfile.lock and poetry.lock are supported."
    )]
    UnsupportedLockFile { name: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
