use super::LockParser;
use requirements_hook_core::{
    Category, DependencyEntry, DependencySource, Error, LockDocument, ParseError, Result,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Parser for Pipfile.lock files
pub struct PipenvLock {
    lock_file: PathBuf,
}

/// Metadata of one package under a Pipfile.lock category
#[derive(Debug, Deserialize)]
struct PipenvPackage {
    version: Option<String>,
    markers: Option<String>,
    git: Option<String>,
    #[serde(rename = "ref")]
    reference: Option<String>,
    file: Option<String>,
}

impl PipenvLock {
    pub fn new(lock_file: impl Into<PathBuf>) -> Self {
        Self {
            lock_file: lock_file.into(),
        }
    }

    /// Classify a package by the first of `version`, `git`, `file` it declares
    fn parse_package(name: &str, metadata: &Value, category: &Category) -> Result<DependencyEntry> {
        let unrecognized = || ParseError::UnrecognizedPackage {
            package: name.to_string(),
            metadata: metadata.to_string(),
        };

        let package = PipenvPackage::deserialize(metadata).map_err(|_| unrecognized())?;

        let source = if let Some(version) = package.version {
            DependencySource::Pinned {
                version,
                markers: package.markers,
            }
        } else if let Some(url) = package.git {
            let reference = package.reference.ok_or_else(|| ParseError::MissingRef {
                package: name.to_string(),
            })?;
            DependencySource::Vcs { url, reference }
        } else if let Some(path) = package.file {
            DependencySource::LocalFile { path }
        } else {
            return Err(unrecognized().into());
        };

        Ok(DependencyEntry {
            name: name.to_string(),
            category: category.clone(),
            source,
        })
    }
}

impl LockParser for PipenvLock {
    fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    fn parse_str(&self, content: &str, categories: &[Category]) -> Result<LockDocument> {
        let document: Map<String, Value> =
            serde_json::from_str(content).map_err(|source| Error::Json {
                path: self.lock_file.clone(),
                source,
            })?;

        let mut entries = Vec::new();

        // Category names are used as-is; Pipfile.lock has no aliases
        for category in categories {
            let Some(packages) = document.get(category.as_str()) else {
                continue;
            };
            let packages = packages
                .as_object()
                .ok_or_else(|| ParseError::InvalidCategory {
                    category: category.to_string(),
                })?;

            for (name, metadata) in packages {
                entries.push(Self::parse_package(name, metadata, category)?);
            }
        }

        Ok(LockDocument::new(entries))
    }
}
