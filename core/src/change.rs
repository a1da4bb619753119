use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use similar::{ChangeTag, TextDiff};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How rendered content is compared against the file on disk
///
/// Both strategies are exact: whitespace and line terminators count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// SHA-256 of the existing bytes against SHA-256 of the new content
    #[default]
    Hash,
    /// Line-level diff; identical when no line is inserted or deleted
    Lines,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Hash => write!(f, "hash"),
            Comparison::Lines => write!(f, "lines"),
        }
    }
}

impl FromStr for Comparison {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hash" => Ok(Comparison::Hash),
            "lines" => Ok(Comparison::Lines),
            other => Err(format!(
                "unknown comparison '{other}' (expected 'hash' or 'lines')"
            )),
        }
    }
}

/// Newly rendered content for one target file, checked against what is on disk
#[derive(Debug, Clone)]
pub struct Drift {
    pub path: PathBuf,
    /// Current file content, `None` when the file does not exist yet
    pub previous: Option<Vec<u8>>,
    pub content: String,
    pub needs_update: bool,
}

impl Drift {
    /// Unified diff from the current file to the new content
    pub fn unified_diff(&self) -> String {
        let previous = self
            .previous
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        let name = self.path.display().to_string();

        let diff = TextDiff::from_lines(&*previous, self.content.as_str());
        diff.unified_diff()
            .context_radius(3)
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .to_string()
    }
}

/// Decides whether a requirements file is stale and rewrites it when it is
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeDetector {
    comparison: Comparison,
}

impl ChangeDetector {
    pub fn new(comparison: Comparison) -> Self {
        Self { comparison }
    }

    /// Compare `content` with the file at `path` without touching it
    pub fn check(&self, path: &Path, content: String) -> Result<Drift> {
        let previous = match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(Error::io(path, e)),
        };

        let needs_update = match &previous {
            None => true,
            Some(existing) => self.differs(existing, &content),
        };

        Ok(Drift {
            path: path.to_path_buf(),
            previous,
            content,
            needs_update,
        })
    }

    /// Overwrite the target with the new content if it drifted.
    ///
    /// Returns whether the file was written.
    pub fn apply(&self, drift: &Drift) -> Result<bool> {
        if !drift.needs_update {
            return Ok(false);
        }

        fs::write(&drift.path, &drift.content).map_err(|e| Error::io(&drift.path, e))?;
        Ok(true)
    }

    /// Check and apply in one step
    pub fn write_if_changed(&self, path: &Path, content: String) -> Result<bool> {
        let drift = self.check(path, content)?;
        self.apply(&drift)
    }

    fn differs(&self, existing: &[u8], content: &str) -> bool {
        match self.comparison {
            Comparison::Hash => Sha256::digest(existing) != Sha256::digest(content.as_bytes()),
            Comparison::Lines => {
                let diff = TextDiff::from_lines(existing, content.as_bytes());
                diff.iter_all_changes()
                    .any(|change| change.tag() != ChangeTag::Equal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BOTH: [Comparison; 2] = [Comparison::Hash, Comparison::Lines];

    #[test]
    fn test_missing_file_needs_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");

        for comparison in BOTH {
            let drift = ChangeDetector::new(comparison)
                .check(&path, "requests==2.31.0\n".to_string())
                .unwrap();
            assert!(drift.needs_update);
            assert!(drift.previous.is_none());
        }
    }

    #[test]
    fn test_missing_empty_content_still_needs_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");

        let detector = ChangeDetector::default();
        assert!(detector.write_if_changed(&path, String::new()).unwrap());
        assert!(path.exists());
        assert!(!detector.write_if_changed(&path, String::new()).unwrap());
    }

    #[test]
    fn test_identical_content_is_current() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.31.0\nflask==2.3.0\n").unwrap();

        for comparison in BOTH {
            let drift = ChangeDetector::new(comparison)
                .check(&path, "requests==2.31.0\nflask==2.3.0\n".to_string())
                .unwrap();
            assert!(!drift.needs_update, "{comparison} reported drift");
        }
    }

    #[test]
    fn test_single_changed_line_needs_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.31.0\nflask==2.3.0\n").unwrap();

        for comparison in BOTH {
            let drift = ChangeDetector::new(comparison)
                .check(&path, "requests==2.31.0\nflask==2.3.1\n".to_string())
                .unwrap();
            assert!(drift.needs_update, "{comparison} missed a changed line");
        }
    }

    #[test]
    fn test_whitespace_differences_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.31.0\n").unwrap();

        for comparison in BOTH {
            let detector = ChangeDetector::new(comparison);
            assert!(
                detector
                    .check(&path, "requests==2.31.0 \n".to_string())
                    .unwrap()
                    .needs_update
            );
            assert!(
                detector
                    .check(&path, "requests==2.31.0".to_string())
                    .unwrap()
                    .needs_update
            );
        }
    }

    #[test]
    fn test_invalid_utf8_is_compared_as_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, b"a\xff\n").unwrap();

        for comparison in BOTH {
            let drift = ChangeDetector::new(comparison)
                .check(&path, "a\u{FFFD}\n".to_string())
                .unwrap();
            assert!(drift.needs_update, "{comparison} decoded the file lossily");
        }
    }

    #[test]
    fn test_apply_overwrites_entire_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "old==1.0\nstale==2.0\nextra==3.0\n").unwrap();

        let detector = ChangeDetector::new(Comparison::Lines);
        let written = detector
            .write_if_changed(&path, "requests==2.31.0\n".to_string())
            .unwrap();

        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "requests==2.31.0\n");
    }

    #[test]
    fn test_apply_skips_current_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.31.0\n").unwrap();

        let detector = ChangeDetector::default();
        let drift = detector
            .check(&path, "requests==2.31.0\n".to_string())
            .unwrap();
        assert!(!detector.apply(&drift).unwrap());
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("requirements.txt");

        let err = ChangeDetector::default()
            .write_if_changed(&path, "requests==2.31.0\n".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_unified_diff_shows_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.30.0\n").unwrap();

        let drift = ChangeDetector::default()
            .check(&path, "requests==2.31.0\n".to_string())
            .unwrap();
        let diff = drift.unified_diff();

        assert!(diff.contains("-requests==2.30.0"));
        assert!(diff.contains("+requests==2.31.0"));
    }

    #[test]
    fn test_comparison_from_str() {
        assert_eq!("hash".parse::<Comparison>().unwrap(), Comparison::Hash);
        assert_eq!("lines".parse::<Comparison>().unwrap(), Comparison::Lines);
        assert!("md5".parse::<Comparison>().is_err());
    }
}
