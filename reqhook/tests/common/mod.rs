#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let file_path = self.dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Get the absolute path to a file in the project
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Read a file from the project
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file_path(relative_path)).expect("Failed to read file")
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipfile.lock with 3 default and 2 develop packages
pub fn sample_pipfile_lock() -> &'static str {
    r#"{
    "_meta": {
        "hash": {"sha256": "0f1e2d"},
        "pipfile-spec": 6,
        "requires": {"python_version": "3.11"},
        "sources": [{"name": "pypi", "url": "https://pypi.org/simple", "verify_ssl": true}]
    },
    "default": {
        "certifi": {"hashes": ["sha256:aaa"], "index": "pypi", "version": "==2023.7.22"},
        "idna": {"hashes": ["sha256:bbb"], "index": "pypi", "version": "==3.4"},
        "requests": {"hashes": ["sha256:ccc"], "index": "pypi", "version": "==2.31.0"}
    },
    "develop": {
        "iniconfig": {"hashes": ["sha256:ddd"], "version": "==2.0.0"},
        "pytest": {"hashes": ["sha256:eee"], "index": "pypi", "version": "==7.4.0"}
    }
}
"#
}

/// poetry.lock with main and dev packages
pub fn sample_poetry_lock() -> &'static str {
    r#"[[package]]
name = "click"
version = "8.1.7"
description = "Composable command line interface toolkit"
category = "main"
optional = false
python-versions = ">=3.7"

[package.dependencies]
colorama = {version = "*", markers = "platform_system == \"Windows\""}

[[package]]
name = "black"
version = "23.7.0"
description = "The uncompromising code formatter."
category = "dev"
optional = false
python-versions = ">=3.8"

[[package]]
name = "flask"
version = "2.3.3"
description = "A simple framework for building complex web applications."
category = "main"
optional = false
python-versions = ">=3.8"

[metadata]
lock-version = "1.1"
python-versions = "^3.9"
content-hash = "5d41402abc4b2a76b9719d911017c592"
"#
}

/// Project containing a Pipfile.lock
pub fn create_temp_project_with_pipenv() -> TempProject {
    let project = TempProject::new();
    project.create_file("Pipfile.lock", sample_pipfile_lock());
    project
}

/// Project containing a poetry.lock
pub fn create_temp_project_with_poetry() -> TempProject {
    let project = TempProject::new();
    project.create_file("poetry.lock", sample_poetry_lock());
    project
}
