use crate::cli::Args;
use crate::hook::HookOptions;
use requirements_hook_core::{Comparison, Error, Result};
use serde::Deserialize;
use std::fs;
use std::io::{ErrorKind, IsTerminal};
use std::path::Path;

/// `[tool.requirements-hook]` in a pyproject.toml next to the lock file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub dev: Option<bool>,
    pub compare: Option<Comparison>,
    pub lenient_headers: Option<bool>,
    pub diff: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(rename = "requirements-hook")]
    requirements_hook: Option<FileConfig>,
}

impl FileConfig {
    /// Read the hook table from `pyproject`; a missing file or table yields defaults
    pub fn load(pyproject: &Path) -> Result<Self> {
        let content = match fs::read_to_string(pyproject) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::io(pyproject, e)),
        };

        Self::from_toml(&content).map_err(|message| Error::Config {
            path: pyproject.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let pyproject: PyProject = toml::from_str(content).map_err(|e| e.to_string())?;
        Ok(pyproject.tool.requirements_hook.unwrap_or_default())
    }
}

/// Effective settings after merging pyproject.toml with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dev: bool,
    pub comparison: Comparison,
    pub lenient_headers: bool,
    pub diff: bool,
    pub check: bool,
    pub quiet: bool,
    pub show_colors: bool,
}

impl Settings {
    /// Load pyproject.toml beside the lock file and apply command-line overrides
    pub fn load(args: &Args) -> Result<Self> {
        let pyproject = args.lock_dir().join("pyproject.toml");
        let file = FileConfig::load(&pyproject)?;
        Ok(Self::merge(args, &file))
    }

    /// Flags switch options on; `--compare` replaces the file's method
    pub fn merge(args: &Args, file: &FileConfig) -> Self {
        Self {
            dev: args.dev || file.dev.unwrap_or(false),
            comparison: args.compare.or(file.compare).unwrap_or_default(),
            lenient_headers: args.lenient_headers || file.lenient_headers.unwrap_or(false),
            diff: args.diff || file.diff.unwrap_or(false),
            check: args.check,
            quiet: args.quiet,
            show_colors: !args.no_color && std::io::stdout().is_terminal(),
        }
    }

    pub fn hook_options(&self) -> HookOptions {
        HookOptions {
            dev: self.dev,
            comparison: self.comparison,
            lenient_headers: self.lenient_headers,
            check_only: self.check,
        }
    }
}
