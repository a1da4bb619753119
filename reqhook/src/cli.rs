use crate::hook;
use clap::Parser;
use requirements_hook_core::Comparison;
use std::path::PathBuf;

/// Generate the requirement files for Poetry or Pipenv lock files
#[derive(Parser, Debug, Clone)]
#[command(name = "reqhook")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Lock file to convert (poetry.lock or Pipfile.lock)
    #[arg(value_name = "LOCK_FILE")]
    pub lock_file: PathBuf,

    /// Also generate requirements-dev.txt (default + develop categories)
    #[arg(short, long)]
    pub dev: bool,

    /// How to compare with existing files: hash or lines
    #[arg(long, value_name = "METHOD")]
    pub compare: Option<Comparison>,

    /// Show a diff for each file that needs an update
    #[arg(long)]
    pub diff: bool,

    /// Report outdated files without writing them
    #[arg(long)]
    pub check: bool,

    /// Tolerate malformed section headers in poetry.lock
    #[arg(long)]
    pub lenient_headers: bool,

    /// Do not print status lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Directory holding the lock file; requirements files are written here
    pub fn lock_dir(&self) -> PathBuf {
        hook::lock_dir(&self.lock_file)
    }
}
