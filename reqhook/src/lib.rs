pub mod cli;
pub mod config;
pub mod hook;
pub mod parsers;

pub use cli::Args;
pub use config::{FileConfig, Settings};
pub use hook::{HookOptions, HookReport, RequirementsHook, RequirementsTarget};
pub use parsers::{LockKind, LockParser, PipenvLock, PoetryLock};

// Re-export core types for convenience
pub use requirements_hook_core::{
    Category, ChangeDetector, Comparison, DependencyEntry, DependencySource, Drift, Error,
    LockDocument, ParseError, RequirementsRenderer, StatusReporter,
};
