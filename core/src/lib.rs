pub mod change;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

// Re-export commonly used types at crate root
pub use change::{ChangeDetector, Comparison, Drift};
pub use error::{Error, ParseError, Result};
pub use output::StatusReporter;
pub use render::RequirementsRenderer;
pub use types::{Category, DependencyEntry, DependencySource, LockDocument};
