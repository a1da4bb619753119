use crate::types::{DependencyEntry, DependencySource, LockDocument};

/// Serializes locked dependencies into pip's requirements-file format
pub struct RequirementsRenderer;

impl RequirementsRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a whole document, one requirement per line
    pub fn render(&self, document: &LockDocument) -> String {
        let mut content = String::new();
        for entry in document {
            content.push_str(&self.render_entry(entry));
            content.push('\n');
        }
        content
    }

    /// Render a single requirement line (without the trailing newline)
    pub fn render_entry(&self, entry: &DependencyEntry) -> String {
        let name = &entry.name;
        match &entry.source {
            DependencySource::Pinned {
                version,
                markers: Some(markers),
            } => format!("{name}{version}; {markers}"),
            DependencySource::Pinned {
                version,
                markers: None,
            } => format!("{name}{version}"),
            DependencySource::Vcs { url, reference } => {
                format!("-e git+{url}@{reference}#egg={name}")
            }
            DependencySource::LocalFile { path } => format!("{path} @ {name}"),
        }
    }
}

impl Default for RequirementsRenderer {
    fn default() -> Self {
        Self::new()
    }
}
