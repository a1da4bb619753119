use std::fmt;

/// Canonical category names paired with the aliases that map onto them.
///
/// Lookups go through this table only; any name not listed passes through unchanged.
const CATEGORY_ALIASES: &[(&str, &str)] = &[("default", "main"), ("develop", "dev")];

/// A tag partitioning dependencies by purpose (runtime, development, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Translate an alias (`default`, `develop`) to the canonical name (`main`, `dev`)
    pub fn canonical(&self) -> Category {
        CATEGORY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == self.0)
            .map(|(_, canonical)| Category::new(*canonical))
            .unwrap_or_else(|| self.clone())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Where a locked dependency is installed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySource {
    /// Index package pinned by a pip version specifier, operator included (`==1.2.3`)
    Pinned {
        version: String,
        markers: Option<String>,
    },
    /// Checkout of a version-control repository at a ref
    Vcs { url: String, reference: String },
    /// Local archive or directory
    LocalFile { path: String },
}

/// One locked dependency, normalized across lock-file ecosystems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Package name as written in the lock file
    pub name: String,
    /// Category the lock file filed this dependency under
    pub category: Category,
    pub source: DependencySource,
}

impl DependencyEntry {
    /// A package pinned to an exact version (`name==version`)
    pub fn pinned(
        name: impl Into<String>,
        version: impl fmt::Display,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            source: DependencySource::Pinned {
                version: format!("=={version}"),
                markers: None,
            },
        }
    }

    /// The pinned version specifier, if this entry comes from a package index
    pub fn version(&self) -> Option<&str> {
        match &self.source {
            DependencySource::Pinned { version, .. } => Some(version),
            _ => None,
        }
    }
}

/// Dependencies read from one lock file, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockDocument {
    pub entries: Vec<DependencyEntry>,
}

impl LockDocument {
    pub fn new(entries: Vec<DependencyEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DependencyEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a LockDocument {
    type Item = &'a DependencyEntry;
    type IntoIter = std::slice::Iter<'a, DependencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
