use crate::parsers::LockKind;
use requirements_hook_core::{
    Category, ChangeDetector, Comparison, Drift, RequirementsRenderer, Result,
};
use std::path::{Path, PathBuf};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const REQUIREMENTS_DEV_FILE: &str = "requirements-dev.txt";

/// Directory holding the lock file; pyproject.toml is read and requirements
/// files are written here
pub fn lock_dir(lock_file: &Path) -> PathBuf {
    lock_file.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOptions {
    /// Also manage requirements-dev.txt
    pub dev: bool,
    pub comparison: Comparison,
    pub lenient_headers: bool,
    /// Detect drift but never write
    pub check_only: bool,
}

/// A requirements file and the lock-file categories it is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsTarget {
    pub path: PathBuf,
    pub categories: Vec<Category>,
}

/// Outcome of one run: one drift per managed requirements file
#[derive(Debug, Clone)]
pub struct HookReport {
    pub drifts: Vec<Drift>,
}

impl HookReport {
    /// Number of files that needed an update
    pub fn outdated_count(&self) -> usize {
        self.drifts.iter().filter(|d| d.needs_update).count()
    }

    /// Process exit status: 0 when everything was current, else one per outdated file
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.outdated_count()).unwrap_or(i32::MAX)
    }
}

/// Keeps requirements files next to a lock file in sync with it
pub struct RequirementsHook {
    lock_file: PathBuf,
    kind: LockKind,
    options: HookOptions,
}

impl RequirementsHook {
    pub fn new(lock_file: impl Into<PathBuf>, kind: LockKind, options: HookOptions) -> Self {
        Self {
            lock_file: lock_file.into(),
            kind,
            options,
        }
    }

    /// Build a hook, picking the lock kind from the file name
    pub fn for_lock_file(lock_file: impl Into<PathBuf>, options: HookOptions) -> Result<Self> {
        let lock_file = lock_file.into();
        let kind = LockKind::from_path(&lock_file)?;
        Ok(Self::new(lock_file, kind, options))
    }

    /// requirements.txt gets `default`; requirements-dev.txt gets `default` + `develop`
    pub fn targets(&self) -> Vec<RequirementsTarget> {
        let dir = lock_dir(&self.lock_file);

        let mut targets = vec![RequirementsTarget {
            path: dir.join(REQUIREMENTS_FILE),
            categories: vec![Category::from("default")],
        }];

        if self.options.dev {
            targets.push(RequirementsTarget {
                path: dir.join(REQUIREMENTS_DEV_FILE),
                categories: vec![Category::from("default"), Category::from("develop")],
            });
        }

        targets
    }

    /// Render every target and compare it with disk, writing nothing
    pub fn plan(&self) -> Result<Vec<Drift>> {
        let parser = self.kind.parser(&self.lock_file, self.options.lenient_headers);
        let renderer = RequirementsRenderer::new();
        let detector = ChangeDetector::new(self.options.comparison);

        self.targets()
            .into_iter()
            .map(|target| {
                let document = parser.parse(&target.categories)?;
                detector.check(&target.path, renderer.render(&document))
            })
            .collect()
    }

    /// Plan, then rewrite drifted files unless running in check-only mode.
    ///
    /// All targets are rendered before anything is written, so a parse error
    /// leaves every requirements file untouched.
    pub fn run(&self) -> Result<HookReport> {
        let drifts = self.plan()?;

        if self.options.check_only {
            return Ok(HookReport { drifts });
        }

        let detector = ChangeDetector::new(self.options.comparison);
        for drift in &drifts {
            detector.apply(drift)?;
        }

        Ok(HookReport { drifts })
    }
}
