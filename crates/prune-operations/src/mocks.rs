use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prune_core::{EntryKind, ImportRecord, Lockfile, RelativePath, VendorEntry};
use prune_project::{LOCK_FILE, ProjectConfig, VendorProject};
use walkdir::WalkDir;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{LockfileReader, ProjectProvider, PruneReporter, VendorTree, WalkControl};

fn rel(path: &str) -> RelativePath {
    RelativePath::from_segments(path.split('/'))
}

/// A real traversal error, taken from walking a directory that does not exist.
fn walk_error() -> walkdir::Error {
    let dir = tempfile::tempdir().expect("create temp dir");
    WalkDir::new(dir.path().join("missing"))
        .into_iter()
        .find_map(std::result::Result::err)
        .expect("walking a missing directory fails")
}

pub struct MockProjectProvider {
    project: VendorProject,
    config: ProjectConfig,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        let root = PathBuf::from("/mock/project");
        Self {
            project: VendorProject {
                lockfile: root.join(LOCK_FILE),
                vendor_dir: root.join("vendor"),
                root,
            },
            config: ProjectConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ProjectConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for MockProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<VendorProject> {
        Ok(self.project.clone())
    }

    fn load_config(&self, _project: &VendorProject) -> Result<ProjectConfig> {
        Ok(self.config.clone())
    }
}

pub struct MockLockfileReader {
    lockfile: Option<Lockfile>,
}

impl MockLockfileReader {
    #[must_use]
    pub fn new(imports: Vec<ImportRecord>) -> Self {
        Self {
            lockfile: Some(Lockfile {
                imports,
                dev_imports: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn with_dev_imports(mut self, dev_imports: Vec<ImportRecord>) -> Self {
        if let Some(lockfile) = &mut self.lockfile {
            lockfile.dev_imports = dev_imports;
        }
        self
    }

    #[must_use]
    pub fn missing() -> Self {
        Self { lockfile: None }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile> {
        self.lockfile
            .clone()
            .ok_or_else(|| OperationError::LockfileRead {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// An in-memory vendor tree. Keys sort segment-wise, which is walk order.
#[derive(Default)]
pub struct MockVendorTree {
    entries: Mutex<BTreeMap<RelativePath, EntryKind>>,
    removed: Mutex<Vec<String>>,
    fail_on_remove: HashSet<String>,
    fail_on_walk: HashSet<String>,
}

impl MockVendorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and every missing parent directory.
    ///
    /// # Panics
    ///
    /// Panics if the entries lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: &str) -> Self {
        let file = rel(path);
        {
            let mut entries = self.entries.lock().expect("entries lock");
            for ancestor in file.ancestors() {
                entries.insert(RelativePath::from(ancestor), EntryKind::Directory);
            }
            entries.insert(file, EntryKind::File);
        }
        self
    }

    #[must_use]
    pub fn with_files(self, paths: &[&str]) -> Self {
        paths.iter().fold(self, |tree, path| tree.with_file(path))
    }

    #[must_use]
    pub fn failing_on_remove(mut self, path: &str) -> Self {
        self.fail_on_remove.insert(path.to_string());
        self
    }

    /// Makes the walk fail when it reaches `path`, after visiting earlier entries.
    #[must_use]
    pub fn failing_on_walk(mut self, path: &str) -> Self {
        self.fail_on_walk.insert(path.to_string());
        self
    }

    /// Remaining entries as slash-joined paths, in walk order.
    ///
    /// # Panics
    ///
    /// Panics if the entries lock is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.entries
            .lock()
            .expect("entries lock")
            .keys()
            .map(|path| path.segments().join("/"))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the removed lock is poisoned.
    #[must_use]
    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().expect("removed lock").clone()
    }
}

impl VendorTree for MockVendorTree {
    fn walk(
        &self,
        root: &Path,
        visitor: &mut dyn FnMut(&VendorEntry) -> WalkControl,
    ) -> Result<()> {
        let snapshot: Vec<(RelativePath, EntryKind)> = self
            .entries
            .lock()
            .expect("entries lock")
            .iter()
            .map(|(path, kind)| (path.clone(), *kind))
            .collect();

        let mut skipped: Option<RelativePath> = None;
        for (relative, kind) in snapshot {
            if skipped.as_ref().is_some_and(|dir| relative.starts_with(dir)) {
                continue;
            }
            let path = root.join(relative.to_path_buf());
            if self.fail_on_walk.contains(&relative.segments().join("/")) {
                return Err(OperationError::Walk {
                    path,
                    source: walk_error(),
                });
            }
            let entry = VendorEntry::new(path, relative, kind);
            if visitor(&entry) == WalkControl::SkipChildren && entry.is_dir() {
                skipped = Some(entry.relative.clone());
            }
        }
        Ok(())
    }

    fn remove(&self, entry: &VendorEntry) -> Result<()> {
        let key = entry.relative.segments().join("/");
        if self.fail_on_remove.contains(&key) {
            return Err(OperationError::Remove {
                path: entry.path().to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }

        let mut entries = self.entries.lock().expect("entries lock");
        if entries.remove(&entry.relative).is_none() {
            return Err(OperationError::Remove {
                path: entry.path().to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        entries.retain(|path, _| !path.starts_with(&entry.relative));
        self.removed.lock().expect("removed lock").push(key);
        Ok(())
    }
}

/// Collects report lines instead of printing them.
#[derive(Default)]
pub struct MockReporter {
    lines: Mutex<Vec<String>>,
}

impl MockReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the lines lock is poisoned.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lines lock").clone()
    }
}

impl PruneReporter for MockReporter {
    fn removing(&self, entry: &VendorEntry) {
        self.lines.lock().expect("lines lock").push(format!(
            "{} {}",
            entry.kind,
            entry.relative.segments().join("/")
        ));
    }
}
