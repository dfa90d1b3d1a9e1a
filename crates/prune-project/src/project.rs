use std::path::{Path, PathBuf};

use prune_core::VENDOR_DIR;

use crate::error::ProjectError;
use crate::{LOCK_FILE, MANIFEST_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorProject {
    pub root: PathBuf,
    pub lockfile: PathBuf,
    pub vendor_dir: PathBuf,
}

/// Locates the project containing `start_dir` and its vendor directory.
///
/// The project root is the nearest ancestor (or `start_dir` itself) holding the
/// project manifest. A symlinked vendor directory is resolved to its target.
///
/// # Errors
///
/// Returns `ProjectError` if the start directory cannot be resolved, no manifest is
/// found, or the vendor directory is missing.
pub fn discover_project(start_dir: &Path) -> Result<VendorProject, ProjectError> {
    let start_dir = dunce::canonicalize(start_dir).map_err(|source| ProjectError::StartDir {
        path: start_dir.to_path_buf(),
        source,
    })?;

    let root = find_project_root(&start_dir)?;
    let vendor_dir = resolve_vendor_dir(&root)?;

    Ok(VendorProject {
        lockfile: root.join(LOCK_FILE),
        vendor_dir,
        root,
    })
}

fn find_project_root(start_dir: &Path) -> Result<PathBuf, ProjectError> {
    let mut current = start_dir;

    loop {
        if current.join(MANIFEST_FILE).is_file() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(ProjectError::NotFound {
                    start_dir: start_dir.to_path_buf(),
                    manifest: MANIFEST_FILE,
                });
            }
        }
    }
}

fn resolve_vendor_dir(root: &Path) -> Result<PathBuf, ProjectError> {
    let candidate = root.join(VENDOR_DIR);
    let resolved = dunce::canonicalize(&candidate).map_err(|source| {
        ProjectError::VendorNotFound {
            path: candidate.clone(),
            source,
        }
    })?;

    if !resolved.is_dir() {
        return Err(ProjectError::VendorNotADirectory { path: candidate });
    }

    Ok(resolved)
}
