use std::fs;
use std::io;
use std::path::Path;

use prune_core::{EntryKind, RelativePath, VendorEntry};
use tracing::trace;
use walkdir::WalkDir;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{VendorTree, WalkControl};

/// Walks and removes entries on the local filesystem.
///
/// Symbolic links are never followed; a link is reported and removed as a file.
pub struct FileSystemVendorTree;

impl FileSystemVendorTree {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemVendorTree {
    fn default() -> Self {
        Self::new()
    }
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn relative_to(root: &Path, path: &Path) -> Result<RelativePath> {
    let outside = || OperationError::OutsideVendorRoot {
        path: path.to_path_buf(),
    };
    let relative = path.strip_prefix(root).map_err(|_| outside())?;
    RelativePath::from_path(relative).map_err(|_| outside())
}

impl VendorTree for FileSystemVendorTree {
    fn walk(
        &self,
        root: &Path,
        visitor: &mut dyn FnMut(&VendorEntry) -> WalkControl,
    ) -> Result<()> {
        let mut entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = entries.next() {
            let dir_entry = match next {
                Ok(dir_entry) => dir_entry,
                Err(err) if is_not_found(&err) => {
                    trace!(path = ?err.path(), "skipping vanished entry");
                    continue;
                }
                Err(source) => {
                    let path = source.path().unwrap_or(root).to_path_buf();
                    return Err(OperationError::Walk { path, source });
                }
            };

            let relative = relative_to(root, dir_entry.path())?;
            let kind = if dir_entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let entry = VendorEntry::new(dir_entry.path(), relative, kind);

            if visitor(&entry) == WalkControl::SkipChildren && entry.is_dir() {
                entries.skip_current_dir();
            }
        }

        Ok(())
    }

    fn remove(&self, entry: &VendorEntry) -> Result<()> {
        let result = match entry.kind {
            EntryKind::Directory => fs::remove_dir_all(entry.path()),
            EntryKind::File => fs::remove_file(entry.path()),
        };
        result.map_err(|source| OperationError::Remove {
            path: entry.path().to_path_buf(),
            source,
        })
    }
}
