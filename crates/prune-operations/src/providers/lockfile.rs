use std::fs;
use std::path::Path;

use prune_core::Lockfile;
use prune_lockfile::parse_lockfile;

use crate::Result;
use crate::error::OperationError;
use crate::traits::LockfileReader;

pub struct FileSystemLockfileReader;

impl FileSystemLockfileReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemLockfileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemLockfileReader {
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile> {
        let content = fs::read_to_string(path).map_err(|source| OperationError::LockfileRead {
            path: path.to_path_buf(),
            source,
        })?;

        parse_lockfile(&content).map_err(|source| OperationError::LockfileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
