use std::path::Path;

use prune_core::Lockfile;

use crate::Result;

pub trait LockfileReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the lockfile cannot be read or is malformed.
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile>;
}
