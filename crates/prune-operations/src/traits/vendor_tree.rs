use std::path::Path;

use prune_core::VendorEntry;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    /// Do not descend into the directory just visited.
    SkipChildren,
}

pub trait VendorTree: Send + Sync {
    /// Visits every entry below `root`, excluding `root` itself.
    ///
    /// Traversal is depth-first and pre-order, with siblings in file name order.
    /// Entries that disappear while walking are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on any traversal failure other than a vanished entry.
    fn walk(
        &self,
        root: &Path,
        visitor: &mut dyn FnMut(&VendorEntry) -> WalkControl,
    ) -> Result<()>;

    /// Removes a file, or a directory together with its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be removed.
    fn remove(&self, entry: &VendorEntry) -> Result<()>;
}
