use std::path::Path;

use prune_core::{EntryKind, VendorEntry};
use tracing::{debug, info};

use crate::Result;
use crate::operations::KeepSet;
use crate::traits::{VendorTree, WalkControl};

/// Entries to remove, in traversal order. No entry lies below another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    entries: Vec<VendorEntry>,
}

impl DeletionPlan {
    pub fn iter(&self) -> impl Iterator<Item = &VendorEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

impl FromIterator<VendorEntry> for DeletionPlan {
    fn from_iter<I: IntoIterator<Item = VendorEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Walks the tree again and collects every entry that is not kept.
///
/// A planned directory is removed as a whole, so its contents are not visited.
///
/// # Errors
///
/// Returns an error if the tree cannot be traversed.
pub fn plan_deletions<T>(tree: &T, root: &Path, keep: &KeepSet) -> Result<DeletionPlan>
where
    T: VendorTree + ?Sized,
{
    let mut entries = Vec::new();

    tree.walk(root, &mut |entry| {
        if keep.contains(&entry.relative) {
            return WalkControl::Continue;
        }

        debug!(path = %entry.relative, kind = %entry.kind, "planning removal");
        entries.push(entry.clone());
        if entry.is_dir() {
            WalkControl::SkipChildren
        } else {
            WalkControl::Continue
        }
    })?;

    let plan = DeletionPlan { entries };
    info!(
        dirs = plan.count(EntryKind::Directory),
        files = plan.count(EntryKind::File),
        "planned deletions"
    );
    Ok(plan)
}
