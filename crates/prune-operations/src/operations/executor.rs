use tracing::{debug, info};

use crate::Result;
use crate::operations::DeletionPlan;
use crate::traits::{PruneReporter, VendorTree};

/// Reports each planned entry and, unless `dry_run`, removes it.
///
/// Stops at the first failed removal. Entries removed before the failure stay
/// removed; running again finishes the job.
///
/// # Errors
///
/// Returns an error if an entry cannot be removed.
pub fn execute_plan<T, R>(
    tree: &T,
    plan: &DeletionPlan,
    dry_run: bool,
    reporter: &R,
) -> Result<()>
where
    T: VendorTree + ?Sized,
    R: PruneReporter + ?Sized,
{
    for entry in plan.iter() {
        reporter.removing(entry);
        if dry_run {
            continue;
        }
        tree.remove(entry)?;
        debug!(path = %entry.relative, "removed");
    }

    if dry_run {
        info!(entries = plan.len(), "dry run, nothing removed");
    } else {
        info!(entries = plan.len(), "removed planned entries");
    }
    Ok(())
}
