use prune_core::{EntryKind, VendorEntry};
use prune_operations::operations::PruneOutput;
use prune_operations::traits::PruneReporter;

pub(crate) fn format_removal(entry: &VendorEntry) -> String {
    format!("Removing unused {}: {}", entry.kind, entry.relative)
}

fn counted(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

pub(crate) fn format_summary(output: &PruneOutput) -> String {
    if output.plan.is_empty() {
        return "Nothing to remove.".to_string();
    }

    let dirs = counted(
        output.plan.count(EntryKind::Directory),
        "directory",
        "directories",
    );
    let files = counted(output.plan.count(EntryKind::File), "file", "files");
    let vendor = output.project.vendor_dir.display();

    if output.dry_run {
        format!(
            "Would remove {dirs} and {files} from {vendor}.\nDry run - no changes were made."
        )
    } else {
        format!("Removed {dirs} and {files} from {vendor}.")
    }
}

/// Prints each removal to stdout as it happens.
pub(crate) struct StdoutReporter;

impl PruneReporter for StdoutReporter {
    fn removing(&self, entry: &VendorEntry) {
        println!("{}", format_removal(entry));
    }
}
