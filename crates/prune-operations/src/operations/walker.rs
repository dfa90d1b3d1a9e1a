use std::path::Path;

use prune_core::ClassificationDecision;
use tracing::{debug, info};

use crate::Result;
use crate::operations::Classifier;
use crate::traits::{VendorTree, WalkControl};

/// Classifies every entry below the vendor root, in traversal order.
///
/// # Errors
///
/// Returns an error if the tree cannot be traversed.
pub fn classify_tree<T>(
    tree: &T,
    root: &Path,
    classifier: &Classifier<'_>,
) -> Result<Vec<ClassificationDecision>>
where
    T: VendorTree + ?Sized,
{
    let mut decisions = Vec::new();

    tree.walk(root, &mut |entry| {
        let decision = classifier.classify(entry);
        if let Some(reason) = decision.keep {
            debug!(path = %entry.relative, %reason, "keeping entry");
        }
        decisions.push(decision);
        WalkControl::Continue
    })?;

    info!(
        entries = decisions.len(),
        kept = decisions.iter().filter(|d| d.is_kept()).count(),
        "classified vendor tree"
    );
    Ok(decisions)
}
