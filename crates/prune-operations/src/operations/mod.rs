mod classifier;
mod executor;
mod planner;
mod prune;
mod walker;

pub use classifier::{Classifier, KeepSet};
pub use executor::execute_plan;
pub use planner::{DeletionPlan, plan_deletions};
pub use prune::{PruneInput, PruneOperation, PruneOutput};
pub use walker::classify_tree;
