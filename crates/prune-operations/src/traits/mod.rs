mod lockfile_reader;
mod project_provider;
mod reporter;
mod vendor_tree;

pub use lockfile_reader::LockfileReader;
pub use project_provider::ProjectProvider;
pub use reporter::PruneReporter;
pub use vendor_tree::{VendorTree, WalkControl};
