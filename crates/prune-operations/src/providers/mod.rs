mod lockfile;
mod project;
mod vendor_tree;

pub use lockfile::FileSystemLockfileReader;
pub use project::FileSystemProjectProvider;
pub use vendor_tree::FileSystemVendorTree;
