use std::path::Path;

use prune_project::{ProjectConfig, VendorProject};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no project or vendor directory can be found from the given path.
    fn discover_project(&self, start_path: &Path) -> Result<VendorProject>;

    /// # Errors
    ///
    /// Returns an error if the project configuration exists but cannot be loaded.
    fn load_config(&self, project: &VendorProject) -> Result<ProjectConfig>;
}
