use std::path::Path;

use prune_project::{ProjectConfig, VendorProject, discover_project, load_config};

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<VendorProject> {
        Ok(discover_project(start_path)?)
    }

    fn load_config(&self, project: &VendorProject) -> Result<ProjectConfig> {
        Ok(load_config(project)?)
    }
}
