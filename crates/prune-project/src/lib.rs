mod config;
mod error;
mod project;

pub const MANIFEST_FILE: &str = "glide.yaml";
pub const LOCK_FILE: &str = "glide.lock";
pub const CONFIG_FILE: &str = ".vendor-prune.toml";

pub use config::{ProjectConfig, load_config, parse_config};
pub use error::ProjectError;
pub use project::{VendorProject, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
