use std::path::Path;

use prune_core::{DevImportPolicy, PolicyOptions};
use serde::Deserialize;

use crate::CONFIG_FILE;
use crate::error::ProjectError;
use crate::project::VendorProject;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    only_code: bool,
    #[serde(default)]
    no_tests: bool,
    #[serde(default)]
    no_legal_files: bool,
    dev_imports: Option<DevImportPolicy>,
    #[serde(default)]
    keep: Vec<String>,
    #[serde(default)]
    code_suffixes: Vec<String>,
}

/// Per-project defaults read from the project configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    policy: PolicyOptions,
    dev_imports: Option<DevImportPolicy>,
}

impl ProjectConfig {
    /// Retention options as configured; never requests a dry run.
    #[must_use]
    pub fn policy_options(&self) -> &PolicyOptions {
        &self.policy
    }

    #[must_use]
    pub fn dev_imports(&self) -> Option<DevImportPolicy> {
        self.dev_imports
    }

    /// Layers command-line options over the configured ones.
    ///
    /// Flags can only switch restrictions on. Keep patterns and code suffixes
    /// from the file come first, followed by those given on the command line.
    #[must_use]
    pub fn merge_options(&self, cli: PolicyOptions) -> PolicyOptions {
        let file = &self.policy;
        PolicyOptions {
            dry_run: cli.dry_run,
            code_only: file.code_only || cli.code_only,
            exclude_tests: file.exclude_tests || cli.exclude_tests,
            exclude_legal_files: file.exclude_legal_files || cli.exclude_legal_files,
            keep_patterns: file
                .keep_patterns
                .iter()
                .cloned()
                .chain(cli.keep_patterns)
                .collect(),
            extra_code_suffixes: file
                .extra_code_suffixes
                .iter()
                .cloned()
                .chain(cli.extra_code_suffixes)
                .collect(),
        }
    }

    /// An explicit command-line choice overrides the file.
    #[must_use]
    pub fn resolve_dev_imports(&self, cli: Option<DevImportPolicy>) -> DevImportPolicy {
        cli.or(self.dev_imports).unwrap_or_default()
    }
}

impl From<ConfigFile> for ProjectConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            policy: PolicyOptions {
                dry_run: false,
                code_only: file.only_code,
                exclude_tests: file.no_tests,
                exclude_legal_files: file.no_legal_files,
                keep_patterns: file.keep,
                extra_code_suffixes: file.code_suffixes,
            },
            dev_imports: file.dev_imports,
        }
    }
}

/// # Errors
///
/// Returns `ProjectError::ConfigParse` if the content is not a valid configuration.
pub fn parse_config(content: &str, path: &Path) -> Result<ProjectConfig, ProjectError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into())
}

/// Loads the project configuration file, or defaults when the project has none.
///
/// # Errors
///
/// Returns `ProjectError` if the file exists but cannot be read or parsed.
pub fn load_config(project: &VendorProject) -> Result<ProjectConfig, ProjectError> {
    let path = project.root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ProjectError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    parse_config(&content, &path)
}
