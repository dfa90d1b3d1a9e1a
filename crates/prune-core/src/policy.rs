use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use indexmap::IndexSet;

use crate::error::PolicyError;
use crate::files::is_test_file;
use crate::types::KeepReason;

/// Suffixes of files that are treated as source code in code-only mode.
pub const DEFAULT_CODE_SUFFIXES: &[&str] = &[
    ".go", ".c", ".s", ".S", ".cc", ".cpp", ".cxx", ".h", ".hh", ".hpp", ".hxx",
];

/// Unvalidated retention settings, as collected from flags and configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOptions {
    pub dry_run: bool,
    pub code_only: bool,
    pub exclude_tests: bool,
    pub exclude_legal_files: bool,
    pub keep_patterns: Vec<String>,
    pub extra_code_suffixes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    dry_run: bool,
    code_only: bool,
    exclude_tests: bool,
    exclude_legal_files: bool,
    keep_globs: GlobSet,
    code_suffixes: IndexSet<String>,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            dry_run: false,
            code_only: false,
            exclude_tests: false,
            exclude_legal_files: false,
            keep_globs: GlobSet::empty(),
            code_suffixes: DEFAULT_CODE_SUFFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// `*` and `?` stay within one path segment; only `**` crosses separators.
fn build_keep_globs(patterns: &[String]) -> Result<GlobSet, PolicyError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| PolicyError::GlobPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| PolicyError::GlobPattern {
        pattern: patterns.join(", "),
        source,
    })
}

impl RetentionPolicy {
    /// # Errors
    ///
    /// Returns `PolicyError` if test exclusion is requested without code-only mode,
    /// if a keep pattern does not compile, or if an extra code suffix is empty.
    pub fn new(options: PolicyOptions) -> Result<Self, PolicyError> {
        if options.exclude_tests && !options.code_only {
            return Err(PolicyError::TestsRequireCodeOnly);
        }

        let keep_globs = build_keep_globs(&options.keep_patterns)?;

        let mut code_suffixes: IndexSet<String> =
            DEFAULT_CODE_SUFFIXES.iter().map(ToString::to_string).collect();
        for suffix in options.extra_code_suffixes {
            if suffix.is_empty() {
                return Err(PolicyError::EmptyCodeSuffix);
            }
            code_suffixes.insert(suffix);
        }

        Ok(Self {
            dry_run: options.dry_run,
            code_only: options.code_only,
            exclude_tests: options.exclude_tests,
            exclude_legal_files: options.exclude_legal_files,
            keep_globs,
            code_suffixes,
        })
    }

    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn code_only(&self) -> bool {
        self.code_only
    }

    #[must_use]
    pub fn exclude_tests(&self) -> bool {
        self.exclude_tests
    }

    #[must_use]
    pub fn exclude_legal_files(&self) -> bool {
        self.exclude_legal_files
    }

    #[must_use]
    pub fn code_suffixes(&self) -> &IndexSet<String> {
        &self.code_suffixes
    }

    #[must_use]
    pub fn is_code_file(&self, file_name: &str) -> bool {
        self.code_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    /// Matches a path relative to the innermost vendor directory.
    #[must_use]
    pub fn matches_keep_pattern(&self, effective_path: &[String]) -> bool {
        !self.keep_globs.is_empty() && self.keep_globs.is_match(effective_path.join("/"))
    }

    /// Decides a file that sits directly inside a needed package directory.
    ///
    /// A keep pattern match wins over test exclusion.
    #[must_use]
    pub fn member_file_reason(
        &self,
        file_name: &str,
        effective_path: &[String],
    ) -> Option<KeepReason> {
        if !self.code_only {
            return Some(KeepReason::PackageMember);
        }

        let excluded_test = self.exclude_tests && is_test_file(file_name);
        if !excluded_test && self.is_code_file(file_name) {
            return Some(KeepReason::PackageMember);
        }

        if self.matches_keep_pattern(effective_path) {
            return Some(KeepReason::KeepPattern);
        }

        None
    }
}
