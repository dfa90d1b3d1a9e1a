mod allowlist;
pub mod error;
mod files;
mod path;
mod policy;
pub mod types;

pub use allowlist::{Allowlist, ImportSet, PackageAllowlist, RepoAllowlist};
pub use error::{PathError, PolicyError};
pub use files::{
    LEGAL_FILE_SUBSTRINGS, LICENSE_FILE_PREFIXES, TEST_FILE_SUFFIX, is_legal_file, is_test_file,
};
pub use path::{PackagePath, RelativePath, VENDOR_DIR};
pub use policy::{DEFAULT_CODE_SUFFIXES, PolicyOptions, RetentionPolicy};
pub use types::*;
