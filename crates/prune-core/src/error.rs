use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("package path is empty")]
    Empty,

    #[error("package path '{0}' must be relative")]
    Absolute(String),

    #[error("package path '{0}' must not contain '..'")]
    ParentSegment(String),

    #[error("path '{}' is not relative to the vendor root", .0.display())]
    NotRelative(PathBuf),
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("excluding test files requires code-only mode (--no-tests requires --only-code)")]
    TestsRequireCodeOnly,

    #[error("invalid keep pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("code suffix must not be empty")]
    EmptyCodeSuffix,
}
