use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Project(#[from] prune_project::ProjectError),

    #[error(transparent)]
    Policy(#[from] prune_core::PolicyError),

    #[error("invalid import path in lockfile")]
    ImportPath(#[from] prune_core::PathError),

    #[error("failed to read lockfile '{path}'")]
    LockfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lockfile '{path}'")]
    LockfileParse {
        path: PathBuf,
        #[source]
        source: prune_lockfile::FormatError,
    },

    #[error("failed to walk vendor tree at '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("vendor entry '{path}' is outside the vendor root")]
    OutsideVendorRoot { path: PathBuf },

    #[error("failed to remove '{path}'")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
