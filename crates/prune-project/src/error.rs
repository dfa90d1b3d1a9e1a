use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot resolve start directory '{path}'")]
    StartDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no {manifest} found traversing from '{start_dir}'")]
    NotFound {
        start_dir: PathBuf,
        manifest: &'static str,
    },

    #[error("cannot find vendor directory at '{path}'")]
    VendorNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vendor path '{path}' is not a directory")]
    VendorNotADirectory { path: PathBuf },

    #[error("failed to read configuration at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
