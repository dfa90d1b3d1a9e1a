use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("import #{index} has an empty name")]
    EmptyImportName { index: usize },

    #[error("input exceeds maximum size of {max_bytes} bytes")]
    InputTooLarge { max_bytes: usize },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed lockfile: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
