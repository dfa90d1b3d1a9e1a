use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Operation(#[from] prune_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
