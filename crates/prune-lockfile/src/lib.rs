mod error;
mod parse;

pub use error::{FormatError, ValidationError};
pub use parse::parse_lockfile;
