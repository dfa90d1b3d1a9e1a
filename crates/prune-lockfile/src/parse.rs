use serde::Deserialize;

use prune_core::{ImportRecord, Lockfile};

use crate::error::{FormatError, ValidationError};

const MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

#[derive(Deserialize)]
struct RawLockfile {
    imports: Option<Vec<RawImport>>,
    #[serde(rename = "devImports", alias = "testImports")]
    dev_imports: Option<Vec<RawImport>>,
}

#[derive(Deserialize)]
struct RawImport {
    name: String,
    subpackages: Option<Vec<String>>,
}

fn into_records(
    raw: Option<Vec<RawImport>>,
    offset: usize,
) -> Result<Vec<ImportRecord>, FormatError> {
    raw.unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, import)| {
            if import.name.trim().is_empty() {
                return Err(ValidationError::EmptyImportName {
                    index: offset + index,
                }
                .into());
            }
            Ok(ImportRecord {
                name: import.name,
                subpackages: import.subpackages.unwrap_or_default(),
            })
        })
        .collect()
}

/// Parses lockfile YAML into its regular and development-only import lists.
///
/// Keys other than `imports` and `devImports` (or `testImports`) are ignored.
///
/// # Errors
///
/// Returns `FormatError` if the document is not valid YAML of the expected shape,
/// exceeds the maximum input size, or lists an import without a name.
#[must_use = "parsing result should be handled"]
pub fn parse_lockfile(content: &str) -> Result<Lockfile, FormatError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(ValidationError::InputTooLarge {
            max_bytes: MAX_INPUT_SIZE,
        }
        .into());
    }

    let raw: RawLockfile = serde_yml::from_str(content)?;

    let imports = into_records(raw.imports, 0)?;
    let dev_imports = into_records(raw.dev_imports, imports.len())?;

    Ok(Lockfile {
        imports,
        dev_imports,
    })
}
