//! Icon catalog loading.
//!
//! The catalog is a JSON array of `{"id": <int>, "file": <string>}` objects.
//! Validation is strict: the first bad element aborts the whole load.

use serde_json::Value;
use std::io;
use std::path::Path;

use crate::error::GenError;
use crate::models::IconRecord;

/// Read and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<IconRecord>, GenError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            GenError::InputMalformed {
                path: path.to_path_buf(),
                detail: "file is not valid UTF-8".to_string(),
            }
        } else {
            GenError::InputNotFound {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = parse_catalog(&contents, path)?;
    log::info!("📂 Loaded {} icon record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Validate catalog text. `origin` is only used in error messages.
pub fn parse_catalog(contents: &str, origin: &Path) -> Result<Vec<IconRecord>, GenError> {
    let document: Value = serde_json::from_str(contents)
        .map_err(|e| malformed(origin, e.to_string()))?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(malformed(
                origin,
                format!("expected a JSON array at the top level, found {}", kind_of(&other)),
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(malformed(
                origin,
                format!("element #{} is {}, expected an object", index, kind_of(&item)),
            ));
        }

        let record: IconRecord = serde_json::from_value(item).map_err(|e| GenError::RecordInvalid {
            path: origin.to_path_buf(),
            index,
            detail: e.to_string(),
        })?;

        if record.file.is_empty() {
            return Err(GenError::RecordInvalid {
                path: origin.to_path_buf(),
                index,
                detail: "field `file` is empty".to_string(),
            });
        }

        records.push(record);
    }

    Ok(records)
}

fn malformed(origin: &Path, detail: String) -> GenError {
    GenError::InputMalformed {
        path: origin.to_path_buf(),
        detail,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
