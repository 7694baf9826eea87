// error.rs — Generator error taxonomy
//
// Every variant is fatal: the pipeline stops at the first one and nothing is
// written to the output destination.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GenError {
    /// Catalog path cannot be opened or read
    InputNotFound { path: PathBuf, source: io::Error },

    /// Catalog is not UTF-8 JSON, or not an array of objects
    InputMalformed { path: PathBuf, detail: String },

    /// A catalog element is missing a field or has one of the wrong type
    RecordInvalid { path: PathBuf, index: usize, detail: String },

    /// Output destination cannot be created or written
    OutputWriteFailure { destination: String, source: io::Error },

    /// Unusable command line (triggers usage hint + exit 1)
    InvalidArgs(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InputNotFound { path, .. } => {
                write!(f, "cannot read icon catalog {}", path.display())
            }
            GenError::InputMalformed { path, detail } => {
                write!(f, "icon catalog {} is malformed: {}", path.display(), detail)
            }
            GenError::RecordInvalid { path, index, detail } => write!(
                f,
                "icon catalog {}: record #{} is invalid: {}",
                path.display(),
                index,
                detail
            ),
            GenError::OutputWriteFailure { destination, .. } => {
                write!(f, "cannot write {}", destination)
            }
            GenError::InvalidArgs(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::InputNotFound { source, .. } => Some(source),
            GenError::OutputWriteFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}
