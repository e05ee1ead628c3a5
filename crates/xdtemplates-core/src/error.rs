use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XdTemplatesError {
    // Variable file errors
    #[error("VARIABLES_PARSE_ERROR: {path}:{line}: {reason} (line: '{content}')")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    // Template source errors
    #[error("SOURCE_NOT_FOUND: template folder '{path}' does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("INVALID_PATTERN: search pattern '{pattern}' is invalid: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // Delimiter errors
    #[error("INVALID_DELIMITERS: {0}")]
    InvalidDelimiters(String),

    // Catalog errors
    #[error("CATALOG_INVALID: {0}")]
    Catalog(String),

    #[error("OPTION_NOT_FOUND: option '{0}' not found in catalog")]
    OptionNotFound(String),

    // IO errors
    #[error("IO_ERROR: failed to {action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl XdTemplatesError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XdTemplatesError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, XdTemplatesError>;
