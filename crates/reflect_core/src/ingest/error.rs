use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the documentation AST.
///
/// Only `ReadDir` aborts a run; the others skip one file or compound.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read AST directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed AST document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("{kind} compound is missing its {field}")]
    MissingField {
        kind: String,
        field: &'static str,
    },
}
