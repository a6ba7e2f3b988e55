use crate::classify::ClassifyError;
use crate::ingest::IngestError;
use crate::template::TemplateError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures that abort a generation run. The previous output file is left
/// untouched whenever one of these is returned.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to resolve '{path}': {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    ProducerFailed { program: String, status: ExitStatus },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
