use thiserror::Error;

/// Errors raised while loading or querying reference data.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read reference file: {0}")]
    Io(String),

    #[error("Malformed {document}: {message}")]
    Malformed { document: String, message: String },

    #[error("Reference data contains no depots")]
    NoDepots,

    #[error("Duplicate depot id '{0}'")]
    DuplicateDepotId(String),
}

impl ReferenceDataError {
    pub fn malformed(document: &str, err: impl std::fmt::Display) -> Self {
        ReferenceDataError::Malformed {
            document: document.to_string(),
            message: err.to_string(),
        }
    }
}
