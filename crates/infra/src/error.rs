use thiserror::Error;

/// Failure of an entity store operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record of `kind` has this id (or the backing sheet is empty).
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A record of `kind` with this id already exists.
    #[error("{kind} already exists: {id}")]
    Conflict { kind: &'static str, id: String },

    /// The backend cannot serve requests (e.g. a poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn conflict(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            id: id.into(),
        }
    }
}

/// A document handed to the ingestion boundary could not be read at all.
///
/// Individual malformed fields never raise; they are defaulted.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected document shape: {0}")]
    Shape(String),
}

/// Invalid process configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}
