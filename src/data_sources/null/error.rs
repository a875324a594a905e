use thiserror::Error;

use crate::terraform::StateError;

/// Errors raised by the null data source read handler.
#[derive(Debug, Error)]
pub enum NullDataSourceError {
    /// A computed value could not be stored into the result structure.
    #[error("error setting {field}: {source}")]
    Write {
        field: &'static str,
        source: StateError,
    },

    /// Caller-supplied arguments were rejected by the schema.
    #[error("invalid argument: {0}")]
    Config(#[from] StateError),
}

impl NullDataSourceError {
    /// The attribute whose write failed, if this is a write failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            NullDataSourceError::Write { field, .. } => Some(field),
            NullDataSourceError::Config(_) => None,
        }
    }
}
