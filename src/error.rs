use thiserror::Error;

#[derive(Debug, Error)]
pub enum NullProviderError {
    #[error(transparent)]
    DataSource(#[from] crate::data_sources::DataSourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
