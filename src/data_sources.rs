pub mod null;

use rand::RngCore;
use thiserror::Error;

use crate::terraform::{DataSourceState, ResourceData, Schema, StateError};

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] StateError),
    #[error("invalid state: {0}")]
    State(StateError),
    #[error(transparent)]
    Null(#[from] null::NullDataSourceError),
}

pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &str;
    fn schema(&self) -> Schema;
    fn read(&self, data: &mut ResourceData, rng: &mut dyn RngCore) -> Result<(), DataSourceError>;
}

/// Result of a full read: the recorded state plus any warnings for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome {
    pub state: DataSourceState,
    pub warnings: Vec<String>,
}

pub fn data_source_names() -> Vec<&'static str> {
    vec![null::TYPE_NAME]
}

pub fn get_data_source(name: &str) -> Result<Box<dyn DataSource>, DataSourceError> {
    match name {
        null::TYPE_NAME => Ok(Box::new(null::NullDataSource::new())),
        other => Err(DataSourceError::UnknownDataSource(other.to_string())),
    }
}

/// Validates `config` against the named data source's schema, reads it and
/// returns the resulting state.
pub fn read_data_source(
    name: &str,
    config: &serde_json::Value,
    rng: &mut dyn RngCore,
) -> Result<ReadOutcome, DataSourceError> {
    let data_source = get_data_source(name)?;
    let mut data = ResourceData::from_config(data_source.schema(), config)?;

    let warnings = deprecation_warnings(data_source.type_name(), &data);
    for warning in &warnings {
        tracing::debug!(data_source = name, "{warning}");
    }

    data_source.read(&mut data, rng)?;

    let state = data
        .into_state(data_source.type_name())
        .map_err(DataSourceError::State)?;
    tracing::info!(data_source = name, id = %state.id, "read complete");

    Ok(ReadOutcome { state, warnings })
}

fn deprecation_warnings(type_name: &str, data: &ResourceData) -> Vec<String> {
    let schema = data.schema();
    let mut warnings = Vec::new();

    if let Some(message) = schema.deprecation_message {
        warnings.push(format!("Deprecated data source {type_name}: {message}"));
    }

    for attribute in schema.attributes() {
        if let Some(message) = attribute.deprecated {
            if data.is_set(attribute.name) {
                warnings.push(format!("Deprecated attribute {}: {message}", attribute.name));
            }
        }
    }

    warnings
}
