//! terraform-provider-null - the `null_data_source` data source.
//!
//! A data source that copies its `inputs` into `outputs`, adds a random value,
//! resolves `has_computed_default` and records the fixed id `"static"`.

pub mod data_sources;
pub mod output;
pub mod terraform;

mod error;

pub use data_sources::null::{NullDataSource, NullDataSourceError, NullReadResult};
pub use data_sources::{DataSource, DataSourceError, ReadOutcome, read_data_source};
pub use error::NullProviderError;
pub use terraform::{DataSourceState, ResourceData, Schema, StateError, Value};
