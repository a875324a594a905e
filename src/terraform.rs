//! Schema and state primitives shared by every data source.

pub mod schema;
pub mod state;

pub use schema::{Attribute, AttributeType, Schema};
pub use state::{DataSourceState, ResourceData, StateError, Value};
