mod error;
mod types;

pub use error::NullDataSourceError;
pub use types::{
    DEFAULT_COMPUTED_VALUE, HAS_COMPUTED_DEFAULT, ID, INPUTS, NullReadResult, OUTPUTS, RANDOM,
    STATIC_ID, TYPE_NAME,
};

use std::collections::BTreeMap;

use rand::RngCore;

use super::{DataSource, DataSourceError};
use crate::terraform::{Attribute, ResourceData, Schema};

const DEPRECATION_MESSAGE: &str = "The null_data_source was historically used to construct intermediate values to re-use elsewhere \
in configuration, the same can now be achieved using locals";

const DESCRIPTION: &str = "The `null_data_source` data source implements the standard data source lifecycle but does not \
interact with any external APIs.\n\nHistorically, the `null_data_source` was typically used to construct intermediate values \
to re-use elsewhere in configuration. The same can now be achieved using \
[locals](https://www.terraform.io/docs/language/values/locals.html).";

const ID_DEPRECATION: &str = "This attribute is only present for some legacy compatibility issues and should not be used. \
It will be removed in a future version.";

pub fn schema() -> Schema {
    Schema::new(DESCRIPTION)
        .deprecated(DEPRECATION_MESSAGE)
        .with_attribute(
            Attribute::map(INPUTS)
                .optional()
                .description("A map of arbitrary strings that is copied into the `outputs` attribute, and accessible directly for interpolation."),
        )
        .with_attribute(
            Attribute::map(OUTPUTS)
                .computed()
                .description("After the data source is \"read\", a copy of the `inputs` map."),
        )
        .with_attribute(
            Attribute::string(RANDOM)
                .computed()
                .description("A random value. This is primarily for testing and has little practical use; prefer the [hashicorp/random provider](https://registry.terraform.io/providers/hashicorp/random) for more practical random number use-cases."),
        )
        .with_attribute(
            Attribute::string(HAS_COMPUTED_DEFAULT)
                .optional()
                .computed()
                .description("If set, its literal value will be stored and returned. If not, its value defaults to `\"default\"`. This argument exists primarily for testing and has little practical use."),
        )
        .with_attribute(
            Attribute::string(ID)
                .computed()
                .description(ID_DEPRECATION)
                .deprecated(ID_DEPRECATION),
        )
}

/// Data source that echoes its inputs and adds a random value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDataSource;

impl NullDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Runs a read against `data`, writing `outputs`, `random`,
    /// `has_computed_default` and the id in that order. The first failed
    /// write aborts the read.
    pub fn read_into(
        &self,
        data: &mut ResourceData,
        rng: &mut dyn RngCore,
    ) -> Result<(), NullDataSourceError> {
        let inputs = data.get_map(INPUTS);
        tracing::debug!(inputs = inputs.len(), "reading null_data_source");

        data.set(OUTPUTS, inputs)
            .map_err(|source| NullDataSourceError::Write {
                field: OUTPUTS,
                source,
            })?;

        // NOTE: Errors name the attribute ("random"), not the legacy "random int" wording
        data.set(RANDOM, random_value(rng))
            .map_err(|source| NullDataSourceError::Write {
                field: RANDOM,
                source,
            })?;

        // NOTE: An explicit empty string is indistinguishable from unset here
        if data.get_string(HAS_COMPUTED_DEFAULT).is_empty() {
            data.set(HAS_COMPUTED_DEFAULT, DEFAULT_COMPUTED_VALUE)
                .map_err(|source| NullDataSourceError::Write {
                    field: HAS_COMPUTED_DEFAULT,
                    source,
                })?;
        }

        data.set_id(STATIC_ID);
        Ok(())
    }

    /// Typed entry point: reads from plain arguments instead of a
    /// configuration document.
    pub fn read_values(
        &self,
        inputs: Option<BTreeMap<String, String>>,
        has_computed_default: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<NullReadResult, NullDataSourceError> {
        let mut data = ResourceData::new(schema());
        if let Some(inputs) = inputs {
            data.set(INPUTS, inputs)?;
        }
        if let Some(value) = has_computed_default {
            data.set(HAS_COMPUTED_DEFAULT, value)?;
        }

        self.read_into(&mut data, rng)?;
        Ok(NullReadResult::from_data(&data))
    }
}

impl DataSource for NullDataSource {
    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        schema()
    }

    fn read(&self, data: &mut ResourceData, rng: &mut dyn RngCore) -> Result<(), DataSourceError> {
        self.read_into(data, rng)?;
        Ok(())
    }
}

/// Decimal form of a non-negative 63-bit integer.
fn random_value(rng: &mut dyn RngCore) -> String {
    (rng.next_u64() >> 1).to_string()
}
