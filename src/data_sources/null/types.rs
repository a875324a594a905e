use std::collections::BTreeMap;

use crate::terraform::ResourceData;

pub const TYPE_NAME: &str = "null_data_source";

pub const INPUTS: &str = "inputs";
pub const OUTPUTS: &str = "outputs";
pub const RANDOM: &str = "random";
pub const HAS_COMPUTED_DEFAULT: &str = "has_computed_default";
pub const ID: &str = "id";

/// Fallback for `has_computed_default` when the caller leaves it empty.
pub const DEFAULT_COMPUTED_VALUE: &str = "default";
pub const STATIC_ID: &str = "static";

/// The four values a null data source read produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullReadResult {
    pub outputs: BTreeMap<String, String>,
    pub random: String,
    pub has_computed_default: String,
    pub id: String,
}

impl NullReadResult {
    pub fn from_data(data: &ResourceData) -> Self {
        Self {
            outputs: data.get_map(OUTPUTS),
            random: data.get_string(RANDOM).to_string(),
            has_computed_default: data.get_string(HAS_COMPUTED_DEFAULT).to_string(),
            id: data.id().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terraform::{Attribute, Schema};

    #[test]
    fn test_from_data_reads_computed_values() {
        let schema = Schema::new("t")
            .with_attribute(Attribute::map(OUTPUTS).computed())
            .with_attribute(Attribute::string(RANDOM).computed())
            .with_attribute(Attribute::string(HAS_COMPUTED_DEFAULT).optional().computed());
        let mut data = ResourceData::new(schema);
        let mut outputs = BTreeMap::new();
        outputs.insert("a".to_string(), "1".to_string());
        data.set(OUTPUTS, outputs.clone()).unwrap();
        data.set(RANDOM, "17").unwrap();
        data.set(HAS_COMPUTED_DEFAULT, "custom").unwrap();
        data.set_id(STATIC_ID);

        let result = NullReadResult::from_data(&data);
        assert_eq!(result.outputs, outputs);
        assert_eq!(result.random, "17");
        assert_eq!(result.has_computed_default, "custom");
        assert_eq!(result.id, "static");
    }

    #[test]
    fn test_from_data_unset_values_are_empty() {
        let data = ResourceData::new(Schema::default());
        let result = NullReadResult::from_data(&data);
        assert!(result.outputs.is_empty());
        assert_eq!(result.random, "");
        assert_eq!(result.id, "");
    }
}
