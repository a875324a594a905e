use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::schema::{Attribute, AttributeType, Schema};

/// A single attribute value as stored in data source state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Map(BTreeMap<String, String>),
}

impl Value {
    pub fn kind(&self) -> AttributeType {
        match self {
            Value::String(_) => AttributeType::String,
            Value::Map(_) => AttributeType::Map,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<BTreeMap<String, String>> for Value {
    fn from(value: BTreeMap<String, String>) -> Self {
        Value::Map(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Map(map) => {
                let lines: Vec<String> = map.iter().map(|(k, v)| format!("{k} = {v}")).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("unsupported attribute \"{0}\"")]
    UnknownAttribute(String),

    #[error("attribute \"{0}\" is computed and cannot be configured")]
    NotConfigurable(String),

    #[error("attribute \"{attribute}\": expected {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        expected: AttributeType,
        found: String,
    },

    #[error("missing required attribute \"{0}\"")]
    MissingRequired(String),

    #[error("configuration must be an object, found {0}")]
    InvalidConfig(String),

    #[error("read completed without setting an id")]
    MissingId,
}

/// Attribute values of one data source instance, checked against its schema.
///
/// Configuration values are loaded with [`ResourceData::from_config`]; a read
/// handler then fills computed attributes through [`ResourceData::set`].
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Schema,
    values: BTreeMap<String, Value>,
    id: Option<String>,
}

impl ResourceData {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
            id: None,
        }
    }

    pub fn from_config(schema: Schema, config: &serde_json::Value) -> Result<Self, StateError> {
        let object = match config {
            serde_json::Value::Null => return Self::new(schema).check_required(),
            serde_json::Value::Object(object) => object,
            other => return Err(StateError::InvalidConfig(json_kind(other).to_string())),
        };

        let mut values = BTreeMap::new();
        for (name, raw) in object {
            let attribute = schema
                .attribute(name)
                .ok_or_else(|| StateError::UnknownAttribute(name.clone()))?;

            if !attribute.is_configurable() {
                return Err(StateError::NotConfigurable(name.clone()));
            }

            if let Some(value) = convert_config_value(attribute, raw)? {
                values.insert(name.clone(), value);
            }
        }

        Self {
            schema,
            values,
            id: None,
        }
        .check_required()
    }

    fn check_required(self) -> Result<Self, StateError> {
        if let Some(missing) = self
            .schema
            .attributes()
            .find(|a| a.required && !self.values.contains_key(a.name))
        {
            return Err(StateError::MissingRequired(missing.name.to_string()));
        }
        Ok(self)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the string value of `name`, or `""` when unset or not a string.
    pub fn get_string(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }

    /// Returns the map value of `name`, or an empty map when unset or not a map.
    pub fn get_map(&self, name: &str) -> BTreeMap<String, String> {
        match self.values.get(name) {
            Some(Value::Map(map)) => map.clone(),
            _ => BTreeMap::new(),
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), StateError> {
        let value = value.into();
        let attribute = self
            .schema
            .attribute(name)
            .ok_or_else(|| StateError::UnknownAttribute(name.to_string()))?;

        if attribute.kind != value.kind() {
            return Err(StateError::TypeMismatch {
                attribute: name.to_string(),
                expected: attribute.kind,
                found: value.kind().to_string(),
            });
        }

        self.values.insert(name.to_string(), value);
        Ok(())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn into_state(self, type_name: &str) -> Result<DataSourceState, StateError> {
        let id = self.id.ok_or(StateError::MissingId)?;
        Ok(DataSourceState {
            type_name: type_name.to_string(),
            id,
            attributes: self.values,
        })
    }
}

/// The state recorded for a data source instance after a read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceState {
    #[serde(rename = "type")]
    pub type_name: String,
    pub id: String,
    pub attributes: BTreeMap<String, Value>,
}

fn convert_config_value(
    attribute: &Attribute,
    raw: &serde_json::Value,
) -> Result<Option<Value>, StateError> {
    if raw.is_null() {
        return Ok(None);
    }

    match attribute.kind {
        AttributeType::String => primitive_to_string(raw)
            .map(|s| Some(Value::String(s)))
            .ok_or_else(|| StateError::TypeMismatch {
                attribute: attribute.name.to_string(),
                expected: AttributeType::String,
                found: json_kind(raw).to_string(),
            }),
        AttributeType::Map => {
            let object = raw.as_object().ok_or_else(|| StateError::TypeMismatch {
                attribute: attribute.name.to_string(),
                expected: AttributeType::Map,
                found: json_kind(raw).to_string(),
            })?;

            let mut map = BTreeMap::new();
            for (key, element) in object {
                let converted =
                    primitive_to_string(element).ok_or_else(|| StateError::TypeMismatch {
                        attribute: format!("{}.{}", attribute.name, key),
                        expected: AttributeType::String,
                        found: json_kind(element).to_string(),
                    })?;
                map.insert(key.clone(), converted);
            }
            Ok(Some(Value::Map(map)))
        }
    }
}

// NOTE: Numbers and booleans convert to strings the way Terraform converts primitives
fn primitive_to_string(raw: &serde_json::Value) -> Option<String> {
    match raw {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(number_to_string(n)),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// NOTE: f64 Display never uses an exponent and drops a trailing ".0"
fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn json_kind(raw: &serde_json::Value) -> &'static str {
    match raw {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
