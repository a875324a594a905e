use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    /// Map of string to string.
    Map,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => f.write_str("string"),
            AttributeType::Map => f.write_str("map of string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub optional: bool,
    pub required: bool,
    pub computed: bool,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<&'static str>,
}

impl Attribute {
    fn new(name: &'static str, kind: AttributeType) -> Self {
        Self {
            name,
            kind,
            optional: false,
            required: false,
            computed: false,
            description: "",
            deprecated: None,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, AttributeType::String)
    }

    pub fn map(name: &'static str) -> Self {
        Self::new(name, AttributeType::Map)
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn deprecated(mut self, message: &'static str) -> Self {
        self.deprecated = Some(message);
        self
    }

    /// Whether a configuration may supply a value for this attribute.
    pub fn is_configurable(&self) -> bool {
        self.optional || self.required
    }
}

/// Declarative description of the attributes a data source reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<&'static str>,
    attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    pub fn new(description: &'static str) -> Self {
        Self {
            description,
            deprecation_message: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn deprecated(mut self, message: &'static str) -> Self {
        self.deprecation_message = Some(message);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute.name, attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }
}
