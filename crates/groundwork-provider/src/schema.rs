//! Provider schema model
//!
//! A schema describes the shape of a configuration block: the provider's own
//! configuration, each resource type it manages, and each data source it can
//! read. Schemas are fetched once per provider instance and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Value type of a configuration attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Number,
    Bool,
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>),
}

/// One attribute within a configuration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub value_type: ValueType,

    /// Must be set by the user
    pub required: bool,

    /// May be set by the user
    pub optional: bool,

    /// Filled in by the provider after apply
    pub computed: bool,

    /// Redacted from rendered output
    pub sensitive: bool,

    pub description: Option<String>,
}

impl Attribute {
    pub fn required(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
            description: None,
        }
    }

    pub fn optional(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            description: None,
        }
    }

    pub fn computed(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            optional: false,
            computed: true,
            sensitive: false,
            description: None,
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Schema of one configuration block
///
/// Attributes are kept in a `BTreeMap` so rendering and serialization are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub attributes: BTreeMap<String, Attribute>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}

/// Complete negotiated schema of one provider instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchema {
    /// Shape of the provider's own configuration block
    pub provider: Block,

    /// Block schema per resource type name
    pub resource_types: HashMap<String, Block>,

    /// Block schema per data source name
    pub data_sources: HashMap<String, Block>,
}

impl ProviderSchema {
    pub fn resource_type(&self, name: &str) -> Option<&Block> {
        self.resource_types.get(name)
    }

    pub fn data_source(&self, name: &str) -> Option<&Block> {
        self.data_sources.get(name)
    }
}

/// Request for a schema fetch: exactly the type names whose schemas the
/// caller wants returned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRequest {
    pub resource_types: Vec<String>,
    pub data_sources: Vec<String>,
}
