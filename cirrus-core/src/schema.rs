//! Schema - Type schemas for CloudFormation resources and property records
//!
//! Every record declares its schema, enabling validation of untyped
//! property maps before they are decoded into typed records.

use std::collections::HashMap;
use std::fmt;

use crate::resource::Value;

/// Attribute type
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Double (integers are accepted too)
    Float,
    /// Boolean
    Bool,
    /// Free-form JSON
    Json,
    /// List
    List(Box<AttributeType>),
    /// Map with string keys
    Map(Box<AttributeType>),
    /// Nested property record
    Struct(Box<PropertySchema>),
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors("", value, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn collect_errors(&self, path: &str, value: &Value, errors: &mut Vec<ValidationError>) {
        // Intrinsics resolve at deployment time and may produce any type
        if value.is_intrinsic() {
            return;
        }

        match (self, value) {
            (AttributeType::Json, _) => {}
            (AttributeType::String, Value::String(_)) => {}
            (AttributeType::Int, Value::Int(_)) => {}
            (AttributeType::Float, Value::Int(_) | Value::Float(_)) => {}
            (AttributeType::Bool, Value::Bool(_)) => {}

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.collect_errors(&format!("{}[{}]", path, i), item, errors);
                }
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                for key in keys {
                    inner.collect_errors(&join_path(path, key), &map[key], errors);
                }
            }

            (AttributeType::Struct(schema), Value::Map(map)) => {
                schema.collect_errors(path, map, errors);
            }

            _ => errors.push(ValidationError::new(
                path,
                TypeError::TypeMismatch {
                    expected: self.type_name(),
                    got: value.type_name(),
                },
            )),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Float => "Float".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Json => "Json".to_string(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Struct(schema) => schema.name.clone(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Required property '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown property '{name}'")]
    UnknownAttribute { name: String },
}

/// A type error together with the property path it occurred at
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: String,
    pub error: TypeError,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, error: TypeError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.path, self.error)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Attribute schema
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    /// Rust field name (e.g., "keyspace_name")
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub description: Option<String>,
    /// CloudFormation property name (e.g., "KeyspaceName")
    pub provider_name: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            description: None,
            provider_name: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// Key of this attribute in a CloudFormation property map
    pub fn key(&self) -> &str {
        self.provider_name.as_deref().unwrap_or(&self.name)
    }
}

/// Schema of a property record: an ordered set of attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// CloudFormation name (e.g., "AWS::Cassandra::Table.BillingMode")
    pub name: String,
    pub attributes: Vec<AttributeSchema>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.push(schema);
        self
    }

    /// Look up an attribute by its CloudFormation name
    pub fn get(&self, key: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.key() == key)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.iter().filter(|a| a.required)
    }

    /// Validate a property map against this schema
    pub fn validate(&self, properties: &HashMap<String, Value>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors("", properties, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn collect_errors(
        &self,
        prefix: &str,
        properties: &HashMap<String, Value>,
        errors: &mut Vec<ValidationError>,
    ) {
        for schema in self.required_attributes() {
            let present = properties
                .get(schema.key())
                .is_some_and(|v| *v != Value::Null);
            if !present {
                errors.push(ValidationError::new(
                    prefix,
                    TypeError::MissingRequired {
                        name: schema.key().to_string(),
                    },
                ));
            }
        }

        let mut keys: Vec<&String> = properties.keys().collect();
        keys.sort();
        for key in keys {
            let value = &properties[key];
            match self.get(key) {
                Some(schema) => {
                    if *value == Value::Null && !schema.required {
                        continue;
                    }
                    schema
                        .attr_type
                        .collect_errors(&join_path(prefix, key), value, errors);
                }
                None => errors.push(ValidationError::new(
                    prefix,
                    TypeError::UnknownAttribute { name: key.clone() },
                )),
            }
        }
    }
}

/// Resource schema
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    /// CloudFormation type name (e.g., "AWS::Cassandra::Table")
    pub resource_type: String,
    pub properties: PropertySchema,
    /// Read-only attributes available through `Fn::GetAtt`
    pub attributes: Vec<String>,
    /// Whether the resource carries a standard `Tags` list
    pub taggable: bool,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>, properties: PropertySchema) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties,
            attributes: Vec::new(),
            taggable: false,
            description: None,
        }
    }

    pub fn with_attributes(mut self, attributes: &[&str]) -> Self {
        self.attributes = attributes.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_taggable(mut self, taggable: bool) -> Self {
        self.taggable = taggable;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Service namespace (e.g., "Cassandra" for "AWS::Cassandra::Table")
    pub fn service(&self) -> &str {
        self.resource_type.split("::").nth(1).unwrap_or_default()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    /// Validate resource properties
    pub fn validate(&self, properties: &HashMap<String, Value>) -> Result<(), Vec<ValidationError>> {
        log::debug!(
            "validating {} properties against {}",
            properties.len(),
            self.resource_type
        );
        self.properties.validate(properties)
    }
}
