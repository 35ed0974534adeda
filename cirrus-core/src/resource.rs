//! Resource - Untyped CloudFormation resources and property values

use std::collections::HashMap;

/// Unique identifier for a resource within a template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// CloudFormation type name (e.g., "AWS::Cassandra::Table")
    pub resource_type: String,
    /// Logical id of the resource in the template
    pub logical_id: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, logical_id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            logical_id: logical_id.into(),
        }
    }
}

/// Property value of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    /// `{"Ref": logical_id}`
    Ref(String),
    /// `{"Fn::GetAtt": [logical_id, attribute_name]}`
    GetAtt(String, String),
    /// Any other intrinsic function, kept opaque (function name, argument)
    Intrinsic(String, Box<Value>),
}

impl Value {
    /// Returns true for values that are only resolved at deployment time
    pub fn is_intrinsic(&self) -> bool {
        matches!(
            self,
            Value::Ref(_) | Value::GetAtt(_, _) | Value::Intrinsic(_, _)
        )
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Int(_) => "Int".to_string(),
            Value::Float(_) => "Float".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::Null => "Null".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Map(_) => "Map".to_string(),
            Value::Ref(target) => format!("Ref({})", target),
            Value::GetAtt(target, attr) => format!("GetAtt({}.{})", target, attr),
            Value::Intrinsic(name, _) => name.clone(),
        }
    }

    /// Convert from JSON, recognising intrinsic function objects
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => {
                if map.len() == 1
                    && let Some((key, arg)) = map.iter().next()
                    && let Some(intrinsic) = intrinsic_from_json(key, arg)
                {
                    return intrinsic;
                }
                Value::Map(
                    map.iter()
                        .map(|(k, v)| (k.clone(), Value::from_json(v)))
                        .collect(),
                )
            }
        }
    }

    /// Convert to JSON in CloudFormation template form
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Value::String(s) => json!(s),
            Value::Int(i) => json!(i),
            Value::Float(f) => json!(f),
            Value::Bool(b) => json!(b),
            Value::Null => serde_json::Value::Null,
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Ref(target) => json!({ "Ref": target }),
            Value::GetAtt(target, attr) => json!({ "Fn::GetAtt": [target, attr] }),
            Value::Intrinsic(name, arg) => {
                let mut object = serde_json::Map::new();
                object.insert(name.clone(), arg.to_json());
                serde_json::Value::Object(object)
            }
        }
    }
}

fn intrinsic_from_json(key: &str, arg: &serde_json::Value) -> Option<Value> {
    match (key, arg) {
        ("Ref", serde_json::Value::String(target)) => Some(Value::Ref(target.clone())),
        ("Fn::GetAtt", serde_json::Value::Array(parts)) if parts.len() == 2 => {
            match (&parts[0], &parts[1]) {
                (serde_json::Value::String(target), serde_json::Value::String(attr)) => {
                    Some(Value::GetAtt(target.clone(), attr.clone()))
                }
                _ => Some(Value::Intrinsic(key.to_string(), Box::new(Value::from_json(arg)))),
            }
        }
        _ if key.starts_with("Fn::") || key == "Condition" => Some(Value::Intrinsic(
            key.to_string(),
            Box::new(Value::from_json(arg)),
        )),
        _ => None,
    }
}

/// A resource entry of a template, with its properties kept untyped
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub properties: HashMap<String, Value>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, logical_id: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(resource_type, logical_id),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Properties as a JSON object
    pub fn properties_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.properties
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    /// Render the `{"Type": ..., "Properties": ...}` entry for this resource.
    /// `Properties` is omitted when empty.
    pub fn to_json(&self) -> serde_json::Value {
        let mut entry = serde_json::Map::new();
        entry.insert(
            "Type".to_string(),
            serde_json::Value::String(self.id.resource_type.clone()),
        );
        if !self.properties.is_empty() {
            entry.insert("Properties".to_string(), self.properties_json());
        }
        serde_json::Value::Object(entry)
    }
}
