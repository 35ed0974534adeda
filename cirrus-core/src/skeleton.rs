//! Placeholder template entries built from resource schemas

use serde_json::{Map, Value, json};

use crate::schema::{AttributeType, PropertySchema, ResourceSchema};

/// Skeleton options
#[derive(Debug, Clone, Default)]
pub struct SkeletonOptions {
    /// Include optional properties, not only required ones
    pub include_optional: bool,
}

/// Build `{"Type": ..., "Properties": {...}}` for a resource schema
pub fn skeleton(schema: &ResourceSchema, options: &SkeletonOptions) -> Value {
    let mut entry = Map::new();
    entry.insert("Type".to_string(), json!(schema.resource_type));

    let properties = placeholder_properties(&schema.properties, options);
    if !properties.is_empty() {
        entry.insert("Properties".to_string(), Value::Object(properties));
    }
    Value::Object(entry)
}

/// Property map with a placeholder for each selected attribute
pub fn placeholder_properties(schema: &PropertySchema, options: &SkeletonOptions) -> Map<String, Value> {
    schema
        .attributes
        .iter()
        .filter(|a| a.required || options.include_optional)
        .map(|a| (a.key().to_string(), placeholder(a.key(), &a.attr_type, options)))
        .collect()
}

fn placeholder(name: &str, attr_type: &AttributeType, options: &SkeletonOptions) -> Value {
    match attr_type {
        AttributeType::String => json!(lower_first(name)),
        AttributeType::Int => json!(123),
        AttributeType::Float => json!(123.0),
        AttributeType::Bool => json!(false),
        AttributeType::Json => json!({}),
        AttributeType::List(inner) => json!([placeholder(name, inner, options)]),
        AttributeType::Map(inner) => json!({ "key": placeholder("value", inner, options) }),
        AttributeType::Struct(schema) => Value::Object(placeholder_properties(schema, options)),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeSchema;

    fn queue_schema() -> ResourceSchema {
        let policy = PropertySchema::new("Test::Queue.RedrivePolicy")
            .attribute(
                AttributeSchema::new("target_arn", AttributeType::String)
                    .required()
                    .with_provider_name("TargetArn"),
            )
            .attribute(
                AttributeSchema::new("max_receive_count", AttributeType::Int)
                    .with_provider_name("MaxReceiveCount"),
            );
        let properties = PropertySchema::new("Test::Queue")
            .attribute(
                AttributeSchema::new("queue_name", AttributeType::String)
                    .required()
                    .with_provider_name("QueueName"),
            )
            .attribute(
                AttributeSchema::new(
                    "redrive_policies",
                    AttributeType::List(Box::new(AttributeType::Struct(Box::new(policy)))),
                )
                .required()
                .with_provider_name("RedrivePolicies"),
            )
            .attribute(
                AttributeSchema::new("weight", AttributeType::Float).with_provider_name("Weight"),
            )
            .attribute(
                AttributeSchema::new("labels", AttributeType::Map(Box::new(AttributeType::Bool)))
                    .with_provider_name("Labels"),
            )
            .attribute(
                AttributeSchema::new("policy", AttributeType::Json).with_provider_name("Policy"),
            );
        ResourceSchema::new("Test::Queue", properties)
    }

    #[test]
    fn required_properties_only() {
        assert_eq!(
            skeleton(&queue_schema(), &SkeletonOptions::default()),
            json!({
                "Type": "Test::Queue",
                "Properties": {
                    "QueueName": "queueName",
                    "RedrivePolicies": [{ "TargetArn": "targetArn" }]
                }
            })
        );
    }

    #[test]
    fn all_properties() {
        let options = SkeletonOptions {
            include_optional: true,
        };
        assert_eq!(
            skeleton(&queue_schema(), &options),
            json!({
                "Type": "Test::Queue",
                "Properties": {
                    "QueueName": "queueName",
                    "RedrivePolicies": [{ "TargetArn": "targetArn", "MaxReceiveCount": 123 }],
                    "Weight": 123.0,
                    "Labels": { "key": false },
                    "Policy": {}
                }
            })
        );
    }

    #[test]
    fn empty_properties_are_omitted() {
        let schema = ResourceSchema::new("Test::Empty", PropertySchema::new("Test::Empty"));
        assert_eq!(
            skeleton(&schema, &SkeletonOptions::default()),
            json!({ "Type": "Test::Empty" })
        );
    }
}
