//! Validation of template resources against the catalog schemas
//!
//! Resources of a type in the catalog are checked property by property.
//! Resources of any other type pass unless unknown types are denied.

use std::sync::LazyLock;

use cirrus_core::resource::Resource;
use cirrus_core::schema::ValidationError;
use cirrus_core::template::Template;
use regex::Regex;

use crate::find_schema;

static LOGICAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid logical id regex"));

/// Validation options
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Report resource types missing from the catalog as errors
    pub deny_unknown_types: bool,
}

/// A problem with one resource of a template
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    #[error("{logical_id}: logical id must be alphanumeric")]
    InvalidLogicalId { logical_id: String },

    #[error("{logical_id}: unknown resource type '{resource_type}'")]
    UnknownType {
        logical_id: String,
        resource_type: String,
    },

    #[error("{logical_id}: {error}")]
    Property {
        logical_id: String,
        error: ValidationError,
    },
}

/// Result type for validation
pub type ValidationResult = Result<(), Vec<ResourceError>>;

pub fn is_valid_logical_id(logical_id: &str) -> bool {
    LOGICAL_ID.is_match(logical_id)
}

/// Validate a single resource
pub fn validate_resource(resource: &Resource, options: &ValidateOptions) -> ValidationResult {
    let mut errors = Vec::new();
    let logical_id = &resource.id.logical_id;

    if !is_valid_logical_id(logical_id) {
        errors.push(ResourceError::InvalidLogicalId {
            logical_id: logical_id.clone(),
        });
    }

    match find_schema(&resource.id.resource_type) {
        Some(schema) => {
            if let Err(property_errors) = schema.validate(&resource.properties) {
                errors.extend(property_errors.into_iter().map(|error| ResourceError::Property {
                    logical_id: logical_id.clone(),
                    error,
                }));
            }
        }
        None if options.deny_unknown_types => errors.push(ResourceError::UnknownType {
            logical_id: logical_id.clone(),
            resource_type: resource.id.resource_type.clone(),
        }),
        None => {
            log::debug!(
                "skipping {}: {} is not in the catalog",
                logical_id,
                resource.id.resource_type
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate every resource of a template
pub fn validate_template(template: &Template, options: &ValidateOptions) -> ValidationResult {
    let mut errors = Vec::new();
    for resource in &template.resources {
        if let Err(resource_errors) = validate_resource(resource, options) {
            errors.extend(resource_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::CfnProperties;
    use cirrus_core::resource::Value;
    use std::collections::HashMap;

    fn column(name: &str) -> Value {
        Value::Map(HashMap::from([
            ("ColumnName".to_string(), Value::String(name.to_string())),
            ("ColumnType".to_string(), Value::String("text".to_string())),
        ]))
    }

    #[test]
    fn test_valid_table() {
        let resource = Resource::new("AWS::Cassandra::Table", "OrdersTable")
            .with_property("KeyspaceName", Value::Ref("OrdersKeyspace".to_string()))
            .with_property("PartitionKeyColumns", Value::List(vec![column("id")]));

        assert!(validate_resource(&resource, &ValidateOptions::default()).is_ok());
    }

    #[test]
    fn test_table_missing_partition_key_columns() {
        let resource = Resource::new("AWS::Cassandra::Table", "OrdersTable")
            .with_property("KeyspaceName", Value::String("orders".to_string()));

        let errors = validate_resource(&resource, &ValidateOptions::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "OrdersTable: Required property 'PartitionKeyColumns' is missing"
        );
    }

    #[test]
    fn test_whole_float_rejected_for_integer_property() {
        let resource = Resource::new("AWS::Cassandra::Table", "OrdersTable")
            .with_property("KeyspaceName", Value::String("orders".to_string()))
            .with_property("PartitionKeyColumns", Value::List(vec![column("id")]))
            .with_property("DefaultTimeToLive", Value::Float(5.0));

        let errors = validate_resource(&resource, &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "OrdersTable: DefaultTimeToLive: Type mismatch: expected Int, got Float"
        );
        assert!(
            crate::cassandra::TableProps::from_properties(&resource.properties_json()).is_err()
        );
    }

    #[test]
    fn test_nested_type_mismatch() {
        let resource = Resource::new("AWS::IVS::RecordingConfiguration", "Recording")
            .with_property(
                "DestinationConfiguration",
                Value::Map(HashMap::from([(
                    "S3".to_string(),
                    Value::Map(HashMap::from([(
                        "BucketName".to_string(),
                        Value::Bool(true),
                    )])),
                )])),
            );

        let errors = validate_resource(&resource, &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "Recording: DestinationConfiguration.S3.BucketName: Type mismatch: expected String, got Bool"
        );
    }

    #[test]
    fn test_unknown_type_passes_by_default() {
        let resource = Resource::new("AWS::S3::Bucket", "Bucket");
        assert!(validate_resource(&resource, &ValidateOptions::default()).is_ok());

        let options = ValidateOptions {
            deny_unknown_types: true,
        };
        let errors = validate_resource(&resource, &options).unwrap_err();
        assert!(matches!(errors[0], ResourceError::UnknownType { .. }));
    }

    #[test]
    fn test_logical_id_must_be_alphanumeric() {
        assert!(is_valid_logical_id("OrdersKeyspace1"));
        assert!(!is_valid_logical_id("orders-keyspace"));
        assert!(!is_valid_logical_id(""));

        let resource = Resource::new("AWS::Cassandra::Keyspace", "orders_keyspace");
        let errors = validate_resource(&resource, &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![ResourceError::InvalidLogicalId {
                logical_id: "orders_keyspace".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_template_collects_all_errors() {
        let template = Template::from_json(
            r#"{
                "Resources": {
                    "Keyspace": {
                        "Type": "AWS::Cassandra::Keyspace",
                        "Properties": { "KeyspaceName": "orders", "Replication": 3 }
                    },
                    "Key": {
                        "Type": "AWS::IVS::StreamKey",
                        "Properties": { "ChannelArn": { "Fn::GetAtt": ["Channel", "Arn"] } }
                    },
                    "Plan": {
                        "Type": "AWS::SSMIncidents::ResponsePlan",
                        "Properties": {
                            "Name": "orders",
                            "IncidentTemplate": { "Impact": "high", "Title": "Outage" }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let errors = validate_template(&template, &ValidateOptions::default()).unwrap_err();
        let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Keyspace: Unknown property 'Replication'".to_string(),
                "Plan: IncidentTemplate.Impact: Type mismatch: expected Int, got String"
                    .to_string(),
            ]
        );
    }
}
