//! AWS::Cassandra::Table

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Billing mode of a table: on-demand or provisioned
    pub struct BillingMode("AWS::Cassandra::Table.BillingMode"), builder BillingModeBuilder {
        required {
            /// `ON_DEMAND` or `PROVISIONED`
            mode: String => "Mode",
        }
        optional {
            /// Required when the mode is `PROVISIONED`
            provisioned_throughput: ProvisionedThroughput => "ProvisionedThroughput",
        }
    }

    /// A column within the clustering key
    pub struct ClusteringKeyColumn("AWS::Cassandra::Table.ClusteringKeyColumn"), builder ClusteringKeyColumnBuilder {
        required {
            column: Column => "Column",
        }
        optional {
            /// `ASC` (default) or `DESC`
            order_by: String => "OrderBy",
        }
    }

    /// Name and data type of a column
    pub struct Column("AWS::Cassandra::Table.Column"), builder ColumnBuilder {
        required {
            column_name: String => "ColumnName",
            column_type: String => "ColumnType",
        }
        optional {}
    }

    /// Encryption at rest option of a table
    pub struct EncryptionSpecification("AWS::Cassandra::Table.EncryptionSpecification"), builder EncryptionSpecificationBuilder {
        required {
            /// `AWS_OWNED_KMS_KEY` or `CUSTOMER_MANAGED_KMS_KEY`
            encryption_type: String => "EncryptionType",
        }
        optional {
            kms_key_identifier: String => "KmsKeyIdentifier",
        }
    }

    pub struct ProvisionedThroughput("AWS::Cassandra::Table.ProvisionedThroughput"), builder ProvisionedThroughputBuilder {
        required {
            read_capacity_units: i64 => "ReadCapacityUnits",
            write_capacity_units: i64 => "WriteCapacityUnits",
        }
        optional {}
    }

    /// Properties of an Amazon Keyspaces table
    pub struct TableProps("AWS::Cassandra::Table"), builder TablePropsBuilder {
        required {
            /// The keyspace must already exist
            keyspace_name: String => "KeyspaceName",
            partition_key_columns: Vec<Column> => "PartitionKeyColumns",
        }
        optional {
            billing_mode: BillingMode => "BillingMode",
            clustering_key_columns: Vec<ClusteringKeyColumn> => "ClusteringKeyColumns",
            /// Seconds
            default_time_to_live: i64 => "DefaultTimeToLive",
            encryption_specification: EncryptionSpecification => "EncryptionSpecification",
            point_in_time_recovery_enabled: bool => "PointInTimeRecoveryEnabled",
            regular_columns: Vec<Column> => "RegularColumns",
            table_name: String => "TableName",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl Column {
    pub fn new(column_name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            column_type: column_type.into(),
        }
    }
}

impl CfnProperties for TableProps {
    const RESOURCE_TYPE: &'static str = "AWS::Cassandra::Table";
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("A table in an Amazon Keyspaces keyspace");
}

cirrus_core::impl_taggable!(TableProps);

pub type Table = CfnResource<TableProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::BuildError;
    use serde_json::json;

    fn minimal() -> TableProps {
        TableProps::builder()
            .keyspace_name("orders")
            .partition_key_columns(vec![Column::new("id", "text")])
            .build()
            .unwrap()
    }

    #[test]
    fn required_fields_only() {
        let props = minimal();
        assert_eq!(props.keyspace_name, "orders");
        assert_eq!(props.billing_mode, None);
        assert_eq!(props.clustering_key_columns, None);
        assert_eq!(props.default_time_to_live, None);
        assert_eq!(props.tags, None);
    }

    #[test]
    fn missing_partition_key_columns() {
        let err = TableProps::builder()
            .keyspace_name("orders")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingRequired {
                record: "AWS::Cassandra::Table",
                field: "partition_key_columns"
            }
        );

        let err = TableProps::from_properties(&json!({ "KeyspaceName": "orders" })).unwrap_err();
        assert!(err.to_string().contains("PartitionKeyColumns"));
    }

    #[test]
    fn equality_is_structural() {
        let mut other = minimal();
        assert_eq!(minimal(), other);

        other.default_time_to_live = Some(3600);
        assert_ne!(minimal(), other);
    }

    #[test]
    fn provisioned_table_round_trip() {
        let mut props = minimal();
        props.billing_mode = Some(BillingMode {
            mode: "PROVISIONED".to_string(),
            provisioned_throughput: Some(ProvisionedThroughput {
                read_capacity_units: 5,
                write_capacity_units: 10,
            }),
        });
        props.clustering_key_columns = Some(vec![ClusteringKeyColumn {
            column: Column::new("created_at", "timestamp"),
            order_by: Some("DESC".to_string()),
        }]);
        props.point_in_time_recovery_enabled = Some(true);

        let json = props.to_properties().unwrap();
        assert_eq!(
            json,
            json!({
                "KeyspaceName": "orders",
                "PartitionKeyColumns": [{ "ColumnName": "id", "ColumnType": "text" }],
                "BillingMode": {
                    "Mode": "PROVISIONED",
                    "ProvisionedThroughput": { "ReadCapacityUnits": 5, "WriteCapacityUnits": 10 }
                },
                "ClusteringKeyColumns": [{
                    "Column": { "ColumnName": "created_at", "ColumnType": "timestamp" },
                    "OrderBy": "DESC"
                }],
                "PointInTimeRecoveryEnabled": true
            })
        );
        assert_eq!(TableProps::from_properties(&json).unwrap(), props);
    }

    #[test]
    fn schema_marks_required_properties() {
        let schema = TableProps::schema();
        let required: Vec<&str> = schema
            .properties
            .required_attributes()
            .map(|a| a.key())
            .collect();
        assert_eq!(required, vec!["KeyspaceName", "PartitionKeyColumns"]);
    }
}
