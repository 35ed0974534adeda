//! AWS::SSMIncidents::ReplicationSet

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    pub struct RegionConfiguration("AWS::SSMIncidents::ReplicationSet.RegionConfiguration"), builder RegionConfigurationBuilder {
        required {
            sse_kms_key_id: String => "SseKmsKeyId",
        }
        optional {}
    }

    /// A Region and KMS key of the replication set
    #[derive(Default)]
    pub struct ReplicationRegion("AWS::SSMIncidents::ReplicationSet.ReplicationRegion"), builder ReplicationRegionBuilder {
        required {}
        optional {
            region_configuration: RegionConfiguration => "RegionConfiguration",
            region_name: String => "RegionName",
        }
    }

    /// Properties of the Incident Manager replication set
    pub struct ReplicationSetProps("AWS::SSMIncidents::ReplicationSet"), builder ReplicationSetPropsBuilder {
        required {
            regions: Vec<ReplicationRegion> => "Regions",
        }
        optional {
            /// Blocks deleting the last Region of the set
            deletion_protected: bool => "DeletionProtected",
        }
    }
}

impl ReplicationSetProps {
    pub const ATTR_ARN: &'static str = "Arn";
}

impl CfnProperties for ReplicationSetProps {
    const RESOURCE_TYPE: &'static str = "AWS::SSMIncidents::ReplicationSet";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN];
    const DESCRIPTION: Option<&'static str> = Some("The Incident Manager replication set");
}

pub type ReplicationSet = CfnResource<ReplicationSetProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replication_set_round_trip() {
        let props = ReplicationSetProps {
            regions: vec![
                ReplicationRegion {
                    region_name: Some("us-east-1".to_string()),
                    region_configuration: Some(RegionConfiguration {
                        sse_kms_key_id: "alias/incidents".to_string(),
                    }),
                },
                ReplicationRegion {
                    region_name: Some("us-west-2".to_string()),
                    ..Default::default()
                },
            ],
            deletion_protected: Some(true),
        };

        let json = props.to_properties().unwrap();
        assert_eq!(json["Regions"][1], json!({ "RegionName": "us-west-2" }));
        assert_eq!(ReplicationSetProps::from_properties(&json).unwrap(), props);
    }

    #[test]
    fn regions_are_required() {
        let err = ReplicationSetProps::builder()
            .deletion_protected(false)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("regions"));
    }
}
