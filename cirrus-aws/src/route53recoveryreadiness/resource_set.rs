//! AWS::Route53RecoveryReadiness::ResourceSet

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// DNS/routing control component of a resource set
    #[derive(Default)]
    pub struct DNSTargetResource("AWS::Route53RecoveryReadiness::ResourceSet.DNSTargetResource"), builder DNSTargetResourceBuilder {
        required {}
        optional {
            /// Ingress point to a portion of the application
            domain_name: String => "DomainName",
            hosted_zone_arn: String => "HostedZoneArn",
            record_set_id: String => "RecordSetId",
            record_type: String => "RecordType",
            target_resource: TargetResource => "TargetResource",
        }
    }

    #[derive(Default)]
    pub struct NLBResource("AWS::Route53RecoveryReadiness::ResourceSet.NLBResource"), builder NLBResourceBuilder {
        required {}
        optional {
            arn: String => "Arn",
        }
    }

    #[derive(Default)]
    pub struct R53ResourceRecord("AWS::Route53RecoveryReadiness::ResourceSet.R53ResourceRecord"), builder R53ResourceRecordBuilder {
        required {}
        optional {
            domain_name: String => "DomainName",
            record_set_id: String => "RecordSetId",
        }
    }

    /// A resource element of a resource set
    #[derive(Default)]
    pub struct Resource("AWS::Route53RecoveryReadiness::ResourceSet.Resource"), builder ResourceBuilder {
        required {}
        optional {
            /// Generated when a DNS target resource is used
            component_id: String => "ComponentId",
            dns_target_resource: DNSTargetResource => "DnsTargetResource",
            /// Recovery group or cell ARNs
            readiness_scopes: Vec<String> => "ReadinessScopes",
            /// Required for every resource set type other than DNS target resources
            resource_arn: String => "ResourceArn",
        }
    }

    /// Resource the Route 53 record points to
    #[derive(Default)]
    pub struct TargetResource("AWS::Route53RecoveryReadiness::ResourceSet.TargetResource"), builder TargetResourceBuilder {
        required {}
        optional {
            nlb_resource: NLBResource => "NLBResource",
            r53_resource: R53ResourceRecord => "R53Resource",
        }
    }

    /// Properties of a set of resources checked for readiness together
    pub struct ResourceSetProps("AWS::Route53RecoveryReadiness::ResourceSet"), builder ResourceSetPropsBuilder {
        required {
            resources: Vec<Resource> => "Resources",
            resource_set_name: String => "ResourceSetName",
            /// Such as `AWS::DynamoDB::Table`
            resource_set_type: String => "ResourceSetType",
        }
        optional {
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl ResourceSetProps {
    pub const ATTR_RESOURCE_SET_ARN: &'static str = "ResourceSetArn";
}

impl CfnProperties for ResourceSetProps {
    const RESOURCE_TYPE: &'static str = "AWS::Route53RecoveryReadiness::ResourceSet";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_RESOURCE_SET_ARN];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> =
        Some("A set of resources checked for recovery readiness");
}

cirrus_core::impl_taggable!(ResourceSetProps);

pub type ResourceSet = CfnResource<ResourceSetProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dns_target_resource_names() {
        let props = ResourceSetProps::builder()
            .resource_set_name("ingress")
            .resource_set_type("AWS::Route53RecoveryReadiness::DNSTargetResource")
            .resources(vec![Resource {
                dns_target_resource: Some(DNSTargetResource {
                    domain_name: Some("example.com".to_string()),
                    target_resource: Some(TargetResource {
                        nlb_resource: Some(NLBResource {
                            arn: Some("arn:aws:elasticloadbalancing:nlb".to_string()),
                        }),
                        r53_resource: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }])
            .build()
            .unwrap();

        let json = props.to_properties().unwrap();
        assert_eq!(
            json["Resources"][0],
            json!({
                "DnsTargetResource": {
                    "DomainName": "example.com",
                    "TargetResource": {
                        "NLBResource": { "Arn": "arn:aws:elasticloadbalancing:nlb" }
                    }
                }
            })
        );
        assert_eq!(ResourceSetProps::from_properties(&json).unwrap(), props);
    }

    #[test]
    fn resources_are_required() {
        let err = ResourceSetProps::from_properties(&json!({
            "ResourceSetName": "tables",
            "ResourceSetType": "AWS::DynamoDB::Table"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Resources"));
    }
}
