//! AWS::Route53RecoveryReadiness::ReadinessCheck

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of a readiness check on a resource set
    pub struct ReadinessCheckProps("AWS::Route53RecoveryReadiness::ReadinessCheck"), builder ReadinessCheckPropsBuilder {
        required {
            readiness_check_name: String => "ReadinessCheckName",
        }
        optional {
            resource_set_name: String => "ResourceSetName",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl ReadinessCheckProps {
    pub const ATTR_READINESS_CHECK_ARN: &'static str = "ReadinessCheckArn";
}

impl CfnProperties for ReadinessCheckProps {
    const RESOURCE_TYPE: &'static str = "AWS::Route53RecoveryReadiness::ReadinessCheck";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_READINESS_CHECK_ARN];
    const TAGGABLE: bool = true;
}

cirrus_core::impl_taggable!(ReadinessCheckProps);

pub type ReadinessCheck = CfnResource<ReadinessCheckProps>;
