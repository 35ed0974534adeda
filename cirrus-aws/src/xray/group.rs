//! AWS::XRay::Group

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    #[derive(Default)]
    pub struct InsightsConfiguration("AWS::XRay::Group.InsightsConfiguration"), builder InsightsConfigurationBuilder {
        required {}
        optional {
            insights_enabled: bool => "InsightsEnabled",
            /// Only takes effect with insights enabled
            notifications_enabled: bool => "NotificationsEnabled",
        }
    }

    /// Properties of an X-Ray group of traces
    #[derive(Default)]
    pub struct GroupProps("AWS::XRay::Group"), builder GroupPropsBuilder {
        required {}
        optional {
            filter_expression: String => "FilterExpression",
            group_name: String => "GroupName",
            insights_configuration: InsightsConfiguration => "InsightsConfiguration",
            /// Free-form tag objects
            tags: Vec<serde_json::Value> => "Tags",
        }
    }
}

impl GroupProps {
    pub const ATTR_GROUP_ARN: &'static str = "GroupARN";
}

impl CfnProperties for GroupProps {
    const RESOURCE_TYPE: &'static str = "AWS::XRay::Group";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_GROUP_ARN];
    const DESCRIPTION: Option<&'static str> = Some("A group of traces selected by a filter expression");
}

pub type Group = CfnResource<GroupProps>;
