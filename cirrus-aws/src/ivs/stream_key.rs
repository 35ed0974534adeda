//! AWS::IVS::StreamKey

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of a stream key
    pub struct StreamKeyProps("AWS::IVS::StreamKey"), builder StreamKeyPropsBuilder {
        required {
            channel_arn: String => "ChannelArn",
        }
        optional {
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl StreamKeyProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_VALUE: &'static str = "Value";
}

impl CfnProperties for StreamKeyProps {
    const RESOURCE_TYPE: &'static str = "AWS::IVS::StreamKey";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN, Self::ATTR_VALUE];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("A stream key used to broadcast to a channel");
}

cirrus_core::impl_taggable!(StreamKeyProps);

pub type StreamKey = CfnResource<StreamKeyProps>;
