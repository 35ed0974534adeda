//! AWS::IVS::Channel

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of an Amazon IVS channel
    #[derive(Default)]
    pub struct ChannelProps("AWS::IVS::Channel"), builder ChannelPropsBuilder {
        required {}
        optional {
            /// Defaults to `false`
            authorized: bool => "Authorized",
            /// `NORMAL` or `LOW`
            latency_mode: String => "LatencyMode",
            name: String => "Name",
            /// An empty string disables recording
            recording_configuration_arn: String => "RecordingConfigurationArn",
            tags: Vec<CfnTag> => "Tags",
            /// `STANDARD` or `BASIC`
            r#type: String => "Type",
        }
    }
}

impl ChannelProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_INGEST_ENDPOINT: &'static str = "IngestEndpoint";
    pub const ATTR_PLAYBACK_URL: &'static str = "PlaybackUrl";
}

impl CfnProperties for ChannelProps {
    const RESOURCE_TYPE: &'static str = "AWS::IVS::Channel";
    const ATTRIBUTES: &'static [&'static str] = &[
        Self::ATTR_ARN,
        Self::ATTR_INGEST_ENDPOINT,
        Self::ATTR_PLAYBACK_URL,
    ];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("An Amazon IVS channel");
}

cirrus_core::impl_taggable!(ChannelProps);

pub type Channel = CfnResource<ChannelProps>;
