//! AWS::IVS::RecordingConfiguration

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Where recorded video is stored
    pub struct DestinationConfiguration("AWS::IVS::RecordingConfiguration.DestinationConfiguration"), builder DestinationConfigurationBuilder {
        required {
            s3: S3DestinationConfiguration => "S3",
        }
        optional {}
    }

    pub struct S3DestinationConfiguration("AWS::IVS::RecordingConfiguration.S3DestinationConfiguration"), builder S3DestinationConfigurationBuilder {
        required {
            bucket_name: String => "BucketName",
        }
        optional {}
    }

    /// Thumbnail generation for recorded video
    pub struct ThumbnailConfiguration("AWS::IVS::RecordingConfiguration.ThumbnailConfiguration"), builder ThumbnailConfigurationBuilder {
        required {
            /// `DISABLED` or `INTERVAL`
            recording_mode: String => "RecordingMode",
        }
        optional {
            /// Only used with `INTERVAL`
            target_interval_seconds: i64 => "TargetIntervalSeconds",
        }
    }

    /// Properties of a recording configuration
    pub struct RecordingConfigurationProps("AWS::IVS::RecordingConfiguration"), builder RecordingConfigurationPropsBuilder {
        required {
            destination_configuration: DestinationConfiguration => "DestinationConfiguration",
        }
        optional {
            name: String => "Name",
            tags: Vec<CfnTag> => "Tags",
            thumbnail_configuration: ThumbnailConfiguration => "ThumbnailConfiguration",
        }
    }
}

impl DestinationConfiguration {
    pub fn s3_bucket(bucket_name: impl Into<String>) -> Self {
        Self {
            s3: S3DestinationConfiguration {
                bucket_name: bucket_name.into(),
            },
        }
    }
}

impl RecordingConfigurationProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_STATE: &'static str = "State";
}

impl CfnProperties for RecordingConfigurationProps {
    const RESOURCE_TYPE: &'static str = "AWS::IVS::RecordingConfiguration";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN, Self::ATTR_STATE];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> =
        Some("Where and how recorded video of a channel is stored");
}

cirrus_core::impl_taggable!(RecordingConfigurationProps);

pub type RecordingConfiguration = CfnResource<RecordingConfigurationProps>;
