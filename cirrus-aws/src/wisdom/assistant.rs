//! AWS::Wisdom::Assistant

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    #[derive(Default)]
    pub struct ServerSideEncryptionConfiguration("AWS::Wisdom::Assistant.ServerSideEncryptionConfiguration"), builder ServerSideEncryptionConfigurationBuilder {
        required {}
        optional {
            kms_key_id: String => "KmsKeyId",
        }
    }

    /// Properties of an Amazon Connect Wisdom assistant
    pub struct AssistantProps("AWS::Wisdom::Assistant"), builder AssistantPropsBuilder {
        required {
            name: String => "Name",
            /// `AGENT`
            r#type: String => "Type",
        }
        optional {
            description: String => "Description",
            server_side_encryption_configuration: ServerSideEncryptionConfiguration => "ServerSideEncryptionConfiguration",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl AssistantProps {
    pub const ATTR_ASSISTANT_ARN: &'static str = "AssistantArn";
    pub const ATTR_ASSISTANT_ID: &'static str = "AssistantId";
}

impl CfnProperties for AssistantProps {
    const RESOURCE_TYPE: &'static str = "AWS::Wisdom::Assistant";
    const ATTRIBUTES: &'static [&'static str] =
        &[Self::ATTR_ASSISTANT_ARN, Self::ATTR_ASSISTANT_ID];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("An Amazon Connect Wisdom assistant");
}

cirrus_core::impl_taggable!(AssistantProps);

pub type Assistant = CfnResource<AssistantProps>;
