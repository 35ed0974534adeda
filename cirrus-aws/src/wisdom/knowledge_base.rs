//! AWS::Wisdom::KnowledgeBase

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Amazon AppIntegrations source that content is ingested from
    pub struct AppIntegrationsConfiguration("AWS::Wisdom::KnowledgeBase.AppIntegrationsConfiguration"), builder AppIntegrationsConfigurationBuilder {
        required {
            app_integration_arn: String => "AppIntegrationArn",
            /// Source fields made available to agents
            object_fields: Vec<String> => "ObjectFields",
        }
        optional {}
    }

    #[derive(Default)]
    pub struct RenderingConfiguration("AWS::Wisdom::KnowledgeBase.RenderingConfiguration"), builder RenderingConfigurationBuilder {
        required {}
        optional {
            /// URI template with exactly one `${variableName}`
            template_uri: String => "TemplateUri",
        }
    }

    #[derive(Default)]
    pub struct ServerSideEncryptionConfiguration("AWS::Wisdom::KnowledgeBase.ServerSideEncryptionConfiguration"), builder ServerSideEncryptionConfigurationBuilder {
        required {}
        optional {
            kms_key_id: String => "KmsKeyId",
        }
    }

    #[derive(Default)]
    pub struct SourceConfiguration("AWS::Wisdom::KnowledgeBase.SourceConfiguration"), builder SourceConfigurationBuilder {
        required {}
        optional {
            app_integrations: AppIntegrationsConfiguration => "AppIntegrations",
        }
    }

    /// Properties of a Wisdom knowledge base
    pub struct KnowledgeBaseProps("AWS::Wisdom::KnowledgeBase"), builder KnowledgeBasePropsBuilder {
        required {
            /// `EXTERNAL` or `CUSTOM`
            knowledge_base_type: String => "KnowledgeBaseType",
            name: String => "Name",
        }
        optional {
            description: String => "Description",
            rendering_configuration: RenderingConfiguration => "RenderingConfiguration",
            server_side_encryption_configuration: ServerSideEncryptionConfiguration => "ServerSideEncryptionConfiguration",
            /// Only for `EXTERNAL` knowledge bases
            source_configuration: SourceConfiguration => "SourceConfiguration",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl KnowledgeBaseProps {
    pub const ATTR_KNOWLEDGE_BASE_ARN: &'static str = "KnowledgeBaseArn";
    pub const ATTR_KNOWLEDGE_BASE_ID: &'static str = "KnowledgeBaseId";
}

impl CfnProperties for KnowledgeBaseProps {
    const RESOURCE_TYPE: &'static str = "AWS::Wisdom::KnowledgeBase";
    const ATTRIBUTES: &'static [&'static str] =
        &[Self::ATTR_KNOWLEDGE_BASE_ARN, Self::ATTR_KNOWLEDGE_BASE_ID];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("An Amazon Connect Wisdom knowledge base");
}

cirrus_core::impl_taggable!(KnowledgeBaseProps);

pub type KnowledgeBase = CfnResource<KnowledgeBaseProps>;
