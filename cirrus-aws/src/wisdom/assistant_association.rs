//! AWS::Wisdom::AssistantAssociation

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Identifier of the associated resource
    pub struct AssociationData("AWS::Wisdom::AssistantAssociation.AssociationData"), builder AssociationDataBuilder {
        required {
            knowledge_base_id: String => "KnowledgeBaseId",
        }
        optional {}
    }

    /// Properties of an association between an assistant and a knowledge base
    pub struct AssistantAssociationProps("AWS::Wisdom::AssistantAssociation"), builder AssistantAssociationPropsBuilder {
        required {
            assistant_id: String => "AssistantId",
            association: AssociationData => "Association",
            /// `KNOWLEDGE_BASE`
            association_type: String => "AssociationType",
        }
        optional {
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl AssistantAssociationProps {
    pub const ATTR_ASSISTANT_ARN: &'static str = "AssistantArn";
    pub const ATTR_ASSISTANT_ASSOCIATION_ARN: &'static str = "AssistantAssociationArn";
    pub const ATTR_ASSISTANT_ASSOCIATION_ID: &'static str = "AssistantAssociationId";
}

impl CfnProperties for AssistantAssociationProps {
    const RESOURCE_TYPE: &'static str = "AWS::Wisdom::AssistantAssociation";
    const ATTRIBUTES: &'static [&'static str] = &[
        Self::ATTR_ASSISTANT_ARN,
        Self::ATTR_ASSISTANT_ASSOCIATION_ARN,
        Self::ATTR_ASSISTANT_ASSOCIATION_ID,
    ];
    const TAGGABLE: bool = true;
}

cirrus_core::impl_taggable!(AssistantAssociationProps);

pub type AssistantAssociation = CfnResource<AssistantAssociationProps>;
