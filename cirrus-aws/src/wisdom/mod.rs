//! Amazon Connect Wisdom

pub mod assistant;
pub mod assistant_association;
pub mod knowledge_base;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use assistant::{Assistant, AssistantProps};
pub use assistant_association::{AssistantAssociation, AssistantAssociationProps};
pub use knowledge_base::{KnowledgeBase, KnowledgeBaseProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        AssistantProps::schema(),
        AssistantAssociationProps::schema(),
        KnowledgeBaseProps::schema(),
    ]
}
