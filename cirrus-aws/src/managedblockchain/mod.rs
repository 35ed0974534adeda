//! Amazon Managed Blockchain

pub mod member;
pub mod node;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use member::{Member, MemberProps};
pub use node::{Node, NodeProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![MemberProps::schema(), NodeProps::schema()]
}
