//! AWS X-Ray
//!
//! X-Ray resources carry free-form JSON tags and do not implement
//! [`Taggable`](cirrus_core::Taggable).

pub mod group;
pub mod sampling_rule;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use group::{Group, GroupProps};
pub use sampling_rule::{SamplingRuleProps, SamplingRuleResource};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![GroupProps::schema(), SamplingRuleProps::schema()]
}
