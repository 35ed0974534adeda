//! AWS Audit Manager

pub mod assessment;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use assessment::{Assessment, AssessmentProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![AssessmentProps::schema()]
}
