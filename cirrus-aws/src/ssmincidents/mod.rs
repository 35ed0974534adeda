//! AWS Systems Manager Incident Manager

pub mod replication_set;
pub mod response_plan;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use replication_set::{ReplicationSet, ReplicationSetProps};
pub use response_plan::{ResponsePlan, ResponsePlanProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![ReplicationSetProps::schema(), ResponsePlanProps::schema()]
}
