//! Amazon Route 53 Application Recovery Controller readiness checks

pub mod cell;
pub mod readiness_check;
pub mod recovery_group;
pub mod resource_set;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use cell::{Cell, CellProps};
pub use readiness_check::{ReadinessCheck, ReadinessCheckProps};
pub use recovery_group::{RecoveryGroup, RecoveryGroupProps};
pub use resource_set::{ResourceSet, ResourceSetProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        CellProps::schema(),
        ReadinessCheckProps::schema(),
        RecoveryGroupProps::schema(),
        ResourceSetProps::schema(),
    ]
}
