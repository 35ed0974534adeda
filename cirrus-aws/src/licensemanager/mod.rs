//! AWS License Manager

pub mod grant;
pub mod license;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use grant::{Grant, GrantProps};
pub use license::{License, LicenseProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![GrantProps::schema(), LicenseProps::schema()]
}
