//! AWS Directory Service

pub mod microsoft_ad;
pub mod simple_ad;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use microsoft_ad::{MicrosoftAD, MicrosoftADProps};
pub use simple_ad::{SimpleAD, SimpleADProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![MicrosoftADProps::schema(), SimpleADProps::schema()]
}
