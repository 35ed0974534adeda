//! Amazon Macie

pub mod custom_data_identifier;
pub mod findings_filter;
pub mod session;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use custom_data_identifier::{CustomDataIdentifier, CustomDataIdentifierProps};
pub use findings_filter::{FindingsFilter, FindingsFilterProps};
pub use session::{Session, SessionProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        CustomDataIdentifierProps::schema(),
        FindingsFilterProps::schema(),
        SessionProps::schema(),
    ]
}
