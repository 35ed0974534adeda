//! Amazon Keyspaces (for Apache Cassandra)

pub mod keyspace;
pub mod table;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use keyspace::{Keyspace, KeyspaceProps};
pub use table::{Table, TableProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![KeyspaceProps::schema(), TableProps::schema()]
}
