//! Cirrus Core
//!
//! Core library for typed CloudFormation resource records: untyped values,
//! schemas and validation, and the record traits resource catalogs build on

pub mod record;
pub mod resource;
pub mod schema;
pub mod skeleton;
pub mod tag;
pub mod template;

pub use record::{BuildError, CfnProperties, CfnResource, CfnType, RecordError};
pub use tag::{CfnTag, Taggable};
