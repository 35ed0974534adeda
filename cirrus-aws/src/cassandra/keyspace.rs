//! AWS::Cassandra::Keyspace

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of an Amazon Keyspaces keyspace
    #[derive(Default)]
    pub struct KeyspaceProps("AWS::Cassandra::Keyspace"), builder KeyspacePropsBuilder {
        required {}
        optional {
            /// Case sensitive. Generated by CloudFormation when absent.
            keyspace_name: String => "KeyspaceName",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl CfnProperties for KeyspaceProps {
    const RESOURCE_TYPE: &'static str = "AWS::Cassandra::Keyspace";
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("A keyspace in Amazon Keyspaces");
}

cirrus_core::impl_taggable!(KeyspaceProps);

pub type Keyspace = CfnResource<KeyspaceProps>;
