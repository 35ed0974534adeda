//! AWS::ManagedBlockchain::Node

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    pub struct NodeConfiguration("AWS::ManagedBlockchain::Node.NodeConfiguration"), builder NodeConfigurationBuilder {
        required {
            availability_zone: String => "AvailabilityZone",
            /// Such as `bc.t3.small`
            instance_type: String => "InstanceType",
        }
        optional {}
    }

    /// Properties of a peer node
    pub struct NodeProps("AWS::ManagedBlockchain::Node"), builder NodePropsBuilder {
        required {
            network_id: String => "NetworkId",
            node_configuration: NodeConfiguration => "NodeConfiguration",
        }
        optional {
            /// Hyperledger Fabric only
            member_id: String => "MemberId",
        }
    }
}

impl NodeProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_MEMBER_ID: &'static str = "MemberId";
    pub const ATTR_NETWORK_ID: &'static str = "NetworkId";
    pub const ATTR_NODE_ID: &'static str = "NodeId";
}

impl CfnProperties for NodeProps {
    const RESOURCE_TYPE: &'static str = "AWS::ManagedBlockchain::Node";
    const ATTRIBUTES: &'static [&'static str] = &[
        Self::ATTR_ARN,
        Self::ATTR_MEMBER_ID,
        Self::ATTR_NETWORK_ID,
        Self::ATTR_NODE_ID,
    ];
    const DESCRIPTION: Option<&'static str> = Some("A peer node of a Managed Blockchain member");
}

pub type Node = CfnResource<NodeProps>;
