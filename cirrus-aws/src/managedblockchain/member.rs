//! AWS::ManagedBlockchain::Member

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Voting rules for proposals
    #[derive(Default)]
    pub struct ApprovalThresholdPolicy("AWS::ManagedBlockchain::Member.ApprovalThresholdPolicy"), builder ApprovalThresholdPolicyBuilder {
        required {}
        optional {
            proposal_duration_in_hours: i64 => "ProposalDurationInHours",
            /// `GREATER_THAN` or `GREATER_THAN_OR_EQUAL_TO`
            threshold_comparator: String => "ThresholdComparator",
            threshold_percentage: i64 => "ThresholdPercentage",
        }
    }

    pub struct MemberConfiguration("AWS::ManagedBlockchain::Member.MemberConfiguration"), builder MemberConfigurationBuilder {
        required {
            name: String => "Name",
        }
        optional {
            description: String => "Description",
            member_framework_configuration: MemberFrameworkConfiguration => "MemberFrameworkConfiguration",
        }
    }

    /// Initial administrative user of a Hyperledger Fabric member
    pub struct MemberFabricConfiguration("AWS::ManagedBlockchain::Member.MemberFabricConfiguration"), builder MemberFabricConfigurationBuilder {
        required {
            admin_password: String => "AdminPassword",
            admin_username: String => "AdminUsername",
        }
        optional {}
    }

    #[derive(Default)]
    pub struct MemberFrameworkConfiguration("AWS::ManagedBlockchain::Member.MemberFrameworkConfiguration"), builder MemberFrameworkConfigurationBuilder {
        required {}
        optional {
            member_fabric_configuration: MemberFabricConfiguration => "MemberFabricConfiguration",
        }
    }

    /// Network to create along with the first member
    pub struct NetworkConfiguration("AWS::ManagedBlockchain::Member.NetworkConfiguration"), builder NetworkConfigurationBuilder {
        required {
            /// Such as `HYPERLEDGER_FABRIC`
            framework: String => "Framework",
            framework_version: String => "FrameworkVersion",
            name: String => "Name",
            voting_policy: VotingPolicy => "VotingPolicy",
        }
        optional {
            description: String => "Description",
            network_framework_configuration: NetworkFrameworkConfiguration => "NetworkFrameworkConfiguration",
        }
    }

    pub struct NetworkFabricConfiguration("AWS::ManagedBlockchain::Member.NetworkFabricConfiguration"), builder NetworkFabricConfigurationBuilder {
        required {
            /// `STANDARD` or `STARTER`
            edition: String => "Edition",
        }
        optional {}
    }

    #[derive(Default)]
    pub struct NetworkFrameworkConfiguration("AWS::ManagedBlockchain::Member.NetworkFrameworkConfiguration"), builder NetworkFrameworkConfigurationBuilder {
        required {}
        optional {
            network_fabric_configuration: NetworkFabricConfiguration => "NetworkFabricConfiguration",
        }
    }

    #[derive(Default)]
    pub struct VotingPolicy("AWS::ManagedBlockchain::Member.VotingPolicy"), builder VotingPolicyBuilder {
        required {}
        optional {
            approval_threshold_policy: ApprovalThresholdPolicy => "ApprovalThresholdPolicy",
        }
    }

    /// Properties of a member of a Managed Blockchain network
    pub struct MemberProps("AWS::ManagedBlockchain::Member"), builder MemberPropsBuilder {
        required {
            member_configuration: MemberConfiguration => "MemberConfiguration",
        }
        optional {
            /// Invitation to join an existing network
            invitation_id: String => "InvitationId",
            /// Creates a new network when set
            network_configuration: NetworkConfiguration => "NetworkConfiguration",
            network_id: String => "NetworkId",
        }
    }
}

impl MemberProps {
    pub const ATTR_MEMBER_ID: &'static str = "MemberId";
    pub const ATTR_NETWORK_ID: &'static str = "NetworkId";
}

impl CfnProperties for MemberProps {
    const RESOURCE_TYPE: &'static str = "AWS::ManagedBlockchain::Member";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_MEMBER_ID, Self::ATTR_NETWORK_ID];
    const DESCRIPTION: Option<&'static str> =
        Some("A member of an Amazon Managed Blockchain network");
}

pub type Member = CfnResource<MemberProps>;
