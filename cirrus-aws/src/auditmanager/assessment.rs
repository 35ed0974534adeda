//! AWS::AuditManager::Assessment

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// AWS account details such as account ID and email address
    #[derive(Default)]
    pub struct AWSAccount("AWS::AuditManager::Assessment.AWSAccount"), builder AWSAccountBuilder {
        required {}
        optional {
            email_address: String => "EmailAddress",
            id: String => "Id",
            name: String => "Name",
        }
    }

    #[derive(Default)]
    pub struct AWSService("AWS::AuditManager::Assessment.AWSService"), builder AWSServiceBuilder {
        required {}
        optional {
            service_name: String => "ServiceName",
        }
    }

    /// Location assessment reports are saved to
    #[derive(Default)]
    pub struct AssessmentReportsDestination("AWS::AuditManager::Assessment.AssessmentReportsDestination"), builder AssessmentReportsDestinationBuilder {
        required {}
        optional {
            destination: String => "Destination",
            /// Such as `S3`
            destination_type: String => "DestinationType",
        }
    }

    /// Assignment of a control set to a delegate for review
    #[derive(Default)]
    pub struct Delegation("AWS::AuditManager::Assessment.Delegation"), builder DelegationBuilder {
        required {}
        optional {
            assessment_id: String => "AssessmentId",
            assessment_name: String => "AssessmentName",
            comment: String => "Comment",
            control_set_id: String => "ControlSetId",
            created_by: String => "CreatedBy",
            /// Epoch seconds
            creation_time: f64 => "CreationTime",
            id: String => "Id",
            /// Epoch seconds
            last_updated: f64 => "LastUpdated",
            role_arn: String => "RoleArn",
            role_type: String => "RoleType",
            status: String => "Status",
        }
    }

    #[derive(Default)]
    pub struct Role("AWS::AuditManager::Assessment.Role"), builder RoleBuilder {
        required {}
        optional {
            role_arn: String => "RoleArn",
            /// `PROCESS_OWNER` or `RESOURCE_OWNER`
            role_type: String => "RoleType",
        }
    }

    /// AWS accounts and services in scope for the assessment
    #[derive(Default)]
    pub struct Scope("AWS::AuditManager::Assessment.Scope"), builder ScopeBuilder {
        required {}
        optional {
            aws_accounts: Vec<AWSAccount> => "AwsAccounts",
            aws_services: Vec<AWSService> => "AwsServices",
        }
    }

    /// Properties of an Audit Manager assessment
    #[derive(Default)]
    pub struct AssessmentProps("AWS::AuditManager::Assessment"), builder AssessmentPropsBuilder {
        required {}
        optional {
            assessment_reports_destination: AssessmentReportsDestination => "AssessmentReportsDestination",
            aws_account: AWSAccount => "AwsAccount",
            description: String => "Description",
            framework_id: String => "FrameworkId",
            name: String => "Name",
            roles: Vec<Role> => "Roles",
            scope: Scope => "Scope",
            /// `ACTIVE` or `INACTIVE`
            status: String => "Status",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl AssessmentProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_ASSESSMENT_ID: &'static str = "AssessmentId";
    pub const ATTR_CREATION_TIME: &'static str = "CreationTime";
    pub const ATTR_DELEGATIONS: &'static str = "Delegations";
}

impl CfnProperties for AssessmentProps {
    const RESOURCE_TYPE: &'static str = "AWS::AuditManager::Assessment";
    const ATTRIBUTES: &'static [&'static str] = &[
        Self::ATTR_ARN,
        Self::ATTR_ASSESSMENT_ID,
        Self::ATTR_CREATION_TIME,
        Self::ATTR_DELEGATIONS,
    ];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("An AWS Audit Manager assessment");
}

cirrus_core::impl_taggable!(AssessmentProps);

pub type Assessment = CfnResource<AssessmentProps>;
