//! AWS::Macie::Session

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Properties of the Amazon Macie session of an account
    #[derive(Default)]
    pub struct SessionProps("AWS::Macie::Session"), builder SessionPropsBuilder {
        required {}
        optional {
            /// `FIFTEEN_MINUTES`, `ONE_HOUR` or `SIX_HOURS`
            finding_publishing_frequency: String => "FindingPublishingFrequency",
            /// `ENABLED` or `PAUSED`
            status: String => "Status",
        }
    }
}

impl SessionProps {
    pub const ATTR_AWS_ACCOUNT_ID: &'static str = "AwsAccountId";
    pub const ATTR_SERVICE_ROLE: &'static str = "ServiceRole";
}

impl CfnProperties for SessionProps {
    const RESOURCE_TYPE: &'static str = "AWS::Macie::Session";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_AWS_ACCOUNT_ID, Self::ATTR_SERVICE_ROLE];
}

pub type Session = CfnResource<SessionProps>;
