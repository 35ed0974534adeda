//! AWS::LicenseManager::Grant

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Properties of a License Manager grant
    #[derive(Default)]
    pub struct GrantProps("AWS::LicenseManager::Grant"), builder GrantPropsBuilder {
        required {}
        optional {
            allowed_operations: Vec<String> => "AllowedOperations",
            grant_name: String => "GrantName",
            home_region: String => "HomeRegion",
            license_arn: String => "LicenseArn",
            principals: Vec<String> => "Principals",
            status: String => "Status",
        }
    }
}

impl GrantProps {
    pub const ATTR_GRANT_ARN: &'static str = "GrantArn";
    pub const ATTR_VERSION: &'static str = "Version";
}

impl CfnProperties for GrantProps {
    const RESOURCE_TYPE: &'static str = "AWS::LicenseManager::Grant";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_GRANT_ARN, Self::ATTR_VERSION];
    const DESCRIPTION: Option<&'static str> = Some("A grant of a license to a principal");
}

pub type Grant = CfnResource<GrantProps>;
