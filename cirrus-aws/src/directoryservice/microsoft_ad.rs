//! AWS::DirectoryService::MicrosoftAD

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// VPC the directory servers are placed in
    pub struct VpcSettings("AWS::DirectoryService::MicrosoftAD.VpcSettings"), builder VpcSettingsBuilder {
        required {
            /// Two subnets in different Availability Zones
            subnet_ids: Vec<String> => "SubnetIds",
            vpc_id: String => "VpcId",
        }
        optional {}
    }

    /// Properties of an AWS Managed Microsoft AD directory
    pub struct MicrosoftADProps("AWS::DirectoryService::MicrosoftAD"), builder MicrosoftADPropsBuilder {
        required {
            /// Fully qualified domain name, such as `corp.example.com`
            name: String => "Name",
            /// Password of the default `Admin` user
            password: String => "Password",
            vpc_settings: VpcSettings => "VpcSettings",
        }
        optional {
            create_alias: bool => "CreateAlias",
            /// `Standard` or `Enterprise` (default)
            edition: String => "Edition",
            enable_sso: bool => "EnableSso",
            short_name: String => "ShortName",
        }
    }
}

impl MicrosoftADProps {
    pub const ATTR_ALIAS: &'static str = "Alias";
    pub const ATTR_DNS_IP_ADDRESSES: &'static str = "DnsIpAddresses";
}

impl CfnProperties for MicrosoftADProps {
    const RESOURCE_TYPE: &'static str = "AWS::DirectoryService::MicrosoftAD";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ALIAS, Self::ATTR_DNS_IP_ADDRESSES];
    const DESCRIPTION: Option<&'static str> = Some("An AWS Managed Microsoft AD directory");
}

pub type MicrosoftAD = CfnResource<MicrosoftADProps>;
