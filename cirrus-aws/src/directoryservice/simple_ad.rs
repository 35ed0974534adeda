//! AWS::DirectoryService::SimpleAD

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    pub struct VpcSettings("AWS::DirectoryService::SimpleAD.VpcSettings"), builder VpcSettingsBuilder {
        required {
            subnet_ids: Vec<String> => "SubnetIds",
            vpc_id: String => "VpcId",
        }
        optional {}
    }

    /// Properties of a Simple AD directory
    pub struct SimpleADProps("AWS::DirectoryService::SimpleAD"), builder SimpleADPropsBuilder {
        required {
            name: String => "Name",
            password: String => "Password",
            /// `Small` or `Large`
            size: String => "Size",
            vpc_settings: VpcSettings => "VpcSettings",
        }
        optional {
            create_alias: bool => "CreateAlias",
            description: String => "Description",
            enable_sso: bool => "EnableSso",
            short_name: String => "ShortName",
        }
    }
}

impl SimpleADProps {
    pub const ATTR_ALIAS: &'static str = "Alias";
    pub const ATTR_DNS_IP_ADDRESSES: &'static str = "DnsIpAddresses";
}

impl CfnProperties for SimpleADProps {
    const RESOURCE_TYPE: &'static str = "AWS::DirectoryService::SimpleAD";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ALIAS, Self::ATTR_DNS_IP_ADDRESSES];
    const DESCRIPTION: Option<&'static str> = Some("A Simple AD directory");
}

pub type SimpleAD = CfnResource<SimpleADProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props() -> SimpleADProps {
        SimpleADProps {
            name: "corp.example.com".to_string(),
            password: "secret".to_string(),
            size: "Small".to_string(),
            vpc_settings: VpcSettings {
                subnet_ids: vec!["subnet-1".to_string()],
                vpc_id: "vpc-1".to_string(),
            },
            create_alias: None,
            description: None,
            enable_sso: None,
            short_name: None,
        }
    }

    #[test]
    fn missing_size() {
        let json = json!({
            "Name": "corp.example.com",
            "Password": "secret",
            "VpcSettings": { "SubnetIds": [], "VpcId": "vpc-1" }
        });
        assert!(SimpleADProps::from_properties(&json).is_err());
    }

    #[test]
    fn round_trip_with_optionals() {
        let mut props = props();
        props.enable_sso = Some(false);
        props.short_name = Some("CORP".to_string());

        let json = props.to_properties().unwrap();
        assert_eq!(json["EnableSso"], json!(false));
        assert_eq!(SimpleADProps::from_properties(&json).unwrap(), props);
    }

    #[test]
    fn untyped_resource_conversion() {
        let directory = SimpleAD::new("Directory", props());
        let resource = directory.to_resource().unwrap();
        assert_eq!(resource.id.resource_type, "AWS::DirectoryService::SimpleAD");
        assert_eq!(SimpleAD::try_from_resource(&resource).unwrap(), directory);
    }
}
