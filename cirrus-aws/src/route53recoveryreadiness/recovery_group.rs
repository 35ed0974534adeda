//! AWS::Route53RecoveryReadiness::RecoveryGroup

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of a recovery group, the cells that make up an application
    pub struct RecoveryGroupProps("AWS::Route53RecoveryReadiness::RecoveryGroup"), builder RecoveryGroupPropsBuilder {
        required {
            recovery_group_name: String => "RecoveryGroupName",
        }
        optional {
            cells: Vec<String> => "Cells",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl RecoveryGroupProps {
    pub const ATTR_RECOVERY_GROUP_ARN: &'static str = "RecoveryGroupArn";
}

impl CfnProperties for RecoveryGroupProps {
    const RESOURCE_TYPE: &'static str = "AWS::Route53RecoveryReadiness::RecoveryGroup";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_RECOVERY_GROUP_ARN];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("A group of cells that make up an application");
}

cirrus_core::impl_taggable!(RecoveryGroupProps);

pub type RecoveryGroup = CfnResource<RecoveryGroupProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::Taggable;

    #[test]
    fn recovery_group_tags() {
        let mut props = RecoveryGroupProps::builder()
            .recovery_group_name("orders")
            .build()
            .unwrap();
        props.set_tag("owner", "payments");
        props.set_tag("owner", "orders");
        assert_eq!(props.tag_value("owner"), Some("orders"));
        assert_eq!(props.remove_tag("owner"), Some("orders".to_string()));
    }

    #[test]
    fn name_is_required() {
        assert!(RecoveryGroupProps::builder().cells(Vec::<String>::new()).build().is_err());
    }
}
