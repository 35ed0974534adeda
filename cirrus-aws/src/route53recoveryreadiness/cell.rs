//! AWS::Route53RecoveryReadiness::Cell

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of a cell, such as an Availability Zone or a Region
    pub struct CellProps("AWS::Route53RecoveryReadiness::Cell"), builder CellPropsBuilder {
        required {
            cell_name: String => "CellName",
        }
        optional {
            /// ARNs of nested cells
            cells: Vec<String> => "Cells",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl CellProps {
    pub const ATTR_CELL_ARN: &'static str = "CellArn";
    pub const ATTR_PARENT_READINESS_SCOPES: &'static str = "ParentReadinessScopes";
}

impl CfnProperties for CellProps {
    const RESOURCE_TYPE: &'static str = "AWS::Route53RecoveryReadiness::Cell";
    const ATTRIBUTES: &'static [&'static str] =
        &[Self::ATTR_CELL_ARN, Self::ATTR_PARENT_READINESS_SCOPES];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("A recovery readiness cell");
}

cirrus_core::impl_taggable!(CellProps);

pub type Cell = CfnResource<CellProps>;
