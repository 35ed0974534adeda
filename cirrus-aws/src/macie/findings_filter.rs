//! AWS::Macie::FindingsFilter

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Property-based conditions that filter findings
    #[derive(Default)]
    pub struct FindingCriteria("AWS::Macie::FindingsFilter.FindingCriteria"), builder FindingCriteriaBuilder {
        required {}
        optional {
            /// Map of property name to operator/value conditions
            criterion: serde_json::Value => "Criterion",
        }
    }

    #[derive(Default)]
    pub struct FindingsFilterListItem("AWS::Macie::FindingsFilter.FindingsFilterListItem"), builder FindingsFilterListItemBuilder {
        required {}
        optional {
            id: String => "Id",
            name: String => "Name",
        }
    }

    /// Properties of a findings filter
    pub struct FindingsFilterProps("AWS::Macie::FindingsFilter"), builder FindingsFilterPropsBuilder {
        required {
            finding_criteria: FindingCriteria => "FindingCriteria",
            /// 3 to 64 characters
            name: String => "Name",
        }
        optional {
            /// `ARCHIVE` or `NOOP`
            action: String => "Action",
            description: String => "Description",
            position: i64 => "Position",
        }
    }
}

impl FindingsFilterProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_FINDINGS_FILTER_LIST_ITEMS: &'static str = "FindingsFilterListItems";
    pub const ATTR_ID: &'static str = "Id";
}

impl CfnProperties for FindingsFilterProps {
    const RESOURCE_TYPE: &'static str = "AWS::Macie::FindingsFilter";
    const ATTRIBUTES: &'static [&'static str] = &[
        Self::ATTR_ARN,
        Self::ATTR_FINDINGS_FILTER_LIST_ITEMS,
        Self::ATTR_ID,
    ];
    const DESCRIPTION: Option<&'static str> = Some("A saved filter for Amazon Macie findings");
}

pub type FindingsFilter = CfnResource<FindingsFilterProps>;
