//! AWS::Macie::CustomDataIdentifier

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Properties of a custom data identifier used to detect sensitive data
    pub struct CustomDataIdentifierProps("AWS::Macie::CustomDataIdentifier"), builder CustomDataIdentifierPropsBuilder {
        required {
            name: String => "Name",
            /// Up to 512 characters
            regex: String => "Regex",
        }
        optional {
            description: String => "Description",
            ignore_words: Vec<String> => "IgnoreWords",
            keywords: Vec<String> => "Keywords",
            /// Characters allowed between a regex match and a keyword
            maximum_match_distance: i64 => "MaximumMatchDistance",
        }
    }
}

impl CustomDataIdentifierProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_ID: &'static str = "Id";
}

impl CfnProperties for CustomDataIdentifierProps {
    const RESOURCE_TYPE: &'static str = "AWS::Macie::CustomDataIdentifier";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN, Self::ATTR_ID];
    const DESCRIPTION: Option<&'static str> =
        Some("A custom data identifier for Amazon Macie");
}

pub type CustomDataIdentifier = CfnResource<CustomDataIdentifierProps>;
