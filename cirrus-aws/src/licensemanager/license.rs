//! AWS::LicenseManager::License

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    pub struct BorrowConfiguration("AWS::LicenseManager::License.BorrowConfiguration"), builder BorrowConfigurationBuilder {
        required {
            allow_early_check_in: bool => "AllowEarlyCheckIn",
            max_time_to_live_in_minutes: i64 => "MaxTimeToLiveInMinutes",
        }
        optional {}
    }

    /// How the license may be consumed
    #[derive(Default)]
    pub struct ConsumptionConfiguration("AWS::LicenseManager::License.ConsumptionConfiguration"), builder ConsumptionConfigurationBuilder {
        required {}
        optional {
            borrow_configuration: BorrowConfiguration => "BorrowConfiguration",
            provisional_configuration: ProvisionalConfiguration => "ProvisionalConfiguration",
            /// `None`, `Weekly` or `Monthly`
            renew_type: String => "RenewType",
        }
    }

    /// A resource entitled for use with a license
    pub struct Entitlement("AWS::LicenseManager::License.Entitlement"), builder EntitlementBuilder {
        required {
            name: String => "Name",
            unit: String => "Unit",
        }
        optional {
            allow_check_in: bool => "AllowCheckIn",
            /// Only used when the unit is not `None`
            max_count: i64 => "MaxCount",
            overage: bool => "Overage",
            /// Only used when the unit is `None`
            value: String => "Value",
        }
    }

    pub struct IssuerData("AWS::LicenseManager::License.IssuerData"), builder IssuerDataBuilder {
        required {
            name: String => "Name",
        }
        optional {
            /// KMS key with key usage sign and verify
            sign_key: String => "SignKey",
        }
    }

    pub struct Metadata("AWS::LicenseManager::License.Metadata"), builder MetadataBuilder {
        required {
            name: String => "Name",
            value: String => "Value",
        }
        optional {}
    }

    pub struct ProvisionalConfiguration("AWS::LicenseManager::License.ProvisionalConfiguration"), builder ProvisionalConfigurationBuilder {
        required {
            max_time_to_live_in_minutes: i64 => "MaxTimeToLiveInMinutes",
        }
        optional {}
    }

    /// Validity range in ISO8601-UTC format
    pub struct ValidityDateFormat("AWS::LicenseManager::License.ValidityDateFormat"), builder ValidityDateFormatBuilder {
        required {
            begin: String => "Begin",
            end: String => "End",
        }
        optional {}
    }

    /// Properties of a License Manager license
    pub struct LicenseProps("AWS::LicenseManager::License"), builder LicensePropsBuilder {
        required {
            consumption_configuration: ConsumptionConfiguration => "ConsumptionConfiguration",
            entitlements: Vec<Entitlement> => "Entitlements",
            home_region: String => "HomeRegion",
            issuer: IssuerData => "Issuer",
            license_name: String => "LicenseName",
            product_name: String => "ProductName",
            validity: ValidityDateFormat => "Validity",
        }
        optional {
            beneficiary: String => "Beneficiary",
            license_metadata: Vec<Metadata> => "LicenseMetadata",
            product_sku: String => "ProductSKU",
            status: String => "Status",
        }
    }
}

impl LicenseProps {
    pub const ATTR_LICENSE_ARN: &'static str = "LicenseArn";
    pub const ATTR_VERSION: &'static str = "Version";
}

impl CfnProperties for LicenseProps {
    const RESOURCE_TYPE: &'static str = "AWS::LicenseManager::License";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_LICENSE_ARN, Self::ATTR_VERSION];
    const DESCRIPTION: Option<&'static str> = Some("A granted license");
}

pub type License = CfnResource<LicenseProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::BuildError;
    use serde_json::json;

    fn builder() -> LicensePropsBuilder {
        LicenseProps::builder()
            .consumption_configuration(ConsumptionConfiguration {
                renew_type: Some("Monthly".to_string()),
                ..Default::default()
            })
            .entitlements(vec![Entitlement {
                name: "seats".to_string(),
                unit: "Count".to_string(),
                allow_check_in: Some(true),
                max_count: Some(10),
                overage: None,
                value: None,
            }])
            .home_region("us-east-1")
            .issuer(IssuerData {
                name: "Example Corp".to_string(),
                sign_key: None,
            })
            .license_name("analytics")
            .product_name("Analytics Suite")
            .validity(ValidityDateFormat {
                begin: "2021-01-01T00:00:00Z".to_string(),
                end: "2022-01-01T00:00:00Z".to_string(),
            })
    }

    #[test]
    fn required_fields_only() {
        let props = builder().build().unwrap();
        assert_eq!(props.beneficiary, None);
        assert_eq!(props.product_sku, None);
        assert_eq!(props.license_metadata, None);
    }

    #[test]
    fn product_sku_keeps_cfn_spelling() {
        let props = builder().product_sku("AS-100").build().unwrap();
        let json = props.to_properties().unwrap();
        assert_eq!(json["ProductSKU"], json!("AS-100"));
        assert_eq!(LicenseProps::from_properties(&json).unwrap(), props);
    }

    #[test]
    fn rebuild_from_record_and_report_first_missing_field() {
        let props = builder().build().unwrap();
        let mut partial: LicensePropsBuilder = props.into();
        partial = partial.license_name("renamed");
        assert!(partial.build().is_ok());

        let err = LicenseProps::builder()
            .home_region("us-east-1")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingRequired {
                record: "AWS::LicenseManager::License",
                field: "consumption_configuration"
            }
        );
    }

    #[test]
    fn borrow_configuration_fields_are_required() {
        let err = BorrowConfiguration::builder()
            .allow_early_check_in(true)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "AWS::LicenseManager::License.BorrowConfiguration: required field 'max_time_to_live_in_minutes' was not set"
        );
    }
}
