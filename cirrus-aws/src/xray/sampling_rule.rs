//! AWS::XRay::SamplingRule

use std::collections::BTreeMap;

use cirrus_core::{CfnProperties, CfnResource};

cirrus_core::cfn_records! {
    /// Rule services use to decide whether to instrument a request
    #[derive(Default)]
    pub struct SamplingRule("AWS::XRay::SamplingRule.SamplingRule"), builder SamplingRuleBuilder {
        required {}
        optional {
            /// Request attributes to match, at most 5 entries
            attributes: BTreeMap<String, String> => "Attributes",
            /// Fraction of matching requests instrumented once the reservoir is used up
            fixed_rate: f64 => "FixedRate",
            host: String => "Host",
            http_method: String => "HTTPMethod",
            priority: i64 => "Priority",
            /// Requests per second instrumented before the fixed rate applies
            reservoir_size: i64 => "ReservoirSize",
            resource_arn: String => "ResourceARN",
            rule_arn: String => "RuleARN",
            rule_name: String => "RuleName",
            service_name: String => "ServiceName",
            service_type: String => "ServiceType",
            url_path: String => "URLPath",
            /// Always `1`
            version: i64 => "Version",
        }
    }

    /// A sampling rule and its metadata
    #[derive(Default)]
    pub struct SamplingRuleRecord("AWS::XRay::SamplingRule.SamplingRuleRecord"), builder SamplingRuleRecordBuilder {
        required {}
        optional {
            created_at: String => "CreatedAt",
            modified_at: String => "ModifiedAt",
            sampling_rule: SamplingRule => "SamplingRule",
        }
    }

    /// Changes to the configuration of an existing sampling rule
    #[derive(Default)]
    pub struct SamplingRuleUpdate("AWS::XRay::SamplingRule.SamplingRuleUpdate"), builder SamplingRuleUpdateBuilder {
        required {}
        optional {
            attributes: BTreeMap<String, String> => "Attributes",
            fixed_rate: f64 => "FixedRate",
            host: String => "Host",
            http_method: String => "HTTPMethod",
            priority: i64 => "Priority",
            reservoir_size: i64 => "ReservoirSize",
            resource_arn: String => "ResourceARN",
            rule_arn: String => "RuleARN",
            rule_name: String => "RuleName",
            service_name: String => "ServiceName",
            service_type: String => "ServiceType",
            url_path: String => "URLPath",
        }
    }

    /// Properties of an X-Ray sampling rule
    #[derive(Default)]
    pub struct SamplingRuleProps("AWS::XRay::SamplingRule"), builder SamplingRulePropsBuilder {
        required {}
        optional {
            /// Only used when deleting a rule
            rule_name: String => "RuleName",
            /// Required when creating a rule
            sampling_rule: SamplingRule => "SamplingRule",
            sampling_rule_record: SamplingRuleRecord => "SamplingRuleRecord",
            sampling_rule_update: SamplingRuleUpdate => "SamplingRuleUpdate",
            tags: Vec<serde_json::Value> => "Tags",
        }
    }
}

impl SamplingRuleProps {
    pub const ATTR_RULE_ARN: &'static str = "RuleARN";
}

impl CfnProperties for SamplingRuleProps {
    const RESOURCE_TYPE: &'static str = "AWS::XRay::SamplingRule";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_RULE_ARN];
    const DESCRIPTION: Option<&'static str> = Some("An X-Ray sampling rule");
}

pub type SamplingRuleResource = CfnResource<SamplingRuleProps>;

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::schema::AttributeType;
    use serde_json::json;

    fn rule() -> SamplingRule {
        SamplingRule::builder()
            .rule_name("checkout")
            .fixed_rate(0.05)
            .reservoir_size(1)
            .priority(100)
            .http_method("POST")
            .url_path("/checkout")
            .resource_arn("*")
            .attributes(BTreeMap::from([("tier".to_string(), "gold".to_string())]))
            .version(1)
            .build()
            .unwrap()
    }

    #[test]
    fn acronym_property_names() {
        let json = SamplingRuleProps {
            sampling_rule: Some(rule()),
            ..Default::default()
        }
        .to_properties()
        .unwrap();

        assert_eq!(
            json,
            json!({
                "SamplingRule": {
                    "Attributes": { "tier": "gold" },
                    "FixedRate": 0.05,
                    "HTTPMethod": "POST",
                    "Priority": 100,
                    "ReservoirSize": 1,
                    "ResourceARN": "*",
                    "RuleName": "checkout",
                    "URLPath": "/checkout",
                    "Version": 1
                }
            })
        );
        let back = SamplingRuleProps::from_properties(&json).unwrap();
        assert_eq!(back.sampling_rule, Some(rule()));
    }

    #[test]
    fn fixed_rate_is_a_double() {
        let schema = SamplingRule::property_schema();
        assert_eq!(schema.get("FixedRate").unwrap().attr_type, AttributeType::Float);
        assert_eq!(schema.get("ReservoirSize").unwrap().attr_type, AttributeType::Int);
        assert_eq!(
            schema.get("Attributes").unwrap().attr_type,
            AttributeType::Map(Box::new(AttributeType::String))
        );

        let parsed: SamplingRule = serde_json::from_value(json!({ "FixedRate": 1 })).unwrap();
        assert_eq!(parsed.fixed_rate, Some(1.0));
    }

    #[test]
    fn update_has_no_version() {
        let json = json!({ "SamplingRuleUpdate": { "Version": 1 } });
        assert!(SamplingRuleProps::from_properties(&json).is_err());
    }

    #[test]
    fn record_nests_a_rule() {
        let record = SamplingRuleRecord {
            created_at: Some("1630000000".to_string()),
            sampling_rule: Some(rule()),
            ..Default::default()
        };
        let resource = SamplingRuleResource::new(
            "Checkout",
            SamplingRuleProps {
                sampling_rule_record: Some(record),
                ..Default::default()
            },
        );
        let entry = resource.to_template_entry().unwrap();
        assert_eq!(entry["Type"], json!("AWS::XRay::SamplingRule"));
        assert_eq!(
            entry["Properties"]["SamplingRuleRecord"]["SamplingRule"]["RuleName"],
            json!("checkout")
        );
    }
}
