//! Cirrus AWS
//!
//! Typed CloudFormation resource records for AWS service namespaces.
//! One module per service, one file per resource type.

pub mod auditmanager;
pub mod cassandra;
pub mod directoryservice;
pub mod ivs;
pub mod licensemanager;
pub mod macie;
pub mod managedblockchain;
pub mod route53recoveryreadiness;
pub mod ssmincidents;
pub mod validation;
pub mod wisdom;
pub mod xray;

use std::sync::LazyLock;

use cirrus_core::schema::ResourceSchema;

pub type SchemaFn = fn() -> Vec<ResourceSchema>;

const SERVICES: &[(&str, SchemaFn)] = &[
    ("AuditManager", auditmanager::schemas),
    ("Cassandra", cassandra::schemas),
    ("DirectoryService", directoryservice::schemas),
    ("IVS", ivs::schemas),
    ("LicenseManager", licensemanager::schemas),
    ("Macie", macie::schemas),
    ("ManagedBlockchain", managedblockchain::schemas),
    ("Route53RecoveryReadiness", route53recoveryreadiness::schemas),
    ("SSMIncidents", ssmincidents::schemas),
    ("Wisdom", wisdom::schemas),
    ("XRay", xray::schemas),
];

/// Service namespaces with their schemas
pub fn services() -> &'static [(&'static str, SchemaFn)] {
    SERVICES
}

static SCHEMAS: LazyLock<Vec<ResourceSchema>> = LazyLock::new(|| {
    let mut schemas = Vec::new();
    for (_, service_schemas) in SERVICES {
        schemas.extend(service_schemas());
    }
    schemas
});

/// Returns all resource schemas
pub fn all_schemas() -> &'static [ResourceSchema] {
    &SCHEMAS
}

/// Find the schema of a CloudFormation type name (e.g., "AWS::IVS::Channel")
pub fn find_schema(resource_type: &str) -> Option<&'static ResourceSchema> {
    SCHEMAS.iter().find(|s| s.resource_type == resource_type)
}


#[cfg(test)]
mod record_tests {
    use cirrus_core::CfnProperties;
    use cirrus_core::skeleton::{SkeletonOptions, skeleton};
    use serde_json::json;

    fn properties_of<P: CfnProperties>(include_optional: bool) -> serde_json::Value {
        let entry = skeleton(&P::schema(), &SkeletonOptions { include_optional });
        entry.get("Properties").cloned().unwrap_or_else(|| json!({}))
    }

    // Changes the first leaf value found, depth first
    fn change_first_leaf(value: &mut serde_json::Value) -> bool {
        match value {
            serde_json::Value::String(s) => {
                s.push_str("-changed");
                true
            }
            serde_json::Value::Bool(b) => {
                *b = !*b;
                true
            }
            serde_json::Value::Number(n) => {
                let next = match n.as_i64() {
                    Some(i) => json!(i + 1),
                    None => json!(n.as_f64().unwrap_or_default() + 1.0),
                };
                *value = next;
                true
            }
            serde_json::Value::Array(items) => items.iter_mut().any(change_first_leaf),
            serde_json::Value::Object(map) => map.values_mut().any(change_first_leaf),
            serde_json::Value::Null => false,
        }
    }

    fn check_record<P: CfnProperties>() {
        let name = P::RESOURCE_TYPE;

        for include_optional in [false, true] {
            let properties = properties_of::<P>(include_optional);
            let props = P::from_properties(&properties)
                .unwrap_or_else(|e| panic!("{}: {}", name, e));
            let rendered = props.to_properties().unwrap();
            assert_eq!(rendered, properties, "{}", name);
            assert_eq!(P::from_properties(&rendered).unwrap(), props, "{}", name);
        }

        let full = properties_of::<P>(true);
        for attr in P::schema().properties.required_attributes() {
            let mut partial = full.clone();
            if let Some(map) = partial.as_object_mut() {
                map.remove(attr.key());
            }
            assert!(
                P::from_properties(&partial).is_err(),
                "{} decoded without {}",
                name,
                attr.key()
            );
        }

        let mut changed = full.clone();
        assert!(change_first_leaf(&mut changed), "{} has no leaf values", name);
        assert_ne!(
            P::from_properties(&changed).unwrap(),
            P::from_properties(&full).unwrap(),
            "{}",
            name
        );
    }

    macro_rules! check_records {
        ($($props:ty),* $(,)?) => {{
            let mut checked = Vec::new();
            $(
                check_record::<$props>();
                checked.push(<$props as CfnProperties>::RESOURCE_TYPE);
            )*
            checked
        }};
    }

    #[test]
    fn every_record_decodes_rebuilds_and_compares() {
        let checked = check_records!(
            crate::auditmanager::AssessmentProps,
            crate::cassandra::KeyspaceProps,
            crate::cassandra::TableProps,
            crate::directoryservice::MicrosoftADProps,
            crate::directoryservice::SimpleADProps,
            crate::ivs::ChannelProps,
            crate::ivs::PlaybackKeyPairProps,
            crate::ivs::RecordingConfigurationProps,
            crate::ivs::StreamKeyProps,
            crate::licensemanager::GrantProps,
            crate::licensemanager::LicenseProps,
            crate::macie::CustomDataIdentifierProps,
            crate::macie::FindingsFilterProps,
            crate::macie::SessionProps,
            crate::managedblockchain::MemberProps,
            crate::managedblockchain::NodeProps,
            crate::route53recoveryreadiness::CellProps,
            crate::route53recoveryreadiness::ReadinessCheckProps,
            crate::route53recoveryreadiness::RecoveryGroupProps,
            crate::route53recoveryreadiness::ResourceSetProps,
            crate::ssmincidents::ReplicationSetProps,
            crate::ssmincidents::ResponsePlanProps,
            crate::wisdom::AssistantProps,
            crate::wisdom::AssistantAssociationProps,
            crate::wisdom::KnowledgeBaseProps,
            crate::xray::GroupProps,
            crate::xray::SamplingRuleProps,
        );

        let mut catalog: Vec<&str> = super::all_schemas()
            .iter()
            .map(|s| s.resource_type.as_str())
            .collect();
        catalog.sort();
        let mut checked = checked;
        checked.sort();
        assert_eq!(checked, catalog);
    }
}
