//! Record - Typed CloudFormation property records
//!
//! Resource and property records are plain structs declared with
//! [`cfn_records!`](crate::cfn_records). Each record gets serde support with
//! CloudFormation property names, a builder that checks required fields, and
//! a schema describing its shape.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::resource::{Resource, Value};
use crate::schema::{AttributeType, PropertySchema, ResourceSchema};

/// Error returned by a record builder
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{record}: required field '{field}' was not set")]
    MissingRequired {
        record: &'static str,
        field: &'static str,
    },
}

impl BuildError {
    pub fn missing(record: &'static str, field: &'static str) -> Self {
        BuildError::MissingRequired {
            record,
            field: field_name(field),
        }
    }
}

/// Error raised when moving a record between its typed and untyped forms
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{resource_type} has no attribute '{name}'")]
    UnknownAttribute {
        resource_type: &'static str,
        name: String,
    },

    #[error("Resource type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("Invalid properties for {resource_type}: {source}")]
    Properties {
        resource_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Strip the raw identifier prefix (`r#type` -> `type`)
pub fn field_name(ident: &'static str) -> &'static str {
    ident.trim_start_matches("r#")
}

/// Types that can describe themselves as an [`AttributeType`]
pub trait CfnType {
    fn cfn_type() -> AttributeType;
}

impl CfnType for String {
    fn cfn_type() -> AttributeType {
        AttributeType::String
    }
}

impl CfnType for i64 {
    fn cfn_type() -> AttributeType {
        AttributeType::Int
    }
}

impl CfnType for f64 {
    fn cfn_type() -> AttributeType {
        AttributeType::Float
    }
}

impl CfnType for bool {
    fn cfn_type() -> AttributeType {
        AttributeType::Bool
    }
}

impl CfnType for serde_json::Value {
    fn cfn_type() -> AttributeType {
        AttributeType::Json
    }
}

impl<T: CfnType> CfnType for Vec<T> {
    fn cfn_type() -> AttributeType {
        AttributeType::List(Box::new(T::cfn_type()))
    }
}

impl<T: CfnType> CfnType for BTreeMap<String, T> {
    fn cfn_type() -> AttributeType {
        AttributeType::Map(Box::new(T::cfn_type()))
    }
}

/// The properties record of a CloudFormation resource type
pub trait CfnProperties:
    CfnType + Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq
{
    /// CloudFormation type name (e.g., "AWS::Cassandra::Keyspace")
    const RESOURCE_TYPE: &'static str;

    /// Read-only attributes available through `Fn::GetAtt`
    const ATTRIBUTES: &'static [&'static str] = &[];

    /// Whether the properties carry a standard `Tags` list
    const TAGGABLE: bool = false;

    const DESCRIPTION: Option<&'static str> = None;

    fn schema() -> ResourceSchema {
        let properties = match Self::cfn_type() {
            AttributeType::Struct(schema) => *schema,
            _ => PropertySchema::new(Self::RESOURCE_TYPE),
        };
        let schema = ResourceSchema::new(Self::RESOURCE_TYPE, properties)
            .with_attributes(Self::ATTRIBUTES)
            .with_taggable(Self::TAGGABLE);
        match Self::DESCRIPTION {
            Some(desc) => schema.with_description(desc),
            None => schema,
        }
    }

    /// Render the CloudFormation property map
    fn to_properties(&self) -> Result<serde_json::Value, RecordError> {
        serde_json::to_value(self).map_err(|source| RecordError::Properties {
            resource_type: Self::RESOURCE_TYPE,
            source,
        })
    }

    /// Parse a CloudFormation property map
    fn from_properties(properties: &serde_json::Value) -> Result<Self, RecordError> {
        serde_json::from_value(properties.clone()).map_err(|source| RecordError::Properties {
            resource_type: Self::RESOURCE_TYPE,
            source,
        })
    }
}

/// A resource of a template: a logical id paired with typed properties
#[derive(Debug, Clone, PartialEq)]
pub struct CfnResource<P> {
    logical_id: String,
    props: P,
}

impl<P: CfnProperties> CfnResource<P> {
    pub fn new(logical_id: impl Into<String>, props: P) -> Self {
        Self {
            logical_id: logical_id.into(),
            props,
        }
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    pub fn resource_type(&self) -> &'static str {
        P::RESOURCE_TYPE
    }

    /// `Fn::GetAtt` reference to one of the resource's read-only attributes
    pub fn attr(&self, name: &str) -> Result<Value, RecordError> {
        if !P::ATTRIBUTES.contains(&name) {
            return Err(RecordError::UnknownAttribute {
                resource_type: P::RESOURCE_TYPE,
                name: name.to_string(),
            });
        }
        Ok(Value::GetAtt(self.logical_id.clone(), name.to_string()))
    }

    /// `Ref` to this resource
    pub fn reference(&self) -> Value {
        Value::Ref(self.logical_id.clone())
    }

    pub fn to_resource(&self) -> Result<Resource, RecordError> {
        let properties: HashMap<String, Value> = match self.props.to_properties()? {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), Value::from_json(v)))
                .collect(),
            _ => HashMap::new(),
        };
        Ok(Resource {
            id: crate::resource::ResourceId::new(P::RESOURCE_TYPE, self.logical_id.clone()),
            properties,
        })
    }

    pub fn try_from_resource(resource: &Resource) -> Result<Self, RecordError> {
        if resource.id.resource_type != P::RESOURCE_TYPE {
            return Err(RecordError::TypeMismatch {
                expected: P::RESOURCE_TYPE,
                got: resource.id.resource_type.clone(),
            });
        }
        let props = P::from_properties(&resource.properties_json())?;
        Ok(Self::new(resource.id.logical_id.clone(), props))
    }

    /// Render the `{"Type": ..., "Properties": ...}` template entry
    pub fn to_template_entry(&self) -> Result<serde_json::Value, RecordError> {
        Ok(self.to_resource()?.to_json())
    }
}

/// Declare CloudFormation records.
///
/// ```ignore
/// cfn_records! {
///     pub struct BillingMode("AWS::Cassandra::Table.BillingMode"), builder BillingModeBuilder {
///         required {
///             mode: String => "Mode",
///         }
///         optional {
///             provisioned_throughput: ProvisionedThroughput => "ProvisionedThroughput",
///         }
///     }
/// }
/// ```
///
/// Required fields are plain fields, optional fields are wrapped in `Option`.
#[macro_export]
macro_rules! cfn_records {
    (
        $(
            $(#[$meta:meta])*
            pub struct $name:ident($cfn:tt), builder $builder:ident {
                required {
                    $(
                        $(#[$rmeta:meta])*
                        $rfield:ident : $rty:ty => $rkey:tt
                    ),* $(,)?
                }
                optional {
                    $(
                        $(#[$ometa:meta])*
                        $ofield:ident : $oty:ty => $okey:tt
                    ),* $(,)?
                }
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(deny_unknown_fields)]
            pub struct $name {
                $(
                    $(#[$rmeta])*
                    #[serde(rename = $rkey)]
                    pub $rfield: $rty,
                )*
                $(
                    $(#[$ometa])*
                    #[serde(rename = $okey, default, skip_serializing_if = "Option::is_none")]
                    pub $ofield: ::std::option::Option<$oty>,
                )*
            }

            impl $name {
                /// CloudFormation name of this record
                pub const CFN_NAME: &'static str = $cfn;

                pub fn builder() -> $builder {
                    ::std::default::Default::default()
                }

                pub fn property_schema() -> $crate::schema::PropertySchema {
                    $crate::schema::PropertySchema::new($cfn)
                    $(
                        .attribute(
                            $crate::schema::AttributeSchema::new(
                                $crate::record::field_name(stringify!($rfield)),
                                <$rty as $crate::record::CfnType>::cfn_type(),
                            )
                            .required()
                            .with_provider_name($rkey),
                        )
                    )*
                    $(
                        .attribute(
                            $crate::schema::AttributeSchema::new(
                                $crate::record::field_name(stringify!($ofield)),
                                <$oty as $crate::record::CfnType>::cfn_type(),
                            )
                            .with_provider_name($okey),
                        )
                    )*
                }
            }

            impl $crate::record::CfnType for $name {
                fn cfn_type() -> $crate::schema::AttributeType {
                    $crate::schema::AttributeType::Struct(::std::boxed::Box::new(
                        <$name>::property_schema(),
                    ))
                }
            }

            #[doc = concat!("Builder for [`", stringify!($name), "`]")]
            #[derive(Clone, Debug, Default)]
            pub struct $builder {
                $( $rfield: ::std::option::Option<$rty>, )*
                $( $ofield: ::std::option::Option<$oty>, )*
            }

            impl $builder {
                $(
                    pub fn $rfield<T>(mut self, value: T) -> Self
                    where
                        T: ::std::convert::Into<$rty>,
                    {
                        self.$rfield = ::std::option::Option::Some(value.into());
                        self
                    }
                )*
                $(
                    pub fn $ofield<T>(mut self, value: T) -> Self
                    where
                        T: ::std::convert::Into<$oty>,
                    {
                        self.$ofield = ::std::option::Option::Some(value.into());
                        self
                    }
                )*

                pub fn build(self) -> ::std::result::Result<$name, $crate::record::BuildError> {
                    ::std::convert::TryFrom::try_from(self)
                }
            }

            impl ::std::convert::TryFrom<$builder> for $name {
                type Error = $crate::record::BuildError;

                fn try_from(
                    value: $builder,
                ) -> ::std::result::Result<Self, $crate::record::BuildError> {
                    ::std::result::Result::Ok(Self {
                        $(
                            $rfield: value.$rfield.ok_or_else(|| {
                                $crate::record::BuildError::missing($cfn, stringify!($rfield))
                            })?,
                        )*
                        $( $ofield: value.$ofield, )*
                    })
                }
            }

            impl ::std::convert::From<$name> for $builder {
                fn from(value: $name) -> Self {
                    Self {
                        $( $rfield: ::std::option::Option::Some(value.$rfield), )*
                        $( $ofield: value.$ofield, )*
                    }
                }
            }
        )*
    };
}

/// Implement [`Taggable`](crate::tag::Taggable) for records with a
/// `tags: Option<Vec<CfnTag>>` field
#[macro_export]
macro_rules! impl_taggable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::tag::Taggable for $ty {
                fn tags(&self) -> ::std::option::Option<&[$crate::tag::CfnTag]> {
                    self.tags.as_deref()
                }

                fn tags_mut(
                    &mut self,
                ) -> &mut ::std::option::Option<::std::vec::Vec<$crate::tag::CfnTag>> {
                    &mut self.tags
                }
            }
        )*
    };
}
