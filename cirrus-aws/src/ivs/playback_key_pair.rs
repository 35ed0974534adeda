//! AWS::IVS::PlaybackKeyPair

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Properties of a playback key pair used to sign viewer authorization tokens
    pub struct PlaybackKeyPairProps("AWS::IVS::PlaybackKeyPair"), builder PlaybackKeyPairPropsBuilder {
        required {
            /// Public portion of a customer-generated key pair
            public_key_material: String => "PublicKeyMaterial",
        }
        optional {
            name: String => "Name",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl PlaybackKeyPairProps {
    pub const ATTR_ARN: &'static str = "Arn";
    pub const ATTR_FINGERPRINT: &'static str = "Fingerprint";
}

impl CfnProperties for PlaybackKeyPairProps {
    const RESOURCE_TYPE: &'static str = "AWS::IVS::PlaybackKeyPair";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN, Self::ATTR_FINGERPRINT];
    const TAGGABLE: bool = true;
}

cirrus_core::impl_taggable!(PlaybackKeyPairProps);

pub type PlaybackKeyPair = CfnResource<PlaybackKeyPairProps>;
