//! Amazon Interactive Video Service

pub mod channel;
pub mod playback_key_pair;
pub mod recording_configuration;
pub mod stream_key;

use cirrus_core::CfnProperties;
use cirrus_core::schema::ResourceSchema;

pub use channel::{Channel, ChannelProps};
pub use playback_key_pair::{PlaybackKeyPair, PlaybackKeyPairProps};
pub use recording_configuration::{RecordingConfiguration, RecordingConfigurationProps};
pub use stream_key::{StreamKey, StreamKeyProps};

pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        ChannelProps::schema(),
        PlaybackKeyPairProps::schema(),
        RecordingConfigurationProps::schema(),
        StreamKeyProps::schema(),
    ]
}
