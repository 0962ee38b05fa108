use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Raw synthesized audio: a media-type tag ("wav") and the audio bytes.
pub type TtsAudio = (String, Vec<u8>);

/// Static device-identity descriptor the host shows for the integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// (domain, unique_id) pair identifying the backing device.
    pub identifiers: (String, String),
    pub model: String,
    pub manufacturer: String,
}

/// Text-to-speech entity contract exposed to the host platform.
#[async_trait]
pub trait TextToSpeechEntity: Send + Sync {
    /// Display name shown by the host.
    fn name(&self) -> String;

    /// Stable entity id within the host's registry.
    fn entity_id(&self) -> String;

    fn default_language(&self) -> &str;

    fn supported_languages(&self) -> &[&str];

    fn device_info(&self) -> DeviceInfo;

    /// Convert `message` to speech.
    ///
    /// Returns `None` whenever no audio is available; failures never
    /// propagate to the host as errors.
    async fn synthesize(
        &self,
        message: &str,
        language: &str,
        options: Option<&HashMap<String, Value>>,
    ) -> Option<TtsAudio>;
}
