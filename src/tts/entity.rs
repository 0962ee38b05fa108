use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use super::interface::{DeviceInfo, TextToSpeechEntity, TtsAudio};
use crate::config::DOMAIN;
use crate::web_service::WebServiceClient;

/// Hard limit on the message length, matching the host platform's cap.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

const TTS_ENDPOINT: &str = "/api/tts";

/// TTS entity backed by a remote Irene TTS web service.
pub struct IreneTtsEntity {
    client: Arc<WebServiceClient>,
    unique_id: String,
}

impl IreneTtsEntity {
    pub fn new(client: Arc<WebServiceClient>, unique_id: impl Into<String>) -> Self {
        Self {
            client,
            unique_id: unique_id.into(),
        }
    }
}

#[async_trait]
impl TextToSpeechEntity for IreneTtsEntity {
    fn name(&self) -> String {
        self.unique_id.clone()
    }

    fn entity_id(&self) -> String {
        format!("tts.custom_tts_{}", self.unique_id)
    }

    fn default_language(&self) -> &str {
        "ru"
    }

    fn supported_languages(&self) -> &[&str] {
        &["en", "ru"]
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifiers: (DOMAIN.to_string(), self.unique_id.clone()),
            model: "IreneTTS_inner_model".to_string(),
            manufacturer: "IreneTTS".to_string(),
        }
    }

    async fn synthesize(
        &self,
        message: &str,
        language: &str,
        options: Option<&HashMap<String, Value>>,
    ) -> Option<TtsAudio> {
        let length = message.chars().count();
        debug!(%language, chars = length, "tts request received");

        if length > MAX_MESSAGE_LENGTH {
            error!("maximum length of the message exceeded ({MAX_MESSAGE_LENGTH} characters)");
            return None;
        }

        let options = options.cloned().unwrap_or_default();
        let options = match serde_json::to_string(&options) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("failed to encode tts options: {err}");
                return None;
            }
        };

        let params = [
            ("text", message.to_string()),
            ("language", language.to_string()),
            ("options", options),
        ];

        match self.client.fetch(TTS_ENDPOINT, &params).await {
            Ok((media_type, audio)) if !audio.is_empty() => {
                debug!(%media_type, bytes = audio.len(), "tts request successful");
                Some((media_type, audio))
            }
            Ok(_) => {
                error!("no audio content received from the server");
                None
            }
            Err(err) => {
                error!("tts request failed: {err}");
                None
            }
        }
    }
}
