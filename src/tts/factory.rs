use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::entity::IreneTtsEntity;
use super::interface::TextToSpeechEntity;
use crate::config::ConfigEntry;
use crate::web_service::WebServiceClient;

/// Build the TTS entity for a configuration entry.
///
/// The remote service usually runs with a self-signed certificate on the
/// local network, so certificate verification is disabled for its client.
pub fn setup_entry(entry: &ConfigEntry) -> Result<Arc<dyn TextToSpeechEntity>> {
    info!(unique_id = %entry.unique_id, base_url = %entry.base_url, "setting up tts entity");

    let client = Arc::new(WebServiceClient::new(entry.base_url.clone(), false)?);
    Ok(Arc::new(IreneTtsEntity::new(
        client,
        entry.unique_id.clone(),
    )))
}
