use serde::{Deserialize, Serialize};

/// Integration domain, used in device identifiers and entity ids.
pub const DOMAIN: &str = "irene_tts";

/// Prefill for the base-url field in the setup form.
pub const DEFAULT_BASE_URL: &str = "https://192.168.133.252:5003";

/// Persisted configuration for one remote TTS endpoint.
///
/// Created by the setup flow, stored by the host, read once when the
/// entity is constructed. `unique_id` is derived from the URL's host and
/// port and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub base_url: String,
    pub unique_id: String,
}

/// The setup form's single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub base_url: String,
}
