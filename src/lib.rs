//! Integration of a remote Irene TTS web service into a host voice
//! platform: a setup flow that registers an endpoint and a TTS entity
//! that forwards synthesis requests to it.

pub mod config;
pub mod flow;
pub mod registry;
pub mod tts;
pub mod web_service;

pub use config::{ConfigEntry, UserInput, DEFAULT_BASE_URL, DOMAIN};
pub use flow::{ConfigFlow, FlowError, FlowResult, ABORT_ALREADY_CONFIGURED};
pub use registry::EntryRegistry;
pub use tts::{setup_entry, DeviceInfo, IreneTtsEntity, TextToSpeechEntity, TtsAudio};
pub use web_service::{TransportError, WebServiceClient};
