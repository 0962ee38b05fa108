pub mod entity;
pub mod factory;
pub mod interface;

pub use entity::{IreneTtsEntity, MAX_MESSAGE_LENGTH};
pub use factory::setup_entry;
pub use interface::{DeviceInfo, TextToSpeechEntity, TtsAudio};
