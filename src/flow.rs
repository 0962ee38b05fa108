use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};
use url::Url;
use uuid::Uuid;

use crate::config::{ConfigEntry, UserInput};
use crate::registry::EntryRegistry;

/// Abort reason reported when the endpoint is already configured.
pub const ABORT_ALREADY_CONFIGURED: &str = "already_configured";

const ERROR_FIELD_BASE: &str = "base";
const ERROR_UNKNOWN: &str = "unknown_error";

#[derive(Debug, Error)]
pub enum FlowError {
    /// User-correctable input problem; the message is shown on the form.
    #[error("{0}")]
    Validation(String),
    /// The host platform rejected the operation; the message is shown on
    /// the form.
    #[error("{0}")]
    Host(String),
    /// Anything else; masked behind a generic form message.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Outcome of a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    /// Render (or re-render) the form; `errors` is keyed by field name.
    Form { errors: HashMap<String, String> },
    /// Terminal success: the entry has been registered with the host.
    Created { title: String, entry: ConfigEntry },
    /// Terminal: the flow was abandoned, e.g. on a duplicate endpoint.
    Aborted { reason: String },
}

/// One-shot setup flow for adding a TTS endpoint.
pub struct ConfigFlow {
    registry: Arc<EntryRegistry>,
    flow_id: String,
}

impl ConfigFlow {
    pub fn new(registry: Arc<EntryRegistry>) -> Self {
        Self {
            registry,
            flow_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn flow_id(&self) -> &str {
        &self.flow_id
    }

    /// Handle the single user step. Without input, renders the initial
    /// form; with input, attempts to create the configuration entry.
    pub async fn step_user(&self, input: Option<UserInput>) -> FlowResult {
        let Some(input) = input else {
            return FlowResult::Form {
                errors: HashMap::new(),
            };
        };

        debug!(flow_id = %self.flow_id, base_url = %input.base_url, "config flow input received");

        match self.create_entry(&input).await {
            Ok(result) => result,
            Err(FlowError::Validation(message)) | Err(FlowError::Host(message)) => {
                error!(flow_id = %self.flow_id, %message, "config flow failed");
                Self::form_error(message)
            }
            Err(FlowError::Unexpected(err)) => {
                error!(flow_id = %self.flow_id, %err, "config flow failed unexpectedly");
                Self::form_error(ERROR_UNKNOWN.to_string())
            }
        }
    }

    async fn create_entry(&self, input: &UserInput) -> Result<FlowResult, FlowError> {
        validate_user_input(input).await?;

        let unique_id = derive_unique_id(&input.base_url)?;
        let entry = ConfigEntry {
            base_url: input.base_url.clone(),
            unique_id: unique_id.clone(),
        };

        if !self.registry.insert(entry.clone()) {
            debug!(flow_id = %self.flow_id, %unique_id, "endpoint already configured");
            return Ok(FlowResult::Aborted {
                reason: ABORT_ALREADY_CONFIGURED.to_string(),
            });
        }

        Ok(FlowResult::Created {
            title: format!("Irene TTS ({unique_id})"),
            entry,
        })
    }

    fn form_error(message: String) -> FlowResult {
        let mut errors = HashMap::new();
        errors.insert(ERROR_FIELD_BASE.to_string(), message);
        FlowResult::Form { errors }
    }
}

/// Placeholder for a future reachability check; accepts all input today.
pub async fn validate_user_input(_input: &UserInput) -> Result<(), FlowError> {
    Ok(())
}

/// Derive the stable identifier for a base URL: `{hostname}_{port}`, with
/// the port taken from the URL when explicit, else 443 for https, 80 for
/// http and 0 for anything else.
pub fn derive_unique_id(base_url: &str) -> Result<String, FlowError> {
    let parsed = Url::parse(base_url)
        .map_err(|err| FlowError::Validation(format!("invalid base url: {err}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| FlowError::Validation("invalid base url: no host".to_string()))?;

    let port = match parsed.port() {
        Some(port) => port,
        None => match parsed.scheme() {
            "https" => 443,
            "http" => 80,
            _ => 0,
        },
    };

    Ok(format!("{host}_{port}"))
}
