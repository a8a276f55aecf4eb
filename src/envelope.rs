use serde_json::Value;

use crate::client::SourceData;
use crate::error::{LoaderError, LoaderResult};
use crate::loader::LoaderConfig;

/// Outcome of one classification pass over the raw response envelope. The
/// variants keep the three failure kinds distinguishable; the check order is
/// fixed (root presence, status presence, status value).
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Payload(Value),
    MissingRoot,
    MissingStatus,
    StatusFailure { status: String, message: String },
}

impl Envelope {
    pub fn classify(data: &SourceData, config: &LoaderConfig) -> Envelope {
        let payload = match data.get(config.root()) {
            Some(payload) => payload,
            None => return Envelope::MissingRoot,
        };

        let status = match data.get(config.status_key()) {
            Some(status) => status,
            None => return Envelope::MissingStatus,
        };

        if status.as_str() != Some(config.status_ok()) {
            // Message is empty when the envelope carries none.
            let message = data
                .get(config.message_key())
                .map(render)
                .unwrap_or_default();
            return Envelope::StatusFailure {
                status: render(status),
                message,
            };
        }

        Envelope::Payload(payload.clone())
    }

    pub fn into_result(self) -> LoaderResult<Value> {
        match self {
            Envelope::Payload(payload) => Ok(payload),
            Envelope::MissingRoot => Err(LoaderError::RootNotFound),
            Envelope::MissingStatus => Err(LoaderError::StatusNotFound),
            Envelope::StatusFailure { status, message } => {
                Err(LoaderError::Status { status, message })
            }
        }
    }
}

// Strings render bare, anything else as its compact JSON form.
fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
