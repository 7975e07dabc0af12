use thiserror::Error;

pub const DEFAULT_REJECTION_MESSAGE: &str = "request rejected by game service";

/// In-band failure body the Game Service returns with `success: false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceRejection {
    pub message: String,
}

impl ServiceRejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ApiFailure> for ServiceRejection {
    fn from(value: ApiFailure) -> Self {
        let message = value
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        Self { message }
    }
}
