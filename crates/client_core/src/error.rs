use shared::error::ServiceRejection;
use thiserror::Error;

/// Problems detected before any request is sent; the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalValidationError {
    #[error("Please enter a word")]
    EmptyInput,
    #[error("You already used this word")]
    DuplicateWord { word: String },
    #[error("No word to get hints for")]
    NoActiveWord,
    #[error("The game is over; restart to play again")]
    GameOver,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Transport(String),
    #[error("malformed game service response: {0}")]
    Malformed(String),
    #[error(transparent)]
    Rejected(#[from] ServiceRejection),
}

impl ServiceError {
    /// The service's own message when it answered with `success: false`.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(rejection) => Some(&rejection.message),
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Local(#[from] LocalValidationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SessionError {
    pub fn local(&self) -> Option<&LocalValidationError> {
        match self {
            Self::Local(err) => Some(err),
            Self::Service(_) => None,
        }
    }
}
