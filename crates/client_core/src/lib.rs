//! Client core for the word chain game: session state machine, Game Service
//! client and the presenter seam used by front-ends.

pub mod anagram;
pub mod controller;
pub mod error;
pub mod notice;
pub mod presenter;
pub mod service;
pub mod session;

pub use anagram::is_anagram_of;
pub use controller::{normalize_word, HintReport, SessionController, SubmitReport};
pub use error::{LocalValidationError, ServiceError, SessionError};
pub use notice::{MessageSlot, DEFAULT_MESSAGE_TTL};
pub use presenter::{NullPresenter, Presenter};
pub use service::{
    GameService, HintOutcome, HttpGameService, SubmitOutcome, WordSubmission,
};
pub use session::{Session, SessionPhase};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
