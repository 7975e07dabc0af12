use std::{sync::Arc, time::Duration};

use chrono::Utc;
use shared::{
    domain::{HintSet, HistoryEntry},
    protocol::HintRequest,
};
use tracing::{debug, info, warn};

use crate::{
    anagram::is_anagram_of,
    error::{LocalValidationError, ServiceError, SessionError},
    notice::{MessageSlot, DEFAULT_MESSAGE_TTL},
    presenter::Presenter,
    service::{GameService, WordSubmission},
    session::{Session, SessionPhase},
};

pub const ANAGRAM_NOTICE: &str = "Anagram detected! Bonus points will be awarded.";
pub const HINT_FETCH_FAILED: &str = "Error fetching hints. Please try again.";

/// Trims surrounding whitespace and lowercases raw player input.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub entry: HistoryEntry,
    /// True when this submission moved the session into `GameOver`.
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReport {
    pub hints: HintSet,
    pub game_over: bool,
}

/// Owns the game session and mediates between player actions, the Game
/// Service and the presenter.
///
/// Every operation takes `&mut self`, so at most one request per session is
/// in flight. Controls are disabled on the presenter while a request is
/// pending and re-enabled afterwards unless the game is over.
pub struct SessionController {
    service: Arc<dyn GameService>,
    presenter: Arc<dyn Presenter>,
    messages: MessageSlot,
    session: Session,
    phase: SessionPhase,
    hints: Option<HintSet>,
    history: Vec<HistoryEntry>,
}

impl SessionController {
    pub fn new(service: Arc<dyn GameService>, presenter: Arc<dyn Presenter>) -> Self {
        Self::with_message_ttl(service, presenter, DEFAULT_MESSAGE_TTL)
    }

    pub fn with_message_ttl(
        service: Arc<dyn GameService>,
        presenter: Arc<dyn Presenter>,
        message_ttl: Duration,
    ) -> Self {
        Self {
            service,
            messages: MessageSlot::new(presenter.clone(), message_ttl),
            presenter,
            session: Session::default(),
            phase: SessionPhase::Uninitialized,
            hints: None,
            history: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn hints_visible(&self) -> bool {
        self.hints.is_some()
    }

    pub fn hints(&self) -> Option<&HintSet> {
        self.hints.as_ref()
    }

    /// Accepted words in chronological order, starting word first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub async fn start_session(&mut self) -> Result<&str, SessionError> {
        self.presenter.set_controls_enabled(false);

        match self.service.start_game().await {
            Ok(word) => {
                self.session = Session::starting_with(word);
                self.phase = SessionPhase::AwaitingInput;
                self.dismiss_hints();
                self.history.clear();
                self.presenter.clear_history();
                self.presenter.hide_game_over();
                let opening = HistoryEntry::starting_word(self.session.current_word());
                self.record_history(opening);
                self.render_session();
                self.messages.clear();
                self.release_controls();
                info!(word = %self.session.current_word(), "game session started");
                Ok(self.session.current_word())
            }
            Err(err) => {
                warn!(error = %err, "failed to start game session");
                let text = match err.rejection_message() {
                    Some(message) => format!("Failed to start game: {message}"),
                    None => format!("Network error: {err}"),
                };
                self.messages.error(text);
                self.release_controls();
                Err(err.into())
            }
        }
    }

    pub async fn submit_word(&mut self, raw: &str) -> Result<SubmitReport, SessionError> {
        self.submit(raw, false).await
    }

    /// Submits a word picked from the displayed hints.
    pub async fn submit_hint(&mut self, hint: &str) -> Result<SubmitReport, SessionError> {
        self.dismiss_hints();
        self.submit(hint, true).await
    }

    pub async fn request_hints(&mut self) -> Result<HintReport, SessionError> {
        if self.phase == SessionPhase::GameOver {
            return Err(self.reject(LocalValidationError::GameOver));
        }
        if !self.session.has_active_word() {
            return Err(self.reject(LocalValidationError::NoActiveWord));
        }

        let request = HintRequest {
            current_word: self.session.current_word().to_string(),
            used_words: self.session.used_words().to_vec(),
        };
        self.presenter.set_controls_enabled(false);

        match self.service.get_hints(&request).await {
            Ok(outcome) => {
                debug!(
                    count = outcome.hints.len(),
                    game_over = outcome.game_over,
                    "hints received"
                );
                self.presenter.show_hints(&outcome.hints);
                self.hints = Some(outcome.hints.clone());
                let game_over = outcome.game_over && self.enter_game_over();
                self.release_controls();
                Ok(HintReport {
                    hints: outcome.hints,
                    game_over,
                })
            }
            Err(err) => {
                warn!(error = %err, "hint request failed");
                let text = err
                    .rejection_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| HINT_FETCH_FAILED.to_string());
                self.messages.error(text);
                self.release_controls();
                Err(err.into())
            }
        }
    }

    /// Hides hints when they are visible, otherwise fetches them. Returns
    /// whether hints are visible afterwards.
    pub async fn toggle_hints(&mut self) -> Result<bool, SessionError> {
        if self.hints_visible() {
            self.dismiss_hints();
            return Ok(false);
        }
        self.request_hints().await?;
        Ok(true)
    }

    pub fn dismiss_hints(&mut self) {
        if self.hints.take().is_some() {
            self.presenter.hide_hints();
        }
    }

    pub async fn reset_session(&mut self) -> Result<&str, SessionError> {
        info!(
            score = self.session.score(),
            phase = ?self.phase,
            "resetting game session"
        );
        self.session.clear();
        self.history.clear();
        self.hints = None;
        self.phase = SessionPhase::Uninitialized;

        self.render_session();
        self.presenter.clear_history();
        self.presenter.hide_hints();
        self.presenter.hide_game_over();
        self.presenter.set_controls_enabled(true);
        self.messages.clear();

        self.start_session().await
    }

    async fn submit(&mut self, raw: &str, from_hint: bool) -> Result<SubmitReport, SessionError> {
        let new_word = normalize_word(raw);
        if let Err(err) = self.validate_submission(&new_word) {
            return Err(self.reject(err));
        }

        let previous = self.session.current_word().to_string();
        if is_anagram_of(&previous, &new_word) {
            self.messages.info(ANAGRAM_NOTICE);
        }
        self.dismiss_hints();

        let submission = WordSubmission {
            current_word: previous.clone(),
            new_word: new_word.clone(),
            used_words: self.session.used_words().to_vec(),
            from_hint,
        };
        let previous_phase = self.phase;
        self.phase = SessionPhase::Submitting;
        self.presenter.set_controls_enabled(false);

        match self.service.submit_word(&submission).await {
            Ok(outcome) => {
                self.phase = SessionPhase::AwaitingInput;
                self.session.advance(new_word.clone(), outcome.points);
                let entry = HistoryEntry {
                    anagram_bonus: previous != new_word && is_anagram_of(&previous, &new_word),
                    word: new_word,
                    points: outcome.points,
                    modified_rule: outcome.modified_rule,
                    recorded_at: Utc::now(),
                };
                self.record_history(entry.clone());
                self.render_session();
                if outcome.modified_rule {
                    self.messages.info(format!(
                        "Valid word with modified rules! +{} points",
                        outcome.points
                    ));
                } else {
                    self.messages
                        .success(format!("Valid word! +{} points", outcome.points));
                }
                info!(
                    word = %entry.word,
                    points = entry.points,
                    modified_rule = entry.modified_rule,
                    score = self.session.score(),
                    "word accepted"
                );

                let game_over = outcome.game_over && self.enter_game_over();
                self.release_controls();
                Ok(SubmitReport { entry, game_over })
            }
            Err(err) => {
                self.phase = previous_phase;
                warn!(word = %new_word, error = %err, "word submission failed");
                self.messages.error(service_error_text(&err));
                self.release_controls();
                Err(err.into())
            }
        }
    }

    fn validate_submission(&self, new_word: &str) -> Result<(), LocalValidationError> {
        if self.phase == SessionPhase::GameOver {
            return Err(LocalValidationError::GameOver);
        }
        if new_word.is_empty() {
            return Err(LocalValidationError::EmptyInput);
        }
        if self.session.has_used(new_word) || self.session.current_word() == new_word {
            return Err(LocalValidationError::DuplicateWord {
                word: new_word.to_string(),
            });
        }
        Ok(())
    }

    /// Applies a game-over signal from the service. Signals that arrive while
    /// there is no active word or the score is still zero are ignored.
    fn enter_game_over(&mut self) -> bool {
        if !self.session.has_active_word() || self.session.score() == 0 {
            info!(
                score = self.session.score(),
                "ignoring game-over signal for a session without progress"
            );
            return false;
        }
        self.phase = SessionPhase::GameOver;
        self.presenter.show_game_over(self.session.score());
        info!(final_score = self.session.score(), "game over");
        true
    }

    fn reject(&mut self, err: LocalValidationError) -> SessionError {
        debug!(error = %err, "rejected locally");
        self.messages.error(err.to_string());
        err.into()
    }

    fn record_history(&mut self, entry: HistoryEntry) {
        self.presenter
            .prepend_history(&entry, self.session.used_words());
        self.history.push(entry);
    }

    fn render_session(&self) {
        self.presenter.render_word(self.session.current_word());
        self.presenter.render_score(self.session.score());
    }

    fn release_controls(&self) {
        self.presenter
            .set_controls_enabled(self.phase != SessionPhase::GameOver);
    }
}

fn service_error_text(err: &ServiceError) -> String {
    match err.rejection_message() {
        Some(message) => message.to_string(),
        None => format!("Network error: {err}"),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
