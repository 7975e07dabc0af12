use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use shared::{
    domain::{HintSet, HistoryEntry, MessageKind},
    error::ServiceRejection,
    protocol::HintRequest,
};

use crate::{
    error::ServiceError,
    presenter::Presenter,
    service::{GameService, HintOutcome, SubmitOutcome, WordSubmission},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Word(String),
    Score(u64),
    ClearHistory,
    History(HistoryEntry),
    ShowHints(HintSet),
    HideHints,
    ShowGameOver(u64),
    HideGameOver,
    Message(MessageKind, String),
    ClearMessage,
    Controls(bool),
}

#[derive(Default)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<PresenterCall>>,
}

impl RecordingPresenter {
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().expect("presenter lock").clone()
    }

    pub fn last_message(&self) -> Option<(MessageKind, String)> {
        self.calls().into_iter().rev().find_map(|call| match call {
            PresenterCall::Message(kind, text) => Some((kind, text)),
            _ => None,
        })
    }

    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Message(kind, text) => Some((kind, text)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == PresenterCall::ClearMessage)
            .count()
    }

    pub fn controls_enabled(&self) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|call| match call {
            PresenterCall::Controls(enabled) => Some(enabled),
            _ => None,
        })
    }

    pub fn contains(&self, expected: &PresenterCall) -> bool {
        self.calls().iter().any(|call| call == expected)
    }

    fn push(&self, call: PresenterCall) {
        self.calls.lock().expect("presenter lock").push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn render_word(&self, word: &str) {
        self.push(PresenterCall::Word(word.to_string()));
    }

    fn render_score(&self, score: u64) {
        self.push(PresenterCall::Score(score));
    }

    fn clear_history(&self) {
        self.push(PresenterCall::ClearHistory);
    }

    fn prepend_history(&self, entry: &HistoryEntry, _used_words: &[String]) {
        self.push(PresenterCall::History(entry.clone()));
    }

    fn show_hints(&self, hints: &HintSet) {
        self.push(PresenterCall::ShowHints(hints.clone()));
    }

    fn hide_hints(&self) {
        self.push(PresenterCall::HideHints);
    }

    fn show_game_over(&self, final_score: u64) {
        self.push(PresenterCall::ShowGameOver(final_score));
    }

    fn hide_game_over(&self) {
        self.push(PresenterCall::HideGameOver);
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        self.push(PresenterCall::Message(kind, text.to_string()));
    }

    fn clear_message(&self) {
        self.push(PresenterCall::ClearMessage);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.push(PresenterCall::Controls(enabled));
    }
}

/// In-memory Game Service that replays queued replies per endpoint.
#[derive(Default)]
pub struct ScriptedService {
    starts: Mutex<VecDeque<Result<String, ServiceError>>>,
    submits: Mutex<VecDeque<Result<SubmitOutcome, ServiceError>>>,
    hints: Mutex<VecDeque<Result<HintOutcome, ServiceError>>>,
    submissions: Mutex<Vec<WordSubmission>>,
    hint_requests: Mutex<Vec<HintRequest>>,
    start_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn starting_with(word: &str) -> Self {
        let service = Self::default();
        service.push_start(Ok(word.to_string()));
        service
    }

    pub fn push_start(&self, reply: Result<String, ServiceError>) {
        self.starts.lock().expect("lock").push_back(reply);
    }

    pub fn push_submit(&self, reply: Result<SubmitOutcome, ServiceError>) {
        self.submits.lock().expect("lock").push_back(reply);
    }

    pub fn push_hints(&self, reply: Result<HintOutcome, ServiceError>) {
        self.hints.lock().expect("lock").push_back(reply);
    }

    pub fn submissions(&self) -> Vec<WordSubmission> {
        self.submissions.lock().expect("lock").clone()
    }

    pub fn hint_requests(&self) -> Vec<HintRequest> {
        self.hint_requests.lock().expect("lock").clone()
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }
}

fn unscripted() -> ServiceError {
    ServiceError::Transport("no scripted reply".into())
}

#[async_trait]
impl GameService for ScriptedService {
    async fn start_game(&self) -> Result<String, ServiceError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.starts
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn submit_word(&self, submission: &WordSubmission) -> Result<SubmitOutcome, ServiceError> {
        self.submissions
            .lock()
            .expect("lock")
            .push(submission.clone());
        self.submits
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn get_hints(&self, request: &HintRequest) -> Result<HintOutcome, ServiceError> {
        self.hint_requests
            .lock()
            .expect("lock")
            .push(request.clone());
        self.hints
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }
}

pub fn accepted(points: u64) -> Result<SubmitOutcome, ServiceError> {
    Ok(SubmitOutcome {
        points,
        modified_rule: false,
        game_over: false,
    })
}

pub fn accepted_with_game_over(points: u64) -> Result<SubmitOutcome, ServiceError> {
    Ok(SubmitOutcome {
        points,
        modified_rule: false,
        game_over: true,
    })
}

pub fn rejected<T>(message: &str) -> Result<T, ServiceError> {
    Err(ServiceError::Rejected(ServiceRejection::new(message)))
}

pub fn hints(original: &[&str], modified: &[&str]) -> HintSet {
    HintSet {
        original_rule_hints: original.iter().map(|hint| hint.to_string()).collect(),
        modified_rule_hints: modified.iter().map(|hint| hint.to_string()).collect(),
    }
}
