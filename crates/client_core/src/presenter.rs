use shared::domain::{HintSet, HistoryEntry, MessageKind};

/// Render sink driven by the session controller.
pub trait Presenter: Send + Sync {
    fn render_word(&self, word: &str);
    fn render_score(&self, score: u64);
    fn clear_history(&self);
    fn prepend_history(&self, entry: &HistoryEntry, used_words: &[String]);
    fn show_hints(&self, hints: &HintSet);
    fn hide_hints(&self);
    fn show_game_over(&self, final_score: u64);
    fn hide_game_over(&self);
    fn show_message(&self, kind: MessageKind, text: &str);
    fn clear_message(&self);
    fn set_controls_enabled(&self, enabled: bool);
}

/// Presenter for headless use; drops every render call.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_word(&self, _word: &str) {}
    fn render_score(&self, _score: u64) {}
    fn clear_history(&self) {}
    fn prepend_history(&self, _entry: &HistoryEntry, _used_words: &[String]) {}
    fn show_hints(&self, _hints: &HintSet) {}
    fn hide_hints(&self) {}
    fn show_game_over(&self, _final_score: u64) {}
    fn hide_game_over(&self) {}
    fn show_message(&self, _kind: MessageKind, _text: &str) {}
    fn clear_message(&self) {}
    fn set_controls_enabled(&self, _enabled: bool) {}
}
