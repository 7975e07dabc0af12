use std::{
    io::{self, Stdout, Write},
    sync::Mutex,
};

use client_core::Presenter;
use shared::domain::{Celebration, HintSet, HistoryEntry, MessageKind};

/// Presenter that prints game updates as plain lines.
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalPresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn line(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // A closed stdout is not worth failing the game over.
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn history_line(entry: &HistoryEntry) -> String {
    let mut line = format!("  {} +{} points", entry.word, entry.points);
    if entry.modified_rule {
        line.push_str(" (modified rule)");
    }
    if entry.anagram_bonus {
        line.push_str(" [anagram]");
    }
    match entry.celebration() {
        Celebration::None => {}
        Celebration::Standard => line.push_str(" *"),
        Celebration::Burst => line.push_str(" ***"),
    }
    line
}

fn used_line(used_words: &[String]) -> Option<String> {
    if used_words.is_empty() {
        return None;
    }
    Some(format!("  used: {}", used_words.join(", ")))
}

fn hint_lines(hints: &HintSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(hints.len() + 4);
    let mut number = 1;
    for (title, list) in [
        ("Original rule:", &hints.original_rule_hints),
        ("Modified rule:", &hints.modified_rule_hints),
    ] {
        lines.push(title.to_string());
        if list.is_empty() {
            lines.push("  No hints available".to_string());
        }
        for hint in list {
            lines.push(format!("  {number}. {hint}"));
            number += 1;
        }
    }
    lines
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn render_word(&self, word: &str) {
        if !word.is_empty() {
            self.line(&format!("Current word: {word}"));
        }
    }

    fn render_score(&self, score: u64) {
        self.line(&format!("Score: {score}"));
    }

    fn clear_history(&self) {}

    fn prepend_history(&self, entry: &HistoryEntry, used_words: &[String]) {
        self.line(&history_line(entry));
        if let Some(used) = used_line(used_words) {
            self.line(&used);
        }
    }

    fn show_hints(&self, hints: &HintSet) {
        for line in hint_lines(hints) {
            self.line(&line);
        }
    }

    fn hide_hints(&self) {}

    fn show_game_over(&self, final_score: u64) {
        self.line(&format!(
            "Game over! Final score: {final_score}. Type /restart to play again."
        ));
    }

    fn hide_game_over(&self) {}

    fn show_message(&self, kind: MessageKind, text: &str) {
        let tag = match kind {
            MessageKind::Error => "error",
            MessageKind::Success => "ok",
            MessageKind::Info => "info",
        };
        self.line(&format!("[{tag}] {text}"));
    }

    // Printed lines cannot be withdrawn.
    fn clear_message(&self) {}

    fn set_controls_enabled(&self, _enabled: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn printed(f: impl FnOnce(&TerminalPresenter<Vec<u8>>)) -> String {
        let presenter = TerminalPresenter::new(Vec::new());
        f(&presenter);
        String::from_utf8(presenter.into_inner()).expect("utf8")
    }

    #[test]
    fn numbers_hints_across_both_lists() {
        let out = printed(|p| {
            p.show_hints(&HintSet {
                original_rule_hints: vec!["tone".into(), "note".into()],
                modified_rule_hints: vec!["stent".into()],
            })
        });
        assert_eq!(
            out,
            "Original rule:\n  1. tone\n  2. note\nModified rule:\n  3. stent\n"
        );
    }

    #[test]
    fn empty_hint_lists_show_placeholder() {
        let out = printed(|p| p.show_hints(&HintSet::default()));
        assert_eq!(
            out,
            "Original rule:\n  No hints available\nModified rule:\n  No hints available\n"
        );
    }

    #[test]
    fn history_line_marks_anagram_bursts() {
        let entry = HistoryEntry {
            word: "notes".into(),
            points: 20,
            modified_rule: false,
            anagram_bonus: true,
            recorded_at: Utc::now(),
        };
        assert_eq!(history_line(&entry), "  notes +20 points [anagram] ***");
        assert_eq!(
            history_line(&HistoryEntry::starting_word("stone")),
            "  stone +0 points"
        );
    }

    #[test]
    fn history_entry_lists_retired_words() {
        let entry = HistoryEntry {
            word: "cast".into(),
            points: 10,
            modified_rule: false,
            anagram_bonus: false,
            recorded_at: Utc::now(),
        };
        let out = printed(|p| p.prepend_history(&entry, &["cat".into(), "cats".into()]));
        assert_eq!(out, "  cast +10 points *\n  used: cat, cats\n");
    }

    #[test]
    fn starting_word_has_no_used_line() {
        let out = printed(|p| p.prepend_history(&HistoryEntry::starting_word("stone"), &[]));
        assert_eq!(out, "  stone +0 points\n");
    }

    #[test]
    fn messages_are_tagged_by_kind() {
        let out = printed(|p| p.show_message(MessageKind::Error, "Please enter a word"));
        assert_eq!(out, "[error] Please enter a word\n");
    }
}
