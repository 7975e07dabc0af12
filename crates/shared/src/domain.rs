use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points at or above this value earn the larger celebration.
pub const HIGH_SCORE_POINTS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Celebration {
    None,
    Standard,
    Burst,
}

/// Candidate words returned by the Game Service for the current word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    pub original_rule_hints: Vec<String>,
    pub modified_rule_hints: Vec<String>,
}

impl HintSet {
    pub fn is_empty(&self) -> bool {
        self.original_rule_hints.is_empty() && self.modified_rule_hints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.original_rule_hints.len() + self.modified_rule_hints.len()
    }

    /// Hints in display order: original-rule hints first, then modified-rule hints.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.original_rule_hints
            .iter()
            .chain(self.modified_rule_hints.iter())
            .map(String::as_str)
    }

    /// Looks up a hint by its zero-based display position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub points: u64,
    pub modified_rule: bool,
    pub anagram_bonus: bool,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn starting_word(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            points: 0,
            modified_rule: false,
            anagram_bonus: false,
            recorded_at: Utc::now(),
        }
    }

    pub fn celebration(&self) -> Celebration {
        if self.points == 0 {
            Celebration::None
        } else if self.anagram_bonus || self.points >= HIGH_SCORE_POINTS {
            Celebration::Burst
        } else {
            Celebration::Standard
        }
    }
}
