#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    AwaitingInput,
    Submitting,
    GameOver,
}

/// Word chain state owned by the session controller.
///
/// `current_word` only moves into `used_words` when a newer word replaces it,
/// and `score` only ever grows between resets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_word: String,
    score: u64,
    used_words: Vec<String>,
}

impl Session {
    pub fn starting_with(word: impl Into<String>) -> Self {
        Self {
            current_word: word.into(),
            score: 0,
            used_words: Vec::new(),
        }
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn has_active_word(&self) -> bool {
        !self.current_word.is_empty()
    }

    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Replaces the current word with `next` and credits `points`.
    pub(crate) fn advance(&mut self, next: String, points: u64) {
        let previous = std::mem::replace(&mut self.current_word, next);
        if !previous.is_empty() {
            self.used_words.push(previous);
        }
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
