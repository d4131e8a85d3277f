use std::collections::HashSet;

/// A committed word as the user typed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedWord {
    pub word: String,
    pub is_correct: bool,
}

/// A committed word that did not match its target.
///
/// `expected` is `None` when the commit happened past the end of the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongWord {
    pub expected: Option<String>,
    pub actual: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub gross: f64,
    pub net: f64,
    pub accuracy: f64,
}

impl Default for SessionResult {
    fn default() -> Self {
        Self {
            gross: 0.0,
            net: 0.0,
            accuracy: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_index: usize,
    pub current_typing: String,
    pub typed_words: Vec<TypedWord>,
    pub wrong_typed_words: Vec<WrongWord>,
    // keyed by word text, so repeated targets collapse into one entry
    pub fixed_words: HashSet<String>,
    pub started: bool,
    pub finished: bool,
    pub result: SessionResult,
}
