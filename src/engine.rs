use std::collections::HashSet;

use tracing::{debug, info};

use crate::scoring::compute_result;
use crate::session::{SessionResult, SessionState, TypedWord, WrongWord};

/// Drives a single typing session from input events and timer ticks.
///
/// All mutation goes through `on_input`, `on_tick`, `end` and `reset`.
/// Once the session is finished, input and ticks are ignored.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    words: Vec<String>,
    state: SessionState,
}

impl SessionEngine {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            state: SessionState::default(),
        }
    }

    /// Consume the full text of the input field after an edit.
    ///
    /// `is_auto_correct` marks edits made by the input method rather than a keystroke.
    pub fn on_input(&mut self, raw: &str, is_auto_correct: bool) {
        if self.state.finished {
            return;
        }

        if is_auto_correct {
            if let Some(target) = self.current_word() {
                debug!(word = target, "auto-corrected");
                let target = target.to_string();
                self.state.fixed_words.insert(target);
            }
        }

        let trimmed = raw.trim();

        if raw.ends_with(' ') && !trimmed.is_empty() {
            self.commit(trimmed);
        } else {
            self.state.current_typing = trimmed.to_string();
        }

        if !self.state.started {
            info!("session started");
            self.state.started = true;
        }
    }

    fn commit(&mut self, typed: &str) {
        let expected = self.current_word().map(str::to_string);
        let is_correct = expected.as_deref() == Some(typed);

        debug!(
            index = self.state.current_index,
            expected = expected.as_deref().unwrap_or_default(),
            typed,
            is_correct,
            "word committed"
        );

        if !is_correct {
            self.state.wrong_typed_words.push(WrongWord {
                expected,
                actual: typed.to_string(),
            });
        }

        self.state.typed_words.push(TypedWord {
            word: typed.to_string(),
            is_correct,
        });
        self.state.current_index += 1;
        self.state.current_typing.clear();
    }

    /// Recompute the live result for `elapsed_secs` whole seconds since start.
    pub fn on_tick(&mut self, elapsed_secs: u64) {
        if self.state.finished {
            return;
        }

        if let Some(result) = compute_result(
            self.state.typed_words.len(),
            self.state.wrong_typed_words.len(),
            self.state.fixed_words.len(),
            elapsed_secs,
        ) {
            debug!(elapsed_secs, ?result, "tick");
            self.state.result = result;
        }
    }

    pub fn end(&mut self) {
        if self.state.finished {
            return;
        }

        info!(
            typed = self.state.typed_words.len(),
            wrong = self.state.wrong_typed_words.len(),
            fixed = self.state.fixed_words.len(),
            gross = self.state.result.gross,
            net = self.state.result.net,
            accuracy = self.state.result.accuracy,
            "session finished"
        );
        self.state.finished = true;
    }

    pub fn reset(&mut self, words: Vec<String>) {
        info!(words = words.len(), "session reset");
        self.words = words;
        self.state = SessionState::default();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Target word at the current index, `None` once the list is exhausted
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.state.current_index).map(String::as_str)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_typing(&self) -> &str {
        &self.state.current_typing
    }

    pub fn typed_words(&self) -> &[TypedWord] {
        &self.state.typed_words
    }

    pub fn wrong_typed_words(&self) -> &[WrongWord] {
        &self.state.wrong_typed_words
    }

    pub fn fixed_words(&self) -> &HashSet<String> {
        &self.state.fixed_words
    }

    pub fn result(&self) -> SessionResult {
        self.state.result
    }

    pub fn has_started(&self) -> bool {
        self.state.started
    }

    pub fn has_finished(&self) -> bool {
        self.state.finished
    }
}
