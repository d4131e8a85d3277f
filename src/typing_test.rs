use std::time::Instant;

use tracing::debug;

use crate::countdown::{Countdown, CountdownSignal};
use crate::engine::SessionEngine;
use crate::input::{InputEvent, InputField};
use crate::words::WordSource;

/// One running typing test: the input field, countdown and session engine
/// wired together, plus the word source used on restart.
pub struct TypingTest {
    engine: SessionEngine,
    countdown: Countdown,
    field: InputField,
    source: Box<dyn WordSource>,
}

impl TypingTest {
    pub fn new(source: Box<dyn WordSource>, duration_secs: u64) -> Self {
        Self {
            engine: SessionEngine::new(source.generate()),
            countdown: Countdown::new(duration_secs),
            field: InputField::new(),
            source,
        }
    }

    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    pub fn seconds_remaining(&self, now: Instant) -> u64 {
        self.countdown.seconds_remaining(now)
    }

    /// Settles any elapsed seconds first so a key landing after the deadline
    /// finds the session already finished.
    fn accepts_input(&mut self, now: Instant) -> bool {
        self.tick(now);
        !self.engine.has_finished()
    }

    fn apply(&mut self, event: InputEvent, now: Instant) {
        let index = self.engine.current_index();
        self.engine.on_input(&event.value, event.is_auto_correct);

        if self.engine.current_index() != index {
            self.field.clear();
        }

        if self.engine.has_started() && !self.countdown.is_running() && !self.engine.has_finished()
        {
            debug!(secs = self.countdown.total_secs(), "countdown started");
            self.countdown.start(now);
        }
    }

    pub fn type_char(&mut self, c: char, now: Instant) {
        if !self.accepts_input(now) {
            return;
        }
        let event = self.field.type_char(c);
        self.apply(event, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if !self.accepts_input(now) {
            return;
        }
        if let Some(event) = self.field.backspace() {
            self.apply(event, now);
        }
    }

    pub fn delete_word(&mut self, now: Instant) {
        if !self.accepts_input(now) {
            return;
        }
        if let Some(event) = self.field.delete_word() {
            self.apply(event, now);
        }
    }

    /// Complete the current word on the user's behalf
    pub fn autocomplete(&mut self, now: Instant) {
        if !self.accepts_input(now) {
            return;
        }
        let Some(target) = self.engine.current_word().map(str::to_string) else {
            return;
        };
        let event = self.field.autocomplete(&target);
        self.apply(event, now);
    }

    pub fn tick(&mut self, now: Instant) {
        for signal in self.countdown.poll(now) {
            match signal {
                CountdownSignal::Tick(elapsed) => self.engine.on_tick(elapsed),
                CountdownSignal::Timeout => self.engine.end(),
            }
        }
    }

    pub fn restart(&mut self) {
        self.engine.reset(self.source.generate());
        self.countdown.reset();
        self.field.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fixed(list: &'static [&'static str]) -> Box<dyn WordSource> {
        Box::new(move || list.iter().map(|w| w.to_string()).collect::<Vec<String>>())
    }

    fn type_str(test: &mut TypingTest, text: &str, now: Instant) {
        for c in text.chars() {
            test.type_char(c, now);
        }
    }

    #[test]
    fn test_first_keystroke_starts_countdown() {
        let mut test = TypingTest::new(fixed(&["the", "cat"]), 10);
        let now = Instant::now();

        assert!(!test.countdown().is_running());
        test.type_char('t', now);

        assert!(test.engine().has_started());
        assert!(test.countdown().is_running());
        assert_eq!(test.seconds_remaining(now + Duration::from_secs(3)), 7);
    }

    #[test]
    fn test_field_cleared_after_commit() {
        let mut test = TypingTest::new(fixed(&["the", "cat"]), 10);
        let now = Instant::now();

        type_str(&mut test, "the", now);
        assert_eq!(test.field().value(), "the");

        test.type_char(' ', now);
        assert_eq!(test.field().value(), "");
        assert_eq!(test.engine().current_index(), 1);
    }

    #[test]
    fn test_whitespace_stays_in_field() {
        let mut test = TypingTest::new(fixed(&["the"]), 10);
        let now = Instant::now();

        type_str(&mut test, "  ", now);

        assert_eq!(test.field().value(), "  ");
        assert_eq!(test.engine().current_index(), 0);
    }

    #[test]
    fn test_backspace_updates_current_typing() {
        let mut test = TypingTest::new(fixed(&["the"]), 10);
        let now = Instant::now();

        type_str(&mut test, "thx", now);
        test.backspace(now);

        assert_eq!(test.engine().current_typing(), "th");
    }

    #[test]
    fn test_delete_word() {
        let mut test = TypingTest::new(fixed(&["the"]), 10);
        let now = Instant::now();

        type_str(&mut test, "tha", now);
        test.delete_word(now);

        assert_eq!(test.engine().current_typing(), "");
        assert!(test.field().is_empty());
    }

    #[test]
    fn test_autocomplete_marks_fixed_word() {
        let mut test = TypingTest::new(fixed(&["sat", "on"]), 10);
        let now = Instant::now();

        test.type_char('s', now);
        test.autocomplete(now);
        test.type_char(' ', now);

        assert!(test.engine().fixed_words().contains("sat"));
        assert!(test.engine().typed_words()[0].is_correct);
    }

    #[test]
    fn test_autocomplete_past_end_is_ignored() {
        let mut test = TypingTest::new(fixed(&["a"]), 10);
        let now = Instant::now();

        type_str(&mut test, "a ", now);
        test.autocomplete(now);

        assert!(test.engine().fixed_words().is_empty());
        assert!(test.field().is_empty());
    }

    #[test]
    fn test_tick_and_timeout() {
        let mut test = TypingTest::new(fixed(&["the", "cat"]), 2);
        let start = Instant::now();

        type_str(&mut test, "the ", start);
        test.tick(start + Duration::from_secs(1));
        assert_eq!(test.engine().result().gross, 60.0);
        assert!(!test.engine().has_finished());

        test.tick(start + Duration::from_secs(2));
        assert!(test.engine().has_finished());
        assert_eq!(test.engine().result().gross, 30.0);

        type_str(&mut test, "cat ", start + Duration::from_secs(3));
        assert_eq!(test.engine().typed_words().len(), 1);
        assert!(test.field().is_empty());
    }

    #[test]
    fn test_key_after_deadline_is_not_scored() {
        let mut test = TypingTest::new(fixed(&["the", "cat", "sat"]), 3);
        let start = Instant::now();

        type_str(&mut test, "the ", start);
        // no poll between the deadline and the next keys
        type_str(&mut test, "cat ", start + Duration::from_secs(5));

        assert!(test.engine().has_finished());
        assert_eq!(test.engine().typed_words().len(), 1);
        assert_eq!(test.engine().current_typing(), "");
        assert!(test.field().is_empty());
        assert_eq!(test.engine().result().gross, 20.0);

        test.tick(start + Duration::from_secs(5));
        assert_eq!(test.engine().result().gross, 20.0);
    }

    #[test]
    fn test_key_before_deadline_catches_up_ticks() {
        let mut test = TypingTest::new(fixed(&["the", "cat"]), 10);
        let start = Instant::now();

        type_str(&mut test, "the ", start);
        test.type_char('c', start + Duration::from_millis(2500));

        assert!(!test.engine().has_finished());
        assert_eq!(test.engine().result().gross, 30.0);
        assert_eq!(test.engine().current_typing(), "c");
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut test = TypingTest::new(fixed(&["the"]), 1);
        test.tick(Instant::now() + Duration::from_secs(5));
        assert!(!test.engine().has_finished());
    }

    #[test]
    fn test_restart() {
        let mut test = TypingTest::new(fixed(&["the", "cat"]), 1);
        let start = Instant::now();
        type_str(&mut test, "the ca", start);
        test.tick(start + Duration::from_secs(1));
        assert!(test.engine().has_finished());

        test.restart();

        assert!(!test.engine().has_started());
        assert!(!test.engine().has_finished());
        assert!(!test.countdown().is_running());
        assert!(test.field().is_empty());
        assert_eq!(test.engine().words(), &["the".to_string(), "cat".to_string()][..]);
    }
}
