/// An edit reported by the text field: its full value after the change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub value: String,
    pub is_auto_correct: bool,
}

/// Single-line text field the user types into.
///
/// Every edit yields an `InputEvent` carrying the whole field value, mirroring how
/// a browser input reports changes. `autocomplete` stands in for an input method
/// that replaces the text on the user's behalf.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn keystroke(&self) -> InputEvent {
        InputEvent {
            value: self.value.clone(),
            is_auto_correct: false,
        }
    }

    pub fn type_char(&mut self, c: char) -> InputEvent {
        self.value.push(c);
        self.keystroke()
    }

    pub fn backspace(&mut self) -> Option<InputEvent> {
        self.value.pop()?;
        Some(self.keystroke())
    }

    pub fn delete_word(&mut self) -> Option<InputEvent> {
        if self.value.is_empty() {
            return None;
        }
        self.value.clear();
        Some(self.keystroke())
    }

    /// Replace the text with `target`, as an autocomplete would.
    pub fn autocomplete(&mut self, target: &str) -> InputEvent {
        let leading = self.value.len() - self.value.trim_start().len();
        self.value.truncate(leading);
        self.value.push_str(target);
        InputEvent {
            value: self.value.clone(),
            is_auto_correct: true,
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
