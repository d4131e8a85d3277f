use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn load(name: &str) -> Result<Self> {
        let file = LANG_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;

        Ok(serde_json::from_str(contents)?)
    }

    /// Names of the bundled word lists
    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = LANG_DIR
            .files()
            .filter_map(|f| f.path().file_stem()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

/// Supplies the word list for a new session
pub trait WordSource {
    fn generate(&self) -> Vec<String>;
}

impl<F> WordSource for F
where
    F: Fn() -> Vec<String>,
{
    fn generate(&self) -> Vec<String> {
        self()
    }
}

/// Shuffled words drawn from a language.
///
/// Lists longer than the vocabulary are built from consecutive reshuffles.
#[derive(Debug, Clone)]
pub struct RandomWords {
    language: Language,
    count: usize,
}

impl RandomWords {
    pub fn new(language: Language, count: usize) -> Self {
        Self { language, count }
    }
}

impl WordSource for RandomWords {
    fn generate(&self) -> Vec<String> {
        let mut rng = rand::thread_rng();
        let mut words = Vec::with_capacity(self.count);

        if self.language.words.is_empty() {
            return words;
        }

        while words.len() < self.count {
            let mut batch = self.language.words.clone();
            batch.shuffle(&mut rng);
            batch.truncate(self.count - words.len());
            words.append(&mut batch);
        }

        debug!(language = %self.language.name, count = words.len(), "generated words");
        words
    }
}

/// Fixed word list taken from user-supplied text
#[derive(Debug, Clone)]
pub struct PromptWords {
    words: Vec<String>,
}

impl PromptWords {
    pub fn new(prompt: &str) -> Self {
        Self {
            words: prompt.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl WordSource for PromptWords {
    fn generate(&self) -> Vec<String> {
        self.words.clone()
    }
}
