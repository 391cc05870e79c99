//! Word lists for the game
//!
//! The built-in list is embedded in the binary; custom lists load from files.
//! A [`Dictionary`] serves both as the pool of targets and the set of
//! accepted guesses.

mod embedded;
pub mod emoji;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name that selects the embedded list instead of a file
pub const BUILTIN: &str = "builtin";

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {0} contains no five-letter words")]
    Empty(PathBuf),
}

/// A deduplicated set of playable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from words, dropping duplicates but keeping first-seen order
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let mut ordered = Vec::new();
        for word in words {
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }
        Self {
            words: ordered,
            index,
        }
    }

    /// The embedded list
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Load a list by name: [`BUILTIN`] or a file path
    ///
    /// # Errors
    /// Returns `WordlistError` if the file cannot be read or holds no valid words.
    pub fn load(source: &str) -> Result<Self, WordlistError> {
        if source == BUILTIN {
            return Ok(Self::builtin());
        }
        Self::from_file(source)
    }

    /// Load a list from a file
    ///
    /// # Errors
    /// Returns `WordlistError` if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if words.is_empty() {
            return Err(WordlistError::Empty(path.to_path_buf()));
        }
        Ok(Self::from_words(words))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a random target
    pub fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Pick a random target that has an emoji clue, falling back to any word
    pub fn random_themed_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        let themed: Vec<&Word> = self.words.iter().filter(|w| emoji::has_theme(w)).collect();
        match themed.choose(rng) {
            Some(&word) => Some(word),
            None => self.random_target(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase_five_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn builtin_contains_common_words() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.len(), WORDS_COUNT);
        for text in ["crane", "trace", "erase", "speed", "apple"] {
            assert!(dict.contains(&Word::new(text).unwrap()), "{text}");
        }
        assert!(!dict.contains(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn from_words_deduplicates() {
        let dict = Dictionary::from_words(loader::words_from_slice(&["crane", "CRANE", "slate"]));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "CRANE");
    }

    #[test]
    fn random_target_comes_from_the_list() {
        let dict = Dictionary::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = dict.random_target(&mut rng).unwrap();
            assert!(dict.contains(word));
        }
    }

    #[test]
    fn themed_target_has_emoji() {
        let dict = Dictionary::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let word = dict.random_themed_target(&mut rng).unwrap();
        assert!(emoji::has_theme(word));
    }

    #[test]
    fn themed_target_falls_back_without_themes() {
        let dict = Dictionary::from_words(loader::words_from_slice(&["crane"]));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            dict.random_themed_target(&mut rng).map(Word::text),
            Some("CRANE")
        );
    }

    #[test]
    fn load_builtin_by_name() {
        assert_eq!(Dictionary::load(BUILTIN).unwrap().len(), WORDS_COUNT);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Dictionary::load("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn empty_random_target_is_none() {
        let dict = Dictionary::from_words(Vec::new());
        assert!(dict.is_empty());
        assert!(dict.random_target(&mut rand::rng()).is_none());
    }
}
