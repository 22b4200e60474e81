//! Local word lists
//!
//! An in-memory list of five-letter words that can stand in for both remote
//! services: it hands out random targets and answers dictionary lookups.

pub mod loader;

use std::io;
use std::path::Path;

use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::core::Word;

/// A deduplicated list of words with fast membership checks
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list, dropping duplicates while keeping first-seen order
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();
        Self { words, index }
    }

    /// Load a list from a newline-separated file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a uniformly random word, `None` if the list is empty
    #[must_use]
    pub fn choose_random(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::loader::words_from_slice;
    use super::*;

    #[test]
    fn word_list_deduplicates() {
        let list = WordList::new(words_from_slice(&["crane", "CRANE", "slate"]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn word_list_contains_is_case_insensitive() {
        let list = WordList::new(words_from_slice(&["crane"]));
        assert!(list.contains(&Word::new("Crane").unwrap()));
        assert!(!list.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn choose_random_picks_member() {
        let list = WordList::new(words_from_slice(&["crane", "slate", "irate"]));
        for _ in 0..20 {
            let pick = list.choose_random().unwrap();
            assert!(list.contains(pick));
        }
    }

    #[test]
    fn choose_random_empty() {
        assert!(WordList::default().choose_random().is_none());
        assert!(WordList::default().is_empty());
    }
}
