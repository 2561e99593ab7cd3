// File:    catalog.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Immutable, validated word lists that passphrases are drawn from.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{PassgenError, Result};
use crate::random::EntropySource;
use std::fs;
use std::path::Path;

/// Length of `s` in characters.
///
/// Every length in this crate (words, separators, targets) is measured this way.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// An ordered, non-empty list of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    words: Vec<String>,
    shortest: usize,
    longest: usize,
}

impl WordList {
    /// Builds a word list from raw entries.
    ///
    /// Each entry is trimmed and blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::CatalogLoad`] if no words remain.
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let words: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(PassgenError::CatalogLoad {
                catalog: name,
                reason: "no words found".to_string(),
            });
        }

        let shortest = words.iter().map(|w| char_len(w)).min().unwrap_or_default();
        let longest = words.iter().map(|w| char_len(w)).max().unwrap_or_default();

        Ok(Self {
            name,
            words,
            shortest,
            longest,
        })
    }

    /// Parses newline-separated words.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::CatalogLoad`] if `text` holds no words.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(name, text.lines())
    }

    /// Reads a newline-separated word file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::CatalogLoad`] if the file cannot be read or is empty.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| PassgenError::CatalogLoad {
            catalog: name.clone(),
            reason: e.to_string(),
        })?;
        let list = Self::parse(name, &text)?;
        log::debug!("Loaded {} words from '{}'.", list.len(), list.name());
        Ok(list)
    }

    /// The name given when the list was built (a path for loaded files).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All words, in their original order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in characters of the shortest word.
    #[must_use]
    pub const fn shortest(&self) -> usize {
        self.shortest
    }

    /// Length in characters of the longest word.
    #[must_use]
    pub const fn longest(&self) -> usize {
        self.longest
    }

    /// Draws one word uniformly at random.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the entropy source, and returns
    /// [`PassgenError::InvalidRange`] if it yields an index past the end.
    pub fn choose<R: EntropySource + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        let index = rng.random_index(self.words.len())?;
        self.words.get(index).map(String::as_str).ok_or_else(|| {
            PassgenError::InvalidRange(format!(
                "index {index} out of range for {} words",
                self.words.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use std::io::Write;

    #[test]
    fn entries_are_trimmed_and_blanks_skipped() {
        let list = WordList::parse("test", "  cat \n\n\tdog\n   \nblue\n").unwrap();
        assert_eq!(list.words(), ["cat", "dog", "blue"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn empty_input_is_a_load_error() {
        let err = WordList::parse("short", " \n\n").unwrap_err();
        assert_eq!(
            err,
            PassgenError::CatalogLoad {
                catalog: "short".to_string(),
                reason: "no words found".to_string(),
            }
        );
    }

    #[test]
    fn measures_word_lengths() {
        let list = WordList::new("test", ["cat", "elephant", "blue"]).unwrap();
        assert_eq!(list.shortest(), 3);
        assert_eq!(list.longest(), 8);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(char_len("café"), 4);
        let list = WordList::new("test", ["naïve"]).unwrap();
        assert_eq!(list.longest(), 5);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta\n\ngamma").unwrap();
        let list = WordList::load(file.path()).unwrap();
        assert_eq!(list.words(), ["alpha", "beta", "gamma"]);
        assert_eq!(list.name(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PassgenError::CatalogLoad { .. }));
    }

    #[test]
    fn choose_returns_listed_words() {
        let list = WordList::new("test", ["cat", "dog"]).unwrap();
        let mut rng = SeededRandom::new(1);
        for _ in 0..50 {
            let word = list.choose(&mut rng).unwrap();
            assert!(word == "cat" || word == "dog");
        }
    }

    /// Ignores the bound and always answers with the same index.
    struct Fixed(usize);

    impl EntropySource for Fixed {
        fn random_index(&mut self, _bound: usize) -> Result<usize> {
            Ok(self.0)
        }
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let list = WordList::new("test", ["cat", "dog"]).unwrap();
        assert_eq!(list.choose(&mut Fixed(1)).unwrap(), "dog");
        assert!(matches!(
            list.choose(&mut Fixed(2)),
            Err(PassgenError::InvalidRange(_))
        ));
    }
}
