//! The word lists shipped inside the binary, and their on-disk overrides.

use log::{debug, info};
use passgen_core::{Result, WordList, char_len};
use std::collections::BTreeMap;
use std::path::Path;

const WORDS: &str = include_str!("../wordlists/words.txt");
const SHORT_WORDS: &str = include_str!("../wordlists/short-words.txt");

/// The general and short-word catalogs for one run.
pub(crate) struct Catalogs {
    pub(crate) general: WordList,
    pub(crate) short: WordList,
}

impl Catalogs {
    /// Loads each catalog from its file when given, otherwise from the embedded copy.
    pub(crate) fn load(
        words_file: Option<&Path>,
        short_words_file: Option<&Path>,
    ) -> Result<Self> {
        let general = load_or_embedded(words_file, "words.txt", WORDS)?;
        let short = load_or_embedded(short_words_file, "short-words.txt", SHORT_WORDS)?;
        info!(
            "Using {} general words ({}-{} characters) and {} short words.",
            general.len(),
            general.shortest(),
            general.longest(),
            short.len()
        );
        debug!("General words by length: {:?}", length_histogram(&general));
        debug!("Short words by length: {:?}", length_histogram(&short));
        Ok(Self { general, short })
    }
}

/// Number of words in `list` for each length in characters.
fn length_histogram(list: &WordList) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for word in list.words() {
        *histogram.entry(char_len(word)).or_insert(0) += 1;
    }
    histogram
}

fn load_or_embedded(path: Option<&Path>, name: &str, embedded: &str) -> Result<WordList> {
    match path {
        Some(path) => WordList::load(path),
        None => WordList::parse(name, embedded),
    }
}
