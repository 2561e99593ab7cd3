// File:    composer.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Finds word combinations whose joined length matches a requested total exactly.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Length-constrained word selection.
//!
//! There is no closed-form way to pick random words that add up to an exact
//! length, so the composer runs randomized attempts against a wall-clock
//! budget. Each attempt fills the slots left to right, only accepting words
//! that still leave room for the remaining slots and separators. Once the room
//! for a slot drops to [`SHORT_WORD_THRESHOLD`] characters, words are drawn from
//! the short-word catalog instead.

use crate::catalog::{WordList, char_len};
use crate::error::{PassgenError, Result};
use crate::random::EntropySource;
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Wall-clock time allowed for the whole search.
pub const SEARCH_BUDGET: Duration = Duration::from_secs(1);

/// Candidate draws per slot before the attempt is abandoned.
pub const DRAWS_PER_SLOT: usize = 100;

/// Slots with at most this much room draw from the short-word catalog.
pub const SHORT_WORD_THRESHOLD: usize = 2;

/// Inclusive range of total lengths a request may ask for.
///
/// Totals cover the words and the separators between them, but not an
/// appended digit or symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest allowed total length.
    pub min: usize,
    /// Longest allowed total length.
    pub max: usize,
}

impl LengthBounds {
    /// Word length assumed for the shortest general word.
    pub const ASSUMED_SHORTEST: usize = 3;
    /// Word length assumed for the longest general word.
    pub const ASSUMED_LONGEST: usize = 14;

    /// Bounds for `word_count` words of `shortest..=longest` characters.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidWordCount`] if `word_count` is zero.
    pub fn new(
        word_count: usize,
        separator_len: usize,
        shortest: usize,
        longest: usize,
    ) -> Result<Self> {
        if word_count == 0 {
            return Err(PassgenError::InvalidWordCount);
        }
        let separators = (word_count - 1).saturating_mul(separator_len);
        Ok(Self {
            min: word_count.saturating_mul(shortest).saturating_add(separators),
            max: word_count.saturating_mul(longest).saturating_add(separators),
        })
    }

    /// Bounds using the fixed 3 to 14 character word length assumption.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidWordCount`] if `word_count` is zero.
    pub fn assumed(word_count: usize, separator_len: usize) -> Result<Self> {
        Self::new(
            word_count,
            separator_len,
            Self::ASSUMED_SHORTEST,
            Self::ASSUMED_LONGEST,
        )
    }

    /// Bounds measured from the actual word lengths in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidWordCount`] if `word_count` is zero.
    pub fn for_catalog(
        catalog: &WordList,
        word_count: usize,
        separator_len: usize,
    ) -> Result<Self> {
        Self::new(
            word_count,
            separator_len,
            catalog.shortest(),
            catalog.longest(),
        )
    }

    /// Whether `length` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }

    /// Fails unless `requested` lies within the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::LengthOutOfRange`] carrying both bounds.
    pub fn check(&self, requested: usize, word_count: usize) -> Result<()> {
        if self.contains(requested) {
            Ok(())
        } else {
            Err(PassgenError::LengthOutOfRange {
                requested,
                word_count,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Selects `word_count` words whose lengths plus separators sum to exactly
/// `target_length` characters.
///
/// Slots with more than [`SHORT_WORD_THRESHOLD`] characters of room draw
/// from `general`, the rest from `short`.
///
/// # Errors
///
/// - [`PassgenError::InvalidWordCount`] if `word_count` is zero.
/// - [`PassgenError::LengthOutOfRange`] if `target_length` is outside
///   [`LengthBounds::for_catalog`]; no randomness is consumed in that case.
/// - [`PassgenError::NoCombinationFound`] if [`SEARCH_BUDGET`] elapses first.
/// - Any entropy source failure, unchanged.
pub fn compose_for_length<R: EntropySource + ?Sized>(
    general: &WordList,
    short: &WordList,
    word_count: usize,
    separator_len: usize,
    target_length: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    LengthBounds::for_catalog(general, word_count, separator_len)?
        .check(target_length, word_count)?;

    let started = Instant::now();
    let mut attempts: u64 = 0;
    while started.elapsed() < SEARCH_BUDGET {
        attempts += 1;
        let found = attempt(
            general,
            short,
            word_count,
            separator_len,
            target_length,
            &mut *rng,
        )?;
        if let Some(words) = found {
            debug!(
                "Found {word_count} words for length {target_length} \
                 after {attempts} attempt(s) in {:?}.",
                started.elapsed()
            );
            return Ok(words);
        }
    }

    warn!("Gave up on length {target_length} after {attempts} attempts.");
    Err(PassgenError::NoCombinationFound(target_length))
}

/// One left-to-right pass over the slots.
///
/// Returns `Ok(None)` when the pass is abandoned or its total misses the target.
fn attempt<R: EntropySource + ?Sized>(
    general: &WordList,
    short: &WordList,
    word_count: usize,
    separator_len: usize,
    target_length: usize,
    rng: &mut R,
) -> Result<Option<Vec<String>>> {
    let mut words = Vec::with_capacity(word_count);
    let mut remaining = target_length;

    for slot in 0..word_count {
        let trailing_separators = (word_count - slot - 1).saturating_mul(separator_len);
        let max_word_len = match remaining.checked_sub(trailing_separators) {
            Some(room) if room > 0 => room,
            _ => return Ok(None),
        };

        let catalog = if max_word_len <= SHORT_WORD_THRESHOLD {
            short
        } else {
            general
        };

        let Some(word) = draw_fitting(catalog, max_word_len, &mut *rng)? else {
            return Ok(None);
        };

        remaining -= char_len(word);
        if slot + 1 < word_count {
            remaining -= separator_len;
        }
        words.push(word.to_string());
    }

    Ok((remaining == 0).then_some(words))
}

/// Draws up to [`DRAWS_PER_SLOT`] candidates, returning the first that fits.
fn draw_fitting<'a, R: EntropySource + ?Sized>(
    catalog: &'a WordList,
    max_word_len: usize,
    rng: &mut R,
) -> Result<Option<&'a str>> {
    for _ in 0..DRAWS_PER_SLOT {
        let candidate = catalog.choose(&mut *rng)?;
        if char_len(candidate) <= max_word_len {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
