// File:    generator.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Orchestrates word selection and decoration into a finished password.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::catalog::{WordList, char_len};
use crate::composer::{LengthBounds, compose_for_length};
use crate::decorator::decorate;
use crate::error::{PassgenError, Result};
use crate::random::EntropySource;
use crate::selector::select_words;

/// Everything that shapes a single password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of words in the password. Must be positive.
    pub word_count: usize,
    /// Text placed between consecutive words. May be empty.
    pub separator: String,
    /// Exact length of the joined words, or `0` for no constraint.
    pub target_length: usize,
    /// Upper-case the first character of each word.
    pub capitalize: bool,
    /// Append one random decimal digit.
    pub append_digit: bool,
    /// Append one random symbol from [`crate::decorator::SYMBOLS`].
    pub append_symbol: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            target_length: 0,
            capitalize: false,
            append_digit: false,
            append_symbol: false,
        }
    }
}

impl GenerationRequest {
    /// The requested total length, if one was set.
    #[must_use]
    pub const fn length_constraint(&self) -> Option<usize> {
        if self.target_length > 0 {
            Some(self.target_length)
        } else {
            None
        }
    }

    /// Length of the separator in characters.
    #[must_use]
    pub fn separator_len(&self) -> usize {
        char_len(&self.separator)
    }

    /// Checks the request against `general` without drawing any randomness.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidWordCount`] or
    /// [`PassgenError::LengthOutOfRange`].
    pub fn validate(&self, general: &WordList) -> Result<()> {
        if self.word_count == 0 {
            return Err(PassgenError::InvalidWordCount);
        }
        if let Some(target) = self.length_constraint() {
            LengthBounds::for_catalog(general, self.word_count, self.separator_len())?
                .check(target, self.word_count)?;
        }
        Ok(())
    }
}

/// Generates one password for `request`.
///
/// With a length constraint the words come from [`compose_for_length`],
/// otherwise from [`select_words`]. The result is then passed through
/// [`decorate`].
///
/// # Errors
///
/// Fails on an invalid request, on an exhausted length search, or on an
/// entropy failure. Errors from the steps are returned unchanged.
pub fn generate_password<R: EntropySource + ?Sized>(
    request: &GenerationRequest,
    general: &WordList,
    short: &WordList,
    rng: &mut R,
) -> Result<String> {
    let words = select_for_request(request, general, short, &mut *rng)?;
    decorate(
        &words,
        request.capitalize,
        request.append_digit,
        request.append_symbol,
        &request.separator,
        rng,
    )
}

/// Picks the words for `request` without decorating them.
///
/// # Errors
///
/// Same as [`generate_password`], minus decoration.
pub fn select_for_request<R: EntropySource + ?Sized>(
    request: &GenerationRequest,
    general: &WordList,
    short: &WordList,
    rng: &mut R,
) -> Result<Vec<String>> {
    request.validate(general)?;
    match request.length_constraint() {
        Some(target) => compose_for_length(
            general,
            short,
            request.word_count,
            request.separator_len(),
            target,
            rng,
        ),
        None => select_words(general, request.word_count, rng),
    }
}
