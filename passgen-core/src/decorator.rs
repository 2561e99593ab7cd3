// File:    decorator.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Turns selected words into the final password string.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{PassgenError, Result};
use crate::random::EntropySource;

/// Symbols that may be appended to a password.
pub const SYMBOLS: [char; 24] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '+', '=', '~', '`', '|', '\\',
    '/', '?', '>', '<', '.', ',',
];

/// Upper-cases the first character of `word`, leaving the rest untouched.
///
/// A character whose upper case spans several characters (`ß` becomes `SS`)
/// is kept as is, so the result always has as many characters as `word`.
#[must_use]
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut upper = first.to_uppercase();
        let first = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => first,
        };
        std::iter::once(first).chain(chars).collect()
    })
}

/// Builds the password from `words`.
///
/// Steps run in a fixed order: capitalize, join with `separator`, append a
/// digit, append a symbol.
///
/// # Errors
///
/// Propagates any failure of the entropy source.
pub fn decorate<R: EntropySource + ?Sized>(
    words: &[String],
    capitalize: bool,
    append_digit: bool,
    append_symbol: bool,
    separator: &str,
    rng: &mut R,
) -> Result<String> {
    let mut password = if capitalize {
        words
            .iter()
            .map(|w| capitalize_first(w))
            .collect::<Vec<_>>()
            .join(separator)
    } else {
        words.join(separator)
    };

    if append_digit {
        let digit = rng.random_in_range(0, 9)?;
        password.push_str(&digit.to_string());
    }

    if append_symbol {
        let index = rng.random_index(SYMBOLS.len())?;
        let symbol = SYMBOLS.get(index).ok_or_else(|| {
            PassgenError::InvalidRange(format!("symbol index {index} out of range"))
        })?;
        password.push(*symbol);
    }

    Ok(password)
}
