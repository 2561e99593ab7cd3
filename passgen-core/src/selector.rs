// File:    selector.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Picks passphrase words with no length constraint.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::catalog::WordList;
use crate::error::Result;
use crate::random::EntropySource;

/// Draws `count` words independently (with replacement) from `catalog`.
///
/// # Errors
///
/// Propagates any failure of the entropy source unchanged.
pub fn select_words<R: EntropySource + ?Sized>(
    catalog: &WordList,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..count)
        .map(|_| catalog.choose(&mut *rng).map(str::to_string))
        .collect()
}
