// File:    random.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Uniform random integers drawn from the operating system's secure randomness source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Random number sources used for every word, digit and symbol choice.

use crate::error::{PassgenError, Result};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// A provider of uniformly distributed integers.
///
/// All generation code is written against this trait so that tests can inject
/// deterministic sources. Production callers use [`SecureRandom`].
pub trait EntropySource {
    /// Returns an integer in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidRange`] if `bound` is zero and
    /// [`PassgenError::Entropy`] if the underlying source fails.
    fn random_index(&mut self, bound: usize) -> Result<usize>;

    /// Returns an integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidRange`] if `min > max` or the span does
    /// not fit in a `usize`, and propagates failures of [`Self::random_index`].
    fn random_in_range(&mut self, min: usize, max: usize) -> Result<usize> {
        if min > max {
            return Err(PassgenError::InvalidRange(format!(
                "min ({min}) must be less than or equal to max ({max})"
            )));
        }
        let span = (max - min).checked_add(1).ok_or_else(|| {
            PassgenError::InvalidRange(format!("range {min}..={max} is too wide"))
        })?;
        Ok(min + self.random_index(span)?)
    }
}

/// Cryptographically secure source backed by [`OsRng`].
///
/// Each draw seeds a fresh [`StdRng`] from the operating system, so every index
/// comes from OS entropy and a failing source surfaces as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl EntropySource for SecureRandom {
    fn random_index(&mut self, bound: usize) -> Result<usize> {
        check_bound(bound)?;
        // Use the failable `try_from_rng` and map the error instead of panicking.
        let mut rng = StdRng::try_from_rng(&mut OsRng)
            .map_err(|e| PassgenError::Entropy(e.to_string()))?;
        Ok(rng.random_range(0..bound))
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Not suitable for real passwords; it exists so that callers can reproduce a
/// generation run exactly, for example in tests or simulations.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source that always yields the same sequence for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl EntropySource for SeededRandom {
    fn random_index(&mut self, bound: usize) -> Result<usize> {
        check_bound(bound)?;
        Ok(self.0.random_range(0..bound))
    }
}

fn check_bound(bound: usize) -> Result<()> {
    if bound == 0 {
        return Err(PassgenError::InvalidRange(
            "bound must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
