// File:    error.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The error taxonomy shared by every passphrase generation step.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Every way a passphrase request can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassgenError {
    /// The requested number of words was zero.
    #[error("number of words must be greater than 0")]
    InvalidWordCount,

    /// The requested total length cannot be reached with the given word count.
    #[error(
        "requested length {requested} is out of range for {word_count} words \
         (minimum length is {min}, maximum length is {max})"
    )]
    LengthOutOfRange {
        /// The total length that was asked for.
        requested: usize,
        /// The number of words in the request.
        word_count: usize,
        /// Shortest total length reachable for the request.
        min: usize,
        /// Longest total length reachable for the request.
        max: usize,
    },

    /// The length-constrained search ran out of time.
    #[error("could not find a valid combination of words for length {0}")]
    NoCombinationFound(usize),

    /// The operating system randomness source failed.
    #[error("secure random source failed: {0}")]
    Entropy(String),

    /// A random draw was requested over an empty or inverted range.
    #[error("invalid random range: {0}")]
    InvalidRange(String),

    /// A word list could not be read or contained no words.
    #[error("failed to load word list '{catalog}': {reason}")]
    CatalogLoad {
        /// Name or path of the word list.
        catalog: String,
        /// What went wrong while loading it.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PassgenError>;
