// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The main library crate for passgen-core, orchestrating word selection
//              and password assembly.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Passgen Core Library
//!
//! This library builds XKCD-style passphrases from cryptographically random
//! dictionary words, optionally constrained to an exact total length.
//!
//! The core performs no I/O beyond optional word-list loading: callers pass
//! the word lists and an [`EntropySource`] explicitly, so every function is a
//! pure computation over `(request, catalogs, entropy)`.
//!
//! ```
//! use passgen_core::{GenerationRequest, SecureRandom, WordList, generate_password};
//!
//! let general = WordList::new("general", ["correct", "horse", "battery", "staple"])?;
//! let short = WordList::new("short", ["ox", "go"])?;
//! let request = GenerationRequest::default();
//! let password = generate_password(&request, &general, &short, &mut SecureRandom)?;
//! assert_eq!(password.split('-').count(), 4);
//! # Ok::<(), passgen_core::PassgenError>(())
//! ```

/// Immutable word lists and their loading.
pub mod catalog;
/// Exact-length word combination search.
pub mod composer;
/// Capitalization, joining, and trailing digit or symbol.
pub mod decorator;
/// Error types shared across the crate.
pub mod error;
/// Password assembly from a request.
pub mod generator;
/// Secure and seeded random number sources.
pub mod random;
/// Unconstrained word selection.
pub mod selector;

pub use catalog::{WordList, char_len};
pub use composer::{LengthBounds, compose_for_length};
pub use decorator::{SYMBOLS, decorate};
pub use error::{PassgenError, Result};
pub use generator::{GenerationRequest, generate_password};
pub use random::{EntropySource, SecureRandom, SeededRandom};
pub use selector::select_words;
