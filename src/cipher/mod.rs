// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Classical pre-ciphers applied to the message before embedding.
//!
//! These are textbook ciphers — Caesar (substitution), Rail Fence
//! (transposition), Playfair (digraph substitution). They provide scrambling,
//! not security. The [`Cipher`] enum is the per-operation configuration the
//! pipeline dispatches on; [`Cipher::None`] is the identity.

pub mod caesar;
pub mod error;
pub mod playfair;
pub mod railfence;

pub use error::CipherError;
pub use playfair::KeyMatrix;

/// Cipher choice plus its parameters. Constructed per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Embed the message as-is.
    None,
    /// Shift substitution. The shift is reduced mod 26; validating the
    /// user-facing 1–25 range is the caller's job.
    Caesar { shift: i32 },
    /// Zig-zag transposition over `rails` tracks (at least 2).
    RailFence { rails: usize },
    /// 5×5 digraph substitution keyed by `key`. An empty key degenerates to
    /// the pure alphabet matrix.
    Playfair { key: String },
}

impl Cipher {
    /// Apply the forward transform (encrypt) to `text`.
    ///
    /// # Errors
    /// [`CipherError::InvalidKey`] if the cipher's key fails its structural
    /// precondition (Rail Fence with fewer than 2 rails).
    pub fn apply(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::None => Ok(text.to_owned()),
            Self::Caesar { shift } => Ok(caesar::encrypt(text, *shift)),
            Self::RailFence { rails } => railfence::encrypt(text, *rails),
            Self::Playfair { key } => Ok(playfair::encrypt(text, key)),
        }
    }

    /// Apply the inverse transform (decrypt) to `text`.
    ///
    /// For Playfair the result is the prepared (normalized, X-padded) form of
    /// the original message, not the original itself.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKey`] for a structurally invalid key.
    /// - [`CipherError::InvalidCiphertext`] if `text` cannot have been
    ///   produced by this cipher (Playfair only).
    pub fn invert(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::None => Ok(text.to_owned()),
            Self::Caesar { shift } => Ok(caesar::decrypt(text, *shift)),
            Self::RailFence { rails } => railfence::decrypt(text, *rails),
            Self::Playfair { key } => playfair::decrypt(text, key),
        }
    }
}
