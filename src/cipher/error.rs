// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the classical cipher layer.

use std::fmt;

/// Errors that can occur while applying or inverting a classical cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The cipher key fails a structural precondition (e.g. fewer than two
    /// rails for Rail Fence).
    InvalidKey(&'static str),
    /// The ciphertext cannot have been produced by this cipher (e.g.
    /// odd-length Playfair input, or a letter missing from the key matrix).
    InvalidCiphertext(&'static str),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(msg) => write!(f, "invalid cipher key: {msg}"),
            Self::InvalidCiphertext(msg) => write!(f, "invalid ciphertext: {msg}"),
        }
    }
}

impl std::error::Error for CipherError {}
