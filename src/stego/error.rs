// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from PNG decoding through cipher
//! inversion. Image and cipher errors flow in via `From`.

use std::fmt;

use crate::cipher::CipherError;
use crate::image::ImageError;

/// Errors that can occur during concealing or revealing a message.
#[derive(Debug)]
pub enum StegoError {
    /// The message contains a character outside the nonzero 7-bit range.
    UnrepresentableChar(char),
    /// The message's bit stream is longer than the image's sample count.
    CapacityExceeded { required: usize, available: usize },
    /// The bit source ran out before a 7-bit all-zero terminator was found.
    MissingTerminator,
    /// The cover or stego image could not be decoded or encoded.
    InvalidImage(ImageError),
    /// The cipher layer rejected its key or input.
    Cipher(CipherError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrepresentableChar(c) => {
                write!(f, "character {c:?} cannot be encoded in 7 bits")
            }
            Self::CapacityExceeded { required, available } => write!(
                f,
                "message needs {required} bits but the image has only {available} samples"
            ),
            Self::MissingTerminator => {
                write!(f, "bit stream ended before the 7-bit terminator")
            }
            Self::InvalidImage(e) => write!(f, "invalid image: {e}"),
            Self::Cipher(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            Self::Cipher(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ImageError> for StegoError {
    fn from(e: ImageError) -> Self {
        Self::InvalidImage(e)
    }
}

impl From<CipherError> for StegoError {
    fn from(e: CipherError) -> Self {
        Self::Cipher(e)
    }
}
