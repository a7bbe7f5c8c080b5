// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for PNG decoding and encoding.

use std::fmt;

/// Errors that can occur while decoding a cover PNG or encoding a stego PNG.
#[derive(Debug)]
pub enum ImageError {
    /// The input bytes are not a decodable PNG.
    Decode(png::DecodingError),
    /// The stego image could not be written as PNG.
    Encode(png::EncodingError),
    /// The PNG uses a color type other than 8-bit RGB or RGBA.
    UnsupportedColorType(png::ColorType),
    /// The PNG uses a bit depth other than 8 bits per sample.
    UnsupportedBitDepth(png::BitDepth),
    /// The sample vector does not match `width * height * 3`.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "PNG decode failed: {e}"),
            Self::Encode(e) => write!(f, "PNG encode failed: {e}"),
            Self::UnsupportedColorType(ct) => {
                write!(f, "unsupported PNG color type: {ct:?} (need RGB or RGBA)")
            }
            Self::UnsupportedBitDepth(bd) => {
                write!(f, "unsupported PNG bit depth: {bd:?} (need 8-bit samples)")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "sample buffer has {actual} bytes, dimensions require {expected}")
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<png::DecodingError> for ImageError {
    fn from(e: png::DecodingError) -> Self {
        Self::Decode(e)
    }
}

impl From<png::EncodingError> for ImageError {
    fn from(e: png::EncodingError) -> Self {
        Self::Encode(e)
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
