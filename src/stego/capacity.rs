// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Capacity arithmetic.
//!
//! One bit per 8-bit sample, so an RGB image holds `width * height * 3` bits.
//! A message of `n` characters needs `7 * (n + 1)` bits (terminator included).

use crate::image::PixelBuffer;
use crate::stego::bits::CHAR_BITS;

/// Total number of embeddable bits (= sample count).
pub fn capacity_bits(pixels: &PixelBuffer) -> usize {
    pixels.sample_count()
}

/// Bits required to embed a message of `message_len` characters.
pub fn bits_required(message_len: usize) -> usize {
    CHAR_BITS * (message_len + 1)
}

/// Longest message (in characters) the buffer can hold.
pub fn max_message_len(pixels: &PixelBuffer) -> usize {
    (pixels.sample_count() / CHAR_BITS).saturating_sub(1)
}
