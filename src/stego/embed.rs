// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! LSB embedding and extraction.
//!
//! The bit stream is written into the low bit of the flattened sample buffer,
//! first bit into the first sample. Every sample *beyond* the stream gets its
//! low bit cleared to 0 as well — that trailing run of zeros is what
//! guarantees the decoder finds a terminator group, even in a cover whose
//! tail held odd values.

use crate::image::PixelBuffer;
use crate::stego::error::StegoError;

/// Write `bits` (values 0/1) into the low bits of a copy of `cover`.
///
/// The cover is not mutated; a new buffer of identical shape is returned.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if the stream is longer than the
/// buffer's sample count.
pub fn embed(cover: &PixelBuffer, bits: &[u8]) -> Result<PixelBuffer, StegoError> {
    let available = cover.sample_count();
    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    // Clear every low bit, then add the stream onto the prefix.
    let mut samples: Vec<u8> = cover.samples().iter().map(|&s| s & !1).collect();
    for (slot, &bit) in samples.iter_mut().zip(bits) {
        *slot |= bit & 1;
    }
    Ok(cover.with_samples(samples))
}

/// Bounded bit source over the low bit of every sample, in flattened
/// row-major, channel-minor order.
///
/// The source ends at the buffer's last sample, so a decoder that runs off
/// the end sees exhaustion (a typed [`MissingTerminator`] failure upstream)
/// rather than an out-of-range read.
///
/// [`MissingTerminator`]: crate::stego::error::StegoError::MissingTerminator
pub fn lsb_bits(pixels: &PixelBuffer) -> impl Iterator<Item = u8> + '_ {
    pixels.samples().iter().map(|&s| s & 1)
}
