// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Conceal/reveal pipeline.
//!
//! Conceal: message → cipher transform → 7-bit stream → LSB embed into a copy
//! of the cover. Reveal: LSB bit source → 7-bit decode → cipher inverse.
//! The `*_png` variants wrap the same steps with PNG decode/encode.

use crate::cipher::Cipher;
use crate::image::PixelBuffer;
use crate::stego::bits;
use crate::stego::embed;
use crate::stego::error::StegoError;

/// Hide `message` in a copy of `cover` after applying `cipher`.
///
/// # Errors
/// - [`StegoError::Cipher`] if the cipher rejects its key.
/// - [`StegoError::UnrepresentableChar`] if the (ciphered) message contains
///   a character outside the nonzero 7-bit range.
/// - [`StegoError::CapacityExceeded`] if the stream does not fit.
pub fn conceal(
    cover: &PixelBuffer,
    message: &str,
    cipher: &Cipher,
) -> Result<PixelBuffer, StegoError> {
    let text = cipher.apply(message)?;
    let stream = bits::message_to_bits(&text)?;
    embed::embed(cover, &stream)
}

/// Recover the message hidden in `stego`, undoing `cipher`.
///
/// With a Playfair cipher the result is the prepared (normalized, X-padded)
/// form of the original message.
///
/// # Errors
/// - [`StegoError::MissingTerminator`] if the buffer holds no terminated
///   stream (wrong or unmodified image).
/// - [`StegoError::Cipher`] if the extracted text cannot be deciphered.
pub fn reveal(stego: &PixelBuffer, cipher: &Cipher) -> Result<String, StegoError> {
    let text = bits::bits_to_message(embed::lsb_bits(stego))?;
    Ok(cipher.invert(&text)?)
}

/// Decode a cover PNG, conceal `message`, and re-encode as PNG.
///
/// The output must travel losslessly: any lossy recompression between conceal
/// and reveal destroys the low-bit payload.
///
/// # Errors
/// [`StegoError::InvalidImage`] for undecodable or non-RGB/RGBA input, plus
/// everything [`conceal`] reports.
pub fn conceal_png(
    png_bytes: &[u8],
    message: &str,
    cipher: &Cipher,
) -> Result<Vec<u8>, StegoError> {
    let cover = PixelBuffer::from_png(png_bytes)?;
    let stego = conceal(&cover, message, cipher)?;
    Ok(stego.to_png()?)
}

/// Decode a stego PNG and reveal the hidden message.
///
/// # Errors
/// [`StegoError::InvalidImage`] for undecodable input, plus everything
/// [`reveal`] reports.
pub fn reveal_png(png_bytes: &[u8], cipher: &Cipher) -> Result<String, StegoError> {
    let stego = PixelBuffer::from_png(png_bytes)?;
    reveal(&stego, cipher)
}
