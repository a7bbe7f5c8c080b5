// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Message ↔ bit-stream codec.
//!
//! Each character becomes its 7-bit code, most significant bit first, and the
//! stream ends with a 7-bit all-zero terminator. Code 0 is reserved for the
//! terminator and code 128 and above does not fit, so both are rejected at
//! encode time. The stream for a message of `n` characters is exactly
//! `7 * (n + 1)` bits long.

use crate::stego::error::StegoError;

/// Bits per encoded character.
pub const CHAR_BITS: usize = 7;

/// Encode a message as a bit stream (values 0/1), terminator included.
///
/// # Errors
/// [`StegoError::UnrepresentableChar`] if any character's code is 0 or
/// does not fit in 7 bits.
pub fn message_to_bits(message: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(CHAR_BITS * (message.len() + 1));
    for ch in message.chars() {
        let code = ch as u32;
        if code == 0 || code >= 1 << CHAR_BITS {
            return Err(StegoError::UnrepresentableChar(ch));
        }
        for shift in (0..CHAR_BITS).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }
    bits.extend(std::iter::repeat(0).take(CHAR_BITS));
    Ok(bits)
}

/// Decode a message from a bit source, reading 7 bits at a time until an
/// all-zero group.
///
/// The source only needs its low bit to be meaningful; anything above bit 0
/// is masked off. Group bits are weighted big-endian (64 down to 1).
///
/// # Errors
/// [`StegoError::MissingTerminator`] if the source is exhausted (including a
/// partial final group) before a terminator group appears. A buffer written
/// by [`embed`](crate::stego::embed::embed) always terminates, because every
/// sample past the stream has its low bit cleared.
pub fn bits_to_message(bits: impl IntoIterator<Item = u8>) -> Result<String, StegoError> {
    let mut bits = bits.into_iter();
    let mut message = String::new();
    loop {
        let mut code: u32 = 0;
        let mut read = 0;
        for _ in 0..CHAR_BITS {
            match bits.next() {
                Some(bit) => {
                    code = (code << 1) | u32::from(bit & 1);
                    read += 1;
                }
                None => break,
            }
        }
        if read < CHAR_BITS {
            return Err(StegoError::MissingTerminator);
        }
        if code == 0 {
            return Ok(message);
        }
        // code < 128, always a valid ASCII char
        message.push(code as u8 as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hi_bit_pattern() {
        // 'H' = 72 = 1001000, 'I' = 73 = 1001001, then the terminator.
        let bits = message_to_bits("HI").unwrap();
        assert_eq!(
            bits,
            vec![
                1, 0, 0, 1, 0, 0, 0, // H
                1, 0, 0, 1, 0, 0, 1, // I
                0, 0, 0, 0, 0, 0, 0, // terminator
            ]
        );
    }

    #[test]
    fn stream_length() {
        assert_eq!(message_to_bits("").unwrap().len(), 7);
        assert_eq!(message_to_bits("abcde").unwrap().len(), 42);
    }

    #[test]
    fn roundtrip() {
        for msg in ["", "H", "Hello, World!", "mixed CASE & punct. 123"] {
            let bits = message_to_bits(msg).unwrap();
            assert_eq!(bits_to_message(bits).unwrap(), msg);
        }
    }

    #[test]
    fn rejects_nul_and_wide_chars() {
        assert!(matches!(
            message_to_bits("a\0b"),
            Err(StegoError::UnrepresentableChar('\0'))
        ));
        assert!(matches!(
            message_to_bits("café"),
            Err(StegoError::UnrepresentableChar('é'))
        ));
    }

    #[test]
    fn missing_terminator_is_an_error() {
        // 'H' with no terminator group.
        let bits = vec![1, 0, 0, 1, 0, 0, 0];
        assert!(matches!(
            bits_to_message(bits),
            Err(StegoError::MissingTerminator)
        ));
        // Partial final group.
        let bits = vec![1, 0, 0, 1, 0, 0, 0, 1, 1];
        assert!(matches!(
            bits_to_message(bits),
            Err(StegoError::MissingTerminator)
        ));
        // Empty source.
        assert!(matches!(
            bits_to_message(Vec::new()),
            Err(StegoError::MissingTerminator)
        ));
    }

    #[test]
    fn high_bits_in_source_are_masked() {
        // Samples rather than pure bits: only the low bit should count.
        let stream = message_to_bits("Ok").unwrap();
        let samples: Vec<u8> = stream.iter().map(|&b| 0b1010_0000 | b).collect();
        assert_eq!(bits_to_message(samples).unwrap(), "Ok");
    }
}
