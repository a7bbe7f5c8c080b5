// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Caesar shift cipher.
//!
//! Rotates ASCII letters within their own case; every other character passes
//! through unchanged. The rotation uses the euclidean remainder, so any `i32`
//! shift (negative included) behaves as shift mod 26. Range validation of the
//! user-supplied shift (1–25) belongs to the caller, not this module.

/// Encrypt by rotating each letter `shift` positions forward.
pub fn encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Decrypt by rotating each letter `shift` positions backward.
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, -shift)
}

fn rotate(c: char, shift: i32) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let offset = (c as u8 - base) as i32;
    (base + (offset + shift).rem_euclid(26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_three() {
        assert_eq!(encrypt("Attack At Dawn", 3), "Dwwdfn Dw Gdzq");
    }

    #[test]
    fn wraps_around_the_alphabet() {
        assert_eq!(encrypt("xyz XYZ", 3), "abc ABC");
        assert_eq!(decrypt("abc ABC", 3), "xyz XYZ");
    }

    #[test]
    fn non_letters_are_fixed_points() {
        let text = "1234 .,;! \t_";
        assert_eq!(encrypt(text, 17), text);
    }

    #[test]
    fn roundtrip_all_shifts() {
        let text = "The quick brown fox, 1969!";
        for shift in 1..=25 {
            assert_eq!(decrypt(&encrypt(text, shift), shift), text);
        }
    }

    #[test]
    fn shift_is_taken_mod_26() {
        assert_eq!(encrypt("abc", 26), "abc");
        assert_eq!(encrypt("abc", 29), encrypt("abc", 3));
        assert_eq!(encrypt("abc", -1), "zab");
    }
}
