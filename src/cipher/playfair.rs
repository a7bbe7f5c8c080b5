// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Playfair digraph substitution cipher.
//!
//! A 5×5 key matrix is built from the key (J merged into I), and the text is
//! processed two letters at a time:
//!
//! - same row → each letter moves one column right (left on decrypt)
//! - same column → each letter moves one row down (up on decrypt)
//! - rectangle → each letter takes the other's column, keeping its own row
//!   (self-inverse)
//!
//! Encryption first normalizes the plaintext (uppercase, J→I, non-letters
//! stripped, 'X' filler after doubled letters and a lone trailing letter), so
//! a decrypt round-trip recovers the normalized form, not the original.
//! Decryption performs no preparation and expects digraph-aligned matrix
//! letters.

use crate::cipher::error::CipherError;

/// The 25-letter Playfair alphabet (no J).
const ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Matrix side length.
const SIZE: usize = 5;

/// A 5×5 grid of 25 distinct uppercase letters derived from a key.
///
/// Key letters come first in first-seen order (uppercased, J→I, non-letters
/// ignored), followed by the remaining alphabet letters in order. An empty
/// key is accepted and degenerates to the pure alphabet matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [u8; 25],
}

impl KeyMatrix {
    pub fn new(key: &str) -> Self {
        let mut cells = [0u8; 25];
        let mut count = 0usize;
        let mut seen = [false; 26];

        for ch in key.chars() {
            if !ch.is_ascii_alphabetic() {
                continue;
            }
            let letter = merge_j(ch.to_ascii_uppercase() as u8);
            let slot = (letter - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                cells[count] = letter;
                count += 1;
            }
        }
        for &letter in ALPHABET {
            let slot = (letter - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                cells[count] = letter;
                count += 1;
            }
        }
        debug_assert_eq!(count, 25);

        Self { cells }
    }

    /// Letter at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * SIZE + col] as char
    }

    fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIZE + col]
    }

    /// Row and column of a letter, if present. Letters are unique, so the
    /// lookup is unambiguous; 'J' is never present.
    fn locate(&self, letter: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == letter)
            .map(|i| (i / SIZE, i % SIZE))
    }
}

fn merge_j(letter: u8) -> u8 {
    if letter == b'J' {
        b'I'
    } else {
        letter
    }
}

/// Normalize plaintext into digraphs.
///
/// Uppercases, merges J into I, strips non-letters, then scans left to right:
/// a doubled letter gets an 'X' inserted after the first, and a lone trailing
/// letter is padded with 'X'. The result always has even length.
pub fn prepare_text(text: &str) -> String {
    let letters: Vec<u8> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| merge_j(c.to_ascii_uppercase() as u8))
        .collect();

    let mut prepared = String::with_capacity(letters.len() + 2);
    let mut i = 0;
    while i < letters.len() {
        if i + 1 < letters.len() && letters[i] != letters[i + 1] {
            prepared.push(letters[i] as char);
            prepared.push(letters[i + 1] as char);
            i += 2;
        } else {
            prepared.push(letters[i] as char);
            prepared.push('X');
            i += 1;
        }
    }
    prepared
}

fn encrypt_pair(m: &KeyMatrix, p1: (usize, usize), p2: (usize, usize)) -> (u8, u8) {
    let ((r1, c1), (r2, c2)) = (p1, p2);
    if r1 == r2 {
        (m.at(r1, (c1 + 1) % SIZE), m.at(r2, (c2 + 1) % SIZE))
    } else if c1 == c2 {
        (m.at((r1 + 1) % SIZE, c1), m.at((r2 + 1) % SIZE, c2))
    } else {
        (m.at(r1, c2), m.at(r2, c1))
    }
}

fn decrypt_pair(m: &KeyMatrix, p1: (usize, usize), p2: (usize, usize)) -> (u8, u8) {
    let ((r1, c1), (r2, c2)) = (p1, p2);
    if r1 == r2 {
        // +4 ≡ -1 (mod 5)
        (m.at(r1, (c1 + 4) % SIZE), m.at(r2, (c2 + 4) % SIZE))
    } else if c1 == c2 {
        (m.at((r1 + 4) % SIZE, c1), m.at((r2 + 4) % SIZE, c2))
    } else {
        (m.at(r1, c2), m.at(r2, c1))
    }
}

fn position_of(m: &KeyMatrix, ch: char) -> Result<(usize, usize), CipherError> {
    if ch.is_ascii_uppercase() {
        if let Some(pos) = m.locate(ch as u8) {
            return Ok(pos);
        }
    }
    Err(CipherError::InvalidCiphertext(
        "letter not present in the key matrix",
    ))
}

/// Encrypt plaintext with the given key.
///
/// The plaintext is normalized by [`prepare_text`] first, so every digraph
/// letter is guaranteed to exist in the matrix and encryption cannot fail.
pub fn encrypt(text: &str, key: &str) -> String {
    let matrix = KeyMatrix::new(key);
    let prepared = prepare_text(text);
    let bytes = prepared.as_bytes();

    let mut out = String::with_capacity(bytes.len());
    for pair in bytes.chunks_exact(2) {
        let p1 = matrix
            .locate(pair[0])
            .expect("prepared text letters are always in the matrix");
        let p2 = matrix
            .locate(pair[1])
            .expect("prepared text letters are always in the matrix");
        let (a, b) = encrypt_pair(&matrix, p1, p2);
        out.push(a as char);
        out.push(b as char);
    }
    out
}

/// Decrypt digraph-aligned ciphertext with the given key.
///
/// No preparation is applied: the input must be exactly what [`encrypt`]
/// produces — an even number of uppercase matrix letters.
///
/// # Errors
/// [`CipherError::InvalidCiphertext`] if the length is odd or any character
/// cannot be located in the matrix (non-letters, lowercase, or 'J').
pub fn decrypt(text: &str, key: &str) -> Result<String, CipherError> {
    let matrix = KeyMatrix::new(key);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(CipherError::InvalidCiphertext(
            "Playfair ciphertext length must be even",
        ));
    }

    let mut out = String::with_capacity(chars.len());
    for pair in chars.chunks_exact(2) {
        let p1 = position_of(&matrix, pair[0])?;
        let p2 = position_of(&matrix, pair[1])?;
        let (a, b) = decrypt_pair(&matrix, p1, p2);
        out.push(a as char);
        out.push(b as char);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monarchy_matrix_layout() {
        // M O N A R
        // C H Y B D
        // E F G I K
        // L P Q S T
        // U V W X Z
        let m = KeyMatrix::new("MONARCHY");
        assert_eq!(m.get(0, 0), 'M');
        assert_eq!(m.get(0, 4), 'R');
        assert_eq!(m.get(1, 0), 'C');
        assert_eq!(m.get(2, 3), 'I');
        assert_eq!(m.get(4, 4), 'Z');

        let mut letters: Vec<u8> = m.cells.to_vec();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 25);
        assert!(!letters.contains(&b'J'));
    }

    #[test]
    fn key_duplicates_and_j_are_merged() {
        // "JAZZ" → I A Z, then the remaining alphabet.
        let m = KeyMatrix::new("JAZZ");
        assert_eq!(m.get(0, 0), 'I');
        assert_eq!(m.get(0, 1), 'A');
        assert_eq!(m.get(0, 2), 'Z');
        assert_eq!(m.get(0, 3), 'B');
    }

    #[test]
    fn empty_key_degenerates_to_alphabet() {
        let m = KeyMatrix::new("");
        assert_eq!(m.get(0, 0), 'A');
        assert_eq!(m.get(1, 4), 'K');
        assert_eq!(m.get(4, 4), 'Z');
    }

    #[test]
    fn prepare_inserts_filler() {
        assert_eq!(prepare_text("HELLO"), "HELXLO");
        assert_eq!(prepare_text("BALLOON"), "BALXLOON");
        assert_eq!(prepare_text("HI"), "HI");
        assert_eq!(prepare_text("A"), "AX");
        assert_eq!(prepare_text(""), "");
    }

    #[test]
    fn prepare_normalizes() {
        assert_eq!(prepare_text("jam jar!"), "IAMIAR");
        assert_eq!(prepare_text("a b, c."), "ABCX");
    }

    #[test]
    fn rectangle_rule() {
        // H at (1,1), I at (2,3) in the MONARCHY matrix → swap columns.
        assert_eq!(encrypt("HI", "MONARCHY"), "BF");
        assert_eq!(decrypt("BF", "MONARCHY").unwrap(), "HI");
    }

    #[test]
    fn same_row_rule() {
        // M and O sit in row 0 → shift right; inverse shifts left.
        assert_eq!(encrypt("MO", "MONARCHY"), "ON");
        assert_eq!(decrypt("ON", "MONARCHY").unwrap(), "MO");
    }

    #[test]
    fn same_column_rule() {
        // M (0,0) and C (1,0) share a column → shift down.
        assert_eq!(encrypt("MC", "MONARCHY"), "CE");
        assert_eq!(decrypt("CE", "MONARCHY").unwrap(), "MC");
    }

    #[test]
    fn roundtrip_recovers_prepared_form() {
        for text in ["instruments", "HELLO WORLD", "Jazz jubilee", "x"] {
            let cipher = encrypt(text, "KEYWORD");
            assert_eq!(decrypt(&cipher, "KEYWORD").unwrap(), prepare_text(text));
        }
    }

    #[test]
    fn odd_ciphertext_rejected() {
        assert!(matches!(
            decrypt("ABC", "KEY"),
            Err(CipherError::InvalidCiphertext(_))
        ));
    }

    #[test]
    fn foreign_letters_rejected() {
        // 'J' never appears in the matrix; lowercase and digits never match.
        assert!(decrypt("JA", "KEY").is_err());
        assert!(decrypt("ab", "KEY").is_err());
        assert!(decrypt("1!", "KEY").is_err());
    }
}
