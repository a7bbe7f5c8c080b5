// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Rail Fence transposition cipher.
//!
//! Characters are distributed onto `rails` horizontal tracks in a zig-zag:
//! start on rail 0 moving down, and flip direction whenever the step after
//! placing a character lands on the top or bottom rail. Encryption reads the
//! rails top-to-bottom; decryption replays the same bounce sequence twice,
//! once to learn how many characters each rail holds and once to pull them
//! back into position order.

use crate::cipher::error::CipherError;

/// Minimum number of rails for the zig-zag to exist.
pub const MIN_RAILS: usize = 2;

fn validate(rails: usize) -> Result<(), CipherError> {
    if rails < MIN_RAILS {
        return Err(CipherError::InvalidKey("rail fence needs at least 2 rails"));
    }
    Ok(())
}

/// The rail index visited at each of `len` positions.
///
/// Matches the bounce state machine exactly: place, step, then flip direction
/// when the new rail is 0 or `rails - 1`. A rail count larger than `len`
/// simply never reaches the bottom rail.
fn bounce_sequence(len: usize, rails: usize) -> Vec<usize> {
    let mut seq = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..len {
        seq.push(rail);
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == 0 || rail == rails - 1 {
            down = !down;
        }
    }
    seq
}

/// Encrypt by distributing characters onto the rails and concatenating the
/// rails top-to-bottom.
///
/// # Errors
/// [`CipherError::InvalidKey`] if `rails < 2`.
pub fn encrypt(text: &str, rails: usize) -> Result<String, CipherError> {
    validate(rails)?;
    let chars: Vec<char> = text.chars().collect();
    let seq = bounce_sequence(chars.len(), rails);
    let mut fence = vec![String::new(); rails];
    for (&ch, &rail) in chars.iter().zip(&seq) {
        fence[rail].push(ch);
    }
    Ok(fence.concat())
}

/// Decrypt by replaying the bounce sequence.
///
/// The first replay yields per-rail character counts, which slice the
/// ciphertext into one contiguous run per rail; the second replay consumes
/// each rail's run in order to rebuild the original position order.
///
/// # Errors
/// [`CipherError::InvalidKey`] if `rails < 2`.
pub fn decrypt(cipher: &str, rails: usize) -> Result<String, CipherError> {
    validate(rails)?;
    let chars: Vec<char> = cipher.chars().collect();
    let seq = bounce_sequence(chars.len(), rails);

    let mut counts = vec![0usize; rails];
    for &rail in &seq {
        counts[rail] += 1;
    }

    // Start offset of each rail's run within the ciphertext.
    let mut offsets = vec![0usize; rails];
    let mut acc = 0usize;
    for (offset, &count) in offsets.iter_mut().zip(&counts) {
        *offset = acc;
        acc += count;
    }

    let mut taken = vec![0usize; rails];
    let mut plain = String::with_capacity(chars.len());
    for &rail in &seq {
        plain.push(chars[offsets[rail] + taken[rail]]);
        taken[rail] += 1;
    }
    Ok(plain)
}
