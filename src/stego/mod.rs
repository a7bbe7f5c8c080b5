// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Steganographic encoding and decoding.
//!
//! The embedding is plain LSB: one payload bit per 8-bit sample, written into
//! a copy of the cover buffer. The payload is the message's 7-bit stream
//! terminated by a 7-bit zero group ([`bits`]); an optional classical cipher
//! ([`crate::cipher`]) scrambles the message before encoding.
//!
//! Layers, leaf-first:
//! - [`bits`] — message ↔ bit stream codec
//! - [`embed`] — low-bit write / bounded low-bit source
//! - [`capacity`] — how much fits
//! - pipeline — [`conceal`] / [`reveal`] and the PNG-level variants

pub mod bits;
pub mod capacity;
pub mod embed;
pub mod error;
mod pipeline;

pub use bits::CHAR_BITS;
pub use capacity::{bits_required, capacity_bits, max_message_len};
pub use error::StegoError;
pub use pipeline::{conceal, conceal_png, reveal, reveal_png};
