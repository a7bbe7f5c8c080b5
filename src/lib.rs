// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! # veil-core
//!
//! LSB steganography engine for hiding short text messages in the
//! least-significant bits of RGB pixel samples, with optional classical
//! pre-ciphers (Caesar, Rail Fence, Playfair) applied before embedding.
//!
//! The ciphers are classical and breakable — they scramble, they do not
//! protect. The embedding channel is fragile: any lossy recompression of the
//! stego image between conceal and reveal destroys the hidden bits, so the
//! image must travel losslessly (PNG).
//!
//! The `image` module decodes and encodes PNG covers (`png` crate). The
//! `stego` module converts a message to a null-terminated 7-bit stream and
//! writes it into the low bit of the flattened sample buffer. The `cipher`
//! module holds the three classical ciphers behind the [`Cipher`] config enum.
//!
//! # Quick start
//!
//! ```rust
//! use veil_core::{conceal, reveal, Cipher, PixelBuffer};
//!
//! let cover = PixelBuffer::new(4, 4, vec![128; 48]).unwrap();
//! let cipher = Cipher::Caesar { shift: 3 };
//! let stego = conceal(&cover, "HI", &cipher).unwrap();
//! assert_eq!(reveal(&stego, &cipher).unwrap(), "HI");
//! ```

pub mod cipher;
pub mod image;
pub mod stego;

pub use cipher::{Cipher, CipherError, KeyMatrix};
pub use image::{ImageError, PixelBuffer};
pub use stego::{conceal, conceal_png, reveal, reveal_png, StegoError};
pub use stego::{bits_required, capacity_bits, max_message_len, CHAR_BITS};
