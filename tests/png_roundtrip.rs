// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! End-to-end tests through the PNG codec, fully in memory.

use veil_core::{conceal_png, reveal_png, Cipher, PixelBuffer, StegoError};

/// An in-memory RGB PNG cover with a deterministic gradient.
fn cover_png(width: usize, height: usize) -> Vec<u8> {
    let samples: Vec<u8> = (0..width * height * 3)
        .map(|i| (i.wrapping_mul(31) % 256) as u8)
        .collect();
    PixelBuffer::new(width, height, samples)
        .unwrap()
        .to_png()
        .unwrap()
}

#[test]
fn png_roundtrip_plain() {
    let cover = cover_png(16, 16);
    let stego = conceal_png(&cover, "buried in a PNG", &Cipher::None).unwrap();
    assert_eq!(
        reveal_png(&stego, &Cipher::None).unwrap(),
        "buried in a PNG"
    );
}

#[test]
fn png_roundtrip_with_each_cipher() {
    let cover = cover_png(16, 16);
    let cases: [(Cipher, &str, &str); 3] = [
        (Cipher::Caesar { shift: 3 }, "Carthage", "Carthage"),
        (Cipher::RailFence { rails: 4 }, "zigzag message", "zigzag message"),
        // Playfair reveals the prepared form.
        (Cipher::Playfair { key: "SECRET".into() }, "jump for joy", "IUMPFORIOY"),
    ];
    for (cipher, message, expected) in cases {
        let stego = conceal_png(&cover, message, &cipher).unwrap();
        assert_eq!(reveal_png(&stego, &cipher).unwrap(), expected);
    }
}

#[test]
fn stego_png_differs_only_in_low_bits() {
    let cover = cover_png(8, 8);
    let stego = conceal_png(&cover, "subtle", &Cipher::None).unwrap();
    let before = PixelBuffer::from_png(&cover).unwrap();
    let after = PixelBuffer::from_png(&stego).unwrap();
    for (a, b) in before.samples().iter().zip(after.samples()) {
        assert_eq!(a & !1, b & !1);
    }
}

#[test]
fn oversized_message_rejected() {
    // 2×2 RGB → 12 samples; even one character needs 14 bits.
    let cover = cover_png(2, 2);
    let result = conceal_png(&cover, "x", &Cipher::None);
    assert!(matches!(result, Err(StegoError::CapacityExceeded { .. })));
}

#[test]
fn garbage_bytes_rejected() {
    let result = reveal_png(b"not a png at all", &Cipher::None);
    assert!(matches!(result, Err(StegoError::InvalidImage(_))));
}

#[test]
fn rgba_cover_is_accepted() {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 8, 8);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let data: Vec<u8> = (0..8 * 8 * 4).map(|i| (i % 256) as u8).collect();
        writer.write_image_data(&data).unwrap();
    }
    let stego = conceal_png(&bytes, "alpha", &Cipher::None).unwrap();
    assert_eq!(reveal_png(&stego, &Cipher::None).unwrap(), "alpha");
}
