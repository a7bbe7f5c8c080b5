// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! PNG pixel codec.
//!
//! Decodes a cover PNG into a [`PixelBuffer`] (height × width × 3, 8-bit
//! samples, row-major, channel-minor) and encodes a stego buffer back to an
//! 8-bit RGB PNG. PNG is lossless, which the embedding depends on: the hidden
//! payload lives in the low bit of every sample and does not survive lossy
//! recompression.
//!
//! Supports:
//! - 8-bit RGB — used as-is
//! - 8-bit RGBA — alpha stripped on decode
//!
//! Does NOT support:
//! - Grayscale, palette, 16-bit — rejected at decode time

pub mod error;

pub use error::ImageError;

use error::Result;

/// Samples per pixel. The embedding model is fixed to 8-bit RGB.
pub const CHANNELS: usize = 3;

/// An owned RGB sample buffer in row-major, channel-minor order.
///
/// `samples[(y * width + x) * 3 + c]` is channel `c` of pixel `(x, y)`.
/// Embedding never mutates a buffer in place — it returns a new one of the
/// same shape — so a caller can keep the cover and the stego side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw samples.
    ///
    /// # Errors
    /// [`ImageError::DimensionMismatch`] if `samples.len() != width * height * 3`.
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if samples.len() != expected {
            return Err(ImageError::DimensionMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { width, height, samples })
    }

    /// Decode a PNG byte stream into an RGB buffer.
    ///
    /// 8-bit RGB data is taken as-is; 8-bit RGBA has its alpha channel
    /// stripped. Everything else is rejected — the LSB model assumes exactly
    /// three 8-bit samples per pixel.
    ///
    /// # Errors
    /// - [`ImageError::Decode`] if the bytes are not a valid PNG.
    /// - [`ImageError::UnsupportedBitDepth`] for non-8-bit images.
    /// - [`ImageError::UnsupportedColorType`] for grayscale/palette images.
    pub fn from_png(bytes: &[u8]) -> Result<Self> {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(ImageError::UnsupportedBitDepth(info.bit_depth));
        }

        let width = info.width as usize;
        let height = info.height as usize;
        let samples = match info.color_type {
            png::ColorType::Rgb => buf,
            png::ColorType::Rgba => {
                let mut rgb = Vec::with_capacity(width * height * CHANNELS);
                for px in buf.chunks_exact(4) {
                    rgb.extend_from_slice(&px[..3]);
                }
                rgb
            }
            other => return Err(ImageError::UnsupportedColorType(other)),
        };

        Self::new(width, height, samples)
    }

    /// Encode the buffer as an 8-bit RGB PNG.
    ///
    /// # Errors
    /// [`ImageError::Encode`] if the PNG writer fails.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(&mut out, self.width as u32, self.height as u32);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.samples)?;
        }
        Ok(out)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flattened samples in row-major, channel-minor order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Total number of 8-bit samples (`width * height * 3`).
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Build a buffer of the same shape from replacement samples.
    /// Callers must pass a vector of identical length.
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            width: self.width,
            height: self.height,
            samples,
        }
    }
}
