//! # zenqoi
//!
//! Decoder for the QOI ("Quite OK Image") lossless image format.
//!
//! A QOI stream is a 14-byte header, a sequence of chunks (raw RGB/RGBA
//! values, back-references into a 64-entry table of recently seen pixels,
//! small channel deltas, and runs), and an 8-byte end marker. Decoding is a
//! single linear pass over an in-memory buffer into RGBA8 pixels.
//!
//! ## Per-call metadata
//!
//! The header's channel count and colorspace bytes are returned on every
//! [`DecodeOutput`] and [`ImageInfo`]. They are passed through as stored and
//! do not change the output layout, which is always RGBA8.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Streaming or partial decode
//! - Color management (the colorspace byte is reported, never applied)
//!
//! ## Usage
//!
//! ```no_run
//! use zenqoi::{DecodeRequest, ImageInfo, PixelLayout};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your QOI bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} channels={}", info.width, info.height, info.channels);
//!
//! // Decode
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.pixel_count() * 4);
//!
//! // Repack for a BGRA surface
//! let _bgra = decoded.to_layout(PixelLayout::Bgra8);
//! # Ok::<(), zenqoi::QoiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;

mod decode;
mod qoi;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::QoiError;
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelLayout;

/// Decode a complete QOI stream to RGBA8 pixels.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, QoiError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read the header without decoding pixel data.
pub fn probe(data: &[u8]) -> Result<ImageInfo, QoiError> {
    ImageInfo::from_bytes(data)
}
