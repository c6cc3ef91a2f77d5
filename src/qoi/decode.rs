//! QOI chunk-stream decoder.
//!
//! Stream layout: 14-byte header (`qoif`, width and height as u32 big-endian,
//! channels, colorspace), then chunks, then the 8-byte end marker `00 x7, 01`.

use alloc::vec::Vec;

use enough::Stop;

use super::cache::{PixelCache, Rgba};
use crate::error::QoiError;

pub(crate) const QOI_MAGIC: [u8; 4] = *b"qoif";
pub(crate) const HEADER_SIZE: usize = 14;
pub(crate) const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

const QOI_OP_INDEX: u8 = 0b00_000000;
const QOI_OP_DIFF: u8 = 0b01_000000;
const QOI_OP_LUMA: u8 = 0b10_000000;
const QOI_OP_RGB: u8 = 0b11_111110;
const QOI_OP_RGBA: u8 = 0b11_111111;
const QOI_MASK_2: u8 = 0b11_000000;

/// Longest run a single chunk can encode; bounds pixels per input byte.
const MAX_RUN: usize = 62;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn read_u8(&mut self) -> Result<u8, QoiError> {
        self.next_byte().ok_or(QoiError::UnexpectedEof {
            offset: self.data.len(),
        })
    }

    fn read_u32_be(&mut self) -> Result<u32, QoiError> {
        Ok(u32::from_be_bytes(self.read_fixed_bytes()?))
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], QoiError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or(QoiError::UnexpectedEof {
                offset: self.data.len(),
            })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos += N;
        Ok(buf)
    }
}

// ── Parsed QOI header ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QoiHeader {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub colorspace: u8,
}

impl QoiHeader {
    fn dimension_error(&self) -> QoiError {
        QoiError::InvalidDimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Total pixels to decode. The counter is a `u32`; overflow is an error.
    pub fn pixel_count(&self) -> Result<usize, QoiError> {
        let count = self
            .width
            .checked_mul(self.height)
            .ok_or_else(|| self.dimension_error())?;
        usize::try_from(count).map_err(|_| self.dimension_error())
    }

    /// Size of the RGBA8 output buffer.
    pub fn output_bytes(&self) -> Result<usize, QoiError> {
        self.pixel_count()?
            .checked_mul(4)
            .ok_or_else(|| self.dimension_error())
    }
}

/// Validate magic and dimensions and read the metadata bytes.
///
/// Channels and colorspace are passed through unchecked.
pub(crate) fn parse_header(data: &[u8]) -> Result<QoiHeader, QoiError> {
    let mut cursor = Cursor::new(data);

    let magic: [u8; 4] = cursor.read_fixed_bytes()?;
    if magic != QOI_MAGIC {
        return Err(QoiError::InvalidMagic { found: magic });
    }

    let width = cursor.read_u32_be()?;
    let height = cursor.read_u32_be()?;
    // Sign bit set means a negative dimension as i32.
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(QoiError::InvalidDimensions { width, height });
    }

    let channels = cursor.read_u8()?;
    let colorspace = cursor.read_u8()?;

    let header = QoiHeader {
        width,
        height,
        channels,
        colorspace,
    };
    header.output_bytes()?;
    Ok(header)
}

// ── Decoder state ───────────────────────────────────────────────────

/// Per-call decode state: input cursor, index table, current pixel.
struct QoiDecoderState<'a> {
    cursor: Cursor<'a>,
    cache: PixelCache,
    px: Rgba,
}

impl<'a> QoiDecoderState<'a> {
    /// Positions the cursor on the first chunk. The header must already be validated.
    fn new(data: &'a [u8]) -> Self {
        let mut cache = PixelCache::new();
        cache.store(Rgba::START);
        Self {
            cursor: Cursor::at(data, HEADER_SIZE),
            cache,
            px: Rgba::START,
        }
    }

    /// Decode one chunk, returning the resulting pixel and how many times it repeats.
    ///
    /// The updated pixel is written to the index table before returning, so
    /// the table already holds it when the next tag is read.
    fn next_chunk(&mut self) -> Result<(Rgba, usize), QoiError> {
        let tag = self.cursor.read_u8()?;
        let mut run = 1;

        match tag {
            QOI_OP_RGBA => {
                let [r, g, b, a] = self.cursor.read_fixed_bytes()?;
                self.px = Rgba { r, g, b, a };
            }
            QOI_OP_RGB => {
                let [r, g, b] = self.cursor.read_fixed_bytes()?;
                self.px = Rgba { r, g, b, ..self.px };
            }
            _ => match tag & QOI_MASK_2 {
                QOI_OP_INDEX => {
                    self.px = self.cache.get(tag);
                }
                QOI_OP_DIFF => {
                    // 2-bit deltas, bias 2
                    self.px.r = self.px.r.wrapping_add((tag >> 4) & 0x03).wrapping_sub(2);
                    self.px.g = self.px.g.wrapping_add((tag >> 2) & 0x03).wrapping_sub(2);
                    self.px.b = self.px.b.wrapping_add(tag & 0x03).wrapping_sub(2);
                }
                QOI_OP_LUMA => {
                    let rb = self.cursor.read_u8()?;
                    let vg = (tag & 0x3f).wrapping_sub(32);
                    let vg_8 = vg.wrapping_sub(8);
                    self.px.r = self.px.r.wrapping_add(vg_8.wrapping_add(rb >> 4));
                    self.px.g = self.px.g.wrapping_add(vg);
                    self.px.b = self.px.b.wrapping_add(vg_8.wrapping_add(rb & 0x0f));
                }
                _ => {
                    // QOI_OP_RUN, bias 1
                    run = usize::from(tag & 0x3f) + 1;
                }
            },
        }

        self.cache.store(self.px);
        Ok((self.px, run))
    }

    /// Require `00 00 00 00 00 00 00 01` at the cursor.
    fn check_end_marker(&mut self) -> Result<(), QoiError> {
        for expected in END_MARKER {
            let offset = self.cursor.pos;
            match self.cursor.next_byte() {
                Some(b) if b == expected => {}
                found => return Err(QoiError::InvalidEndMarker { offset, found }),
            }
        }
        Ok(())
    }
}

/// Decode the chunk stream of `data` into RGBA8 bytes and verify the end marker.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &QoiHeader,
    stop: &dyn Stop,
) -> Result<Vec<u8>, QoiError> {
    let pixel_count = header.pixel_count()?;
    let out_bytes = header.output_bytes()?;

    let mut state = QoiDecoderState::new(data);

    // Each input byte yields at most MAX_RUN pixels.
    let reachable = state
        .cursor
        .remaining()
        .saturating_mul(MAX_RUN)
        .saturating_mul(4);
    let mut out = Vec::with_capacity(out_bytes.min(reachable));

    let check_interval = (header.width as usize).max(1).saturating_mul(16);
    let mut next_check = check_interval;
    let mut produced = 0usize;

    while produced < pixel_count {
        if produced >= next_check {
            stop.check()?;
            next_check = produced.saturating_add(check_interval);
        }

        let (px, run) = state.next_chunk()?;
        let remaining = pixel_count - produced;
        if run > remaining {
            return Err(QoiError::RunOverflow {
                offset: state.cursor.pos - 1,
                run,
                remaining,
            });
        }

        let bytes = px.to_bytes();
        for _ in 0..run {
            out.extend_from_slice(&bytes);
        }
        produced += run;
    }

    state.check_end_marker()?;

    if state.cursor.remaining() > 0 {
        log::debug!(
            "qoi: ignoring {} trailing bytes after end marker",
            state.cursor.remaining()
        );
    }

    Ok(out)
}
