use alloc::string::String;
use enough::StopReason;

use crate::pixel::PixelLayout;

/// Errors from QOI decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QoiError {
    #[error("invalid magic: expected 'qoif', got {found:02X?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// `found` is `None` when the input ends inside the end marker.
    #[error("invalid end marker at byte offset {offset}")]
    InvalidEndMarker { offset: usize, found: Option<u8> },

    #[error("run of {run} at byte offset {offset} exceeds the {remaining} pixels left")]
    RunOverflow {
        offset: usize,
        run: usize,
        remaining: usize,
    },

    #[error("unexpected end of input at byte offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: PixelLayout,
        actual: PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for QoiError {
    fn from(r: StopReason) -> Self {
        QoiError::Cancelled(r)
    }
}
