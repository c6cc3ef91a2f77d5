use crate::error::QoiError;

/// Header fields of a QOI stream, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Channel count byte as stored; nominally 3 (RGB) or 4 (RGBA).
    pub channels: u8,
    /// Colorspace byte as stored; nominally 0 (sRGB, linear alpha) or 1 (all linear).
    pub colorspace: u8,
}

impl ImageInfo {
    /// Validate the 14-byte header and return its fields.
    ///
    /// Fails with the same errors the decoder reports for a bad header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, QoiError> {
        crate::qoi::probe_header(data)
    }

    /// Whether the header declares an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Whether the header declares all channels linear.
    pub fn is_linear(&self) -> bool {
        self.colorspace == 1
    }
}
