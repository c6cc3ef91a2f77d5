use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::error::QoiError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decode request builder.
///
/// ```no_run
/// use zenqoi::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your QOI bytes
/// let limits = Limits {
///     max_pixels: Some(16_000_000),
///     ..Default::default()
/// };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenqoi::QoiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject inputs whose length, dimensions or output size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole stream.
    ///
    /// `stop` is checked once after the header and then every 16 rows of output.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, QoiError> {
        crate::qoi::decode(self.data, self.limits, &stop)
    }
}

/// Decoded image: RGBA8 pixels plus the header metadata of this call.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channel count byte from the header. Pixels are RGBA8 regardless.
    pub channels: u8,
    /// Colorspace byte from the header. No conversion is applied.
    pub colorspace: u8,
    pub layout: PixelLayout,
}

impl DecodeOutput {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
        colorspace: u8,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            channels,
            colorspace,
            layout: PixelLayout::Rgba8,
        }
    }

    /// Access the pixel data, 4 bytes per pixel, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / self.layout.bytes_per_pixel()
    }

    /// Whether the header declares an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Whether the header declares all channels linear.
    pub fn is_linear(&self) -> bool {
        self.colorspace == 1
    }

    /// Repack the pixels into another byte layout. Dropping to 3 channels discards alpha.
    pub fn to_layout(&self, layout: PixelLayout) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixel_count() * layout.bytes_per_pixel());
        let px = self.pixels.chunks_exact(4);
        match layout {
            PixelLayout::Rgba8 => out.extend_from_slice(&self.pixels),
            PixelLayout::Rgb8 => px.for_each(|p| out.extend_from_slice(&p[..3])),
            PixelLayout::Bgr8 => px.for_each(|p| out.extend_from_slice(&[p[2], p[1], p[0]])),
            PixelLayout::Bgra8 => {
                px.for_each(|p| out.extend_from_slice(&[p[2], p[1], p[0], p[3]]))
            }
        }
        out
    }

    /// One `u32` per pixel packed as `0xAARRGGBB`, the layout of integer ARGB image types.
    pub fn to_argb32(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(4)
            .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
            .collect()
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`QoiError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(QoiError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`QoiError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`QoiError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}
