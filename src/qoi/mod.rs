//! QOI (Quite OK Image) format decoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::probe`] or [`crate::DecodeRequest`].

mod cache;
pub(crate) mod decode;

use crate::decode::DecodeOutput;
use crate::error::QoiError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use enough::Stop;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, QoiError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        channels: header.channels,
        colorspace: header.colorspace,
    })
}

/// Decode QOI data to RGBA8 pixels (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, QoiError> {
    if let Some(limits) = limits {
        limits.check_input(data.len())?;
    }
    let header = decode::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    let out_bytes = header.output_bytes()?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }
    stop.check()?;

    log::debug!(
        "qoi: decoding {}x{} channels={} colorspace={} from {} bytes",
        header.width,
        header.height,
        header.channels,
        header.colorspace,
        data.len()
    );

    let pixels = decode::decode_pixels(data, &header, stop)?;
    Ok(DecodeOutput::new(
        pixels,
        header.width,
        header.height,
        header.channels,
        header.colorspace,
    ))
}
