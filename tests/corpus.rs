//! Test corpus: streams produced by a reference-style encoder across patterns and sizes.

mod common;

use common::{checkerboard, encode, gradient, noise_pattern};
use enough::Unstoppable;
use zenqoi::*;

fn assert_decodes_to(pixels: &[u8], w: u32, h: u32) {
    let encoded = encode(pixels, w, h, 4, 0);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, w);
    assert_eq!(decoded.height, h);
    assert_eq!(decoded.pixel_count(), (w * h) as usize);
    assert_eq!(decoded.pixels(), pixels);
}

#[test]
fn gradient_uses_diff_and_luma() {
    let pixels = gradient(37, 23);
    assert_decodes_to(&pixels, 37, 23);
}

#[test]
fn checkerboard_uses_index() {
    let pixels = checkerboard(16, 9);
    assert_decodes_to(&pixels, 16, 9);
}

#[test]
fn noise_uses_rgba() {
    let pixels = noise_pattern(31, 17);
    assert_decodes_to(&pixels, 31, 17);
}

#[test]
fn flat_image_spans_many_runs() {
    let mut pixels = Vec::new();
    for _ in 0..(200 * 3) {
        pixels.extend_from_slice(&[12, 34, 56, 78]);
    }
    assert_decodes_to(&pixels, 200, 3);
}

#[test]
fn start_pixel_image_is_all_runs() {
    let mut pixels = Vec::new();
    for _ in 0..130 {
        pixels.extend_from_slice(&[0, 0, 0, 255]);
    }
    let encoded = encode(&pixels, 130, 1, 4, 0);
    // header + three runs (62, 62, 6) + marker
    assert_eq!(encoded.len(), 14 + 3 + 8);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn single_row_and_single_column() {
    let pixels = noise_pattern(64, 1);
    assert_decodes_to(&pixels, 64, 1);
    let pixels = gradient(1, 64);
    assert_decodes_to(&pixels, 1, 64);
}

#[test]
fn rgb_header_still_yields_rgba() {
    let pixels = gradient(8, 8);
    let encoded = encode(&pixels, 8, 8, 3, 1);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.channels, 3);
    assert_eq!(decoded.colorspace, 1);
    assert_eq!(decoded.layout, PixelLayout::Rgba8);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert_eq!(
        decoded.to_layout(PixelLayout::Rgb8).len(),
        8 * 8 * PixelLayout::Rgb8.bytes_per_pixel()
    );
}

#[test]
fn argb_packing_matches_pixels() {
    let pixels = checkerboard(3, 3);
    let encoded = encode(&pixels, 3, 3, 4, 0);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    let argb = decoded.to_argb32();
    assert_eq!(argb.len(), 9);
    assert_eq!(argb[0], 0xFFC8_DCF0);
    assert_eq!(argb[1], 0x800A_2846);
}

#[test]
fn every_truncation_fails_cleanly() {
    let pixels = gradient(9, 7);
    let encoded = encode(&pixels, 9, 7, 4, 0);
    for len in 0..encoded.len() {
        assert!(
            decode(&encoded[..len], Unstoppable).is_err(),
            "truncated to {len} bytes decoded"
        );
    }
    assert!(decode(&encoded, Unstoppable).is_ok());
}

#[test]
fn large_gradient() {
    let pixels = gradient(300, 200);
    assert_decodes_to(&pixels, 300, 200);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let pixels = checkerboard(5, 4);
    let encoded = encode(&pixels, 5, 4, 4, 0);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    let img = decoded.to_imgvec::<rgb::RGBA8>().unwrap();
    assert_eq!(img.width(), 5);
    assert_eq!(img.height(), 4);
    assert_eq!(img.buf()[0], rgb::RGBA8::new(200, 220, 240, 255));
}
