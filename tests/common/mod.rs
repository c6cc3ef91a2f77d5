//! Minimal QOI encoder for building test streams.

#![allow(dead_code)]

pub const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

pub fn header(width: u32, height: u32, channels: u8, colorspace: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(14);
    out.extend_from_slice(b"qoif");
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(channels);
    out.push(colorspace);
    out
}

/// Header + raw chunk bytes + end marker.
pub fn stream(width: u32, height: u32, chunks: &[u8]) -> Vec<u8> {
    let mut out = header(width, height, 4, 0);
    out.extend_from_slice(chunks);
    out.extend_from_slice(&END_MARKER);
    out
}

fn slot(px: [u8; 4]) -> usize {
    (px[0] as usize * 3 + px[1] as usize * 5 + px[2] as usize * 7 + px[3] as usize * 11) % 64
}

/// Encode RGBA8 pixels using every chunk type.
pub fn encode(rgba: &[u8], width: u32, height: u32, channels: u8, colorspace: u8) -> Vec<u8> {
    assert_eq!(rgba.len(), width as usize * height as usize * 4);
    let mut out = header(width, height, channels, colorspace);
    let mut index = [[0u8; 4]; 64];
    let mut prev = [0u8, 0, 0, 255];
    let mut run = 0u8;
    let count = rgba.len() / 4;

    for (i, chunk) in rgba.chunks_exact(4).enumerate() {
        let px = [chunk[0], chunk[1], chunk[2], chunk[3]];
        if px == prev {
            run += 1;
            if run == 62 || i + 1 == count {
                out.push(0xC0 | (run - 1));
                run = 0;
            }
            continue;
        }
        if run > 0 {
            out.push(0xC0 | (run - 1));
            run = 0;
        }

        let s = slot(px);
        if index[s] == px {
            out.push(s as u8);
        } else {
            index[s] = px;
            if px[3] == prev[3] {
                let vr = px[0].wrapping_sub(prev[0]) as i8;
                let vg = px[1].wrapping_sub(prev[1]) as i8;
                let vb = px[2].wrapping_sub(prev[2]) as i8;
                let vg_r = vr.wrapping_sub(vg);
                let vg_b = vb.wrapping_sub(vg);
                if (-2..=1).contains(&vr) && (-2..=1).contains(&vg) && (-2..=1).contains(&vb) {
                    out.push(
                        0x40 | (((vr + 2) as u8) << 4) | (((vg + 2) as u8) << 2) | (vb + 2) as u8,
                    );
                } else if (-32..=31).contains(&vg)
                    && (-8..=7).contains(&vg_r)
                    && (-8..=7).contains(&vg_b)
                {
                    out.push(0x80 | (vg + 32) as u8);
                    out.push((((vg_r + 8) as u8) << 4) | (vg_b + 8) as u8);
                } else {
                    out.extend_from_slice(&[0xFE, px[0], px[1], px[2]]);
                }
            } else {
                out.extend_from_slice(&[0xFF, px[0], px[1], px[2], px[3]]);
            }
        }
        prev = px;
    }

    out.extend_from_slice(&END_MARKER);
    out
}

pub fn gradient(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            pixels.extend_from_slice(&[(x * 4) as u8, (y * 3) as u8, ((x + y) * 2) as u8, 255]);
        }
    }
    pixels
}

pub fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.extend_from_slice(&[200, 220, 240, 255]);
            } else {
                pixels.extend_from_slice(&[10, 40, 70, 128]);
            }
        }
    }
    pixels
}

pub fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}
