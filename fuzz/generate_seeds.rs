#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32, channels: u8) -> Vec<u8> {
    let mut out = b"qoif".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(channels);
    out.push(0);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();
    let end = [0u8, 0, 0, 0, 0, 0, 0, 1];

    // 1x1 RGBA
    let mut rgba = header(1, 1, 4);
    rgba.extend_from_slice(&[0xFF, 10, 20, 30, 40]);
    rgba.extend_from_slice(&end);
    fs::write(format!("{dir}/rgba_1x1.qoi"), rgba).unwrap();

    // 4x2 with every chunk type: RGB, DIFF, LUMA, INDEX, RUN, RGBA
    let mut mixed = header(4, 2, 3);
    mixed.extend_from_slice(&[0xFE, 100, 100, 100]);
    mixed.push(0b01_11_10_01);
    mixed.extend_from_slice(&[0b10_100101, 0x7A]);
    mixed.push(0x00);
    mixed.push(0b11_000010);
    mixed.extend_from_slice(&[0xFF, 1, 2, 3, 4]);
    mixed.extend_from_slice(&end);
    fs::write(format!("{dir}/mixed_4x2.qoi"), mixed).unwrap();

    // 62-pixel run
    let mut run = header(62, 1, 4);
    run.push(0b11_111101);
    run.extend_from_slice(&end);
    fs::write(format!("{dir}/run_62x1.qoi"), run).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"qoif").unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), b"qoig\x00\x00\x00\x01\x00\x00\x00\x01\x04\x00").unwrap();
    let mut short_end = header(1, 1, 4);
    short_end.extend_from_slice(&[0xFE, 1, 2, 3, 0, 0, 0, 0, 0, 0]);
    fs::write(format!("{dir}/short_end_marker.bin"), short_end).unwrap();
    let mut huge = header(0x7FFF_FFFF, 0x7FFF_FFFF, 4);
    huge.push(0xFD);
    fs::write(format!("{dir}/huge_dims.bin"), huge).unwrap();

    println!("Generated seed corpus in {dir}/");
}
