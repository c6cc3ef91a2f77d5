#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap allocations so hostile headers can't OOM the fuzzer.
    let limits = zenqoi::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };

    // Must never panic
    let probed = zenqoi::probe(data);
    let Ok(decoded) = zenqoi::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // A successful decode implies a valid header with matching fields
    let info = probed.expect("decode succeeded but probe failed");
    assert_eq!(info.width, decoded.width);
    assert_eq!(info.height, decoded.height);
    assert_eq!(info.channels, decoded.channels);
    assert_eq!(info.colorspace, decoded.colorspace);
    assert_eq!(
        decoded.pixels().len(),
        decoded.width as usize * decoded.height as usize * 4
    );
    assert_eq!(decoded.to_argb32().len(), decoded.pixel_count());
});
