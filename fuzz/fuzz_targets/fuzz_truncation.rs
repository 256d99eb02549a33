#![no_main]

use libfuzzer_sys::fuzz_target;
use polystep::{decode_line, encode_line, Point};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First 2 bytes pick the output budget; the rest become points.
    let max_len = usize::from(u16::from_le_bytes([data[0], data[1]])) % 512;
    let points: Vec<Point> = data[2..]
        .chunks_exact(8)
        .map(|chunk| {
            let lat = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let lon = i32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Point::new(
                f64::from(lat.clamp(-18_000_000, 18_000_000)) * 1e-5,
                f64::from(lon.clamp(-18_000_000, 18_000_000)) * 1e-5,
            )
        })
        .collect();

    let mut full = String::new();
    encode_line(&points, &mut full, points.len() * 12);

    let mut out = String::new();
    let n = encode_line(&points, &mut out, max_len);

    // Property 1: the budget is respected and the count is honest.
    assert!(out.len() <= max_len);
    assert!(n <= points.len());

    // Property 2: a truncated encoding is a clean prefix of the full
    // one, holding exactly the counted points.
    assert!(full.starts_with(&out));
    assert_eq!(decode_line(&out, points.len() + 1).len(), n);
});
