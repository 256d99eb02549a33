#![no_main]

use libfuzzer_sys::fuzz_target;
use polystep::{decode_line, encode_line, Point};

fuzz_target!(|data: &[u8]| {
    // 8 bytes per point: two i32 quanta (1e-5 degree units), clamped
    // to ±180° so everything is encodable and grid-aligned.
    let points: Vec<Point> = data
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

    let mut out = String::new();
    let n = encode_line(&points, &mut out, points.len() * 12);
    assert_eq!(n, points.len());

    // Property: grid-aligned points recover their exact grid cell.
    let decoded = decode_line(&out, points.len() + 1);
    assert_eq!(decoded.len(), points.len());
    for (got, want) in decoded.iter().zip(&points) {
        assert_eq!((got.lat * 1e5).round(), (want.lat * 1e5).round());
        assert_eq!((got.lon * 1e5).round(), (want.lon * 1e5).round());
    }
});
