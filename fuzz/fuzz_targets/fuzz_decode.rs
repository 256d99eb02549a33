#![no_main]

use libfuzzer_sys::fuzz_target;
use polystep::{decode_line, decode_line_checked};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Property 1: arbitrary input never panics and honors the cap.
    let decoded = decode_line(input, 64);
    assert!(decoded.len() <= 64);

    // Property 2: the checked decoder never panics, and when it
    // accepts the input it agrees with the lenient driver.
    if let Ok(checked) = decode_line_checked(input) {
        let lenient = decode_line(input, checked.len() + 1);
        assert_eq!(checked, lenient);
    }
});
