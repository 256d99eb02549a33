#![no_main]

use libfuzzer_sys::fuzz_target;
use polystep::{decode_line, Point, Step, StepDecoder};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Drive the state machine by hand over arbitrary input.
    let mut decoder = StepDecoder::new();
    decoder.start();
    let mut point = Point::ORIGIN;
    let mut stepped = Vec::new();
    for &byte in input.as_bytes() {
        if decoder.step(byte, &mut point) == Step::PointComplete {
            stepped.push(point);
        }
    }

    // Property: stepwise decoding agrees with the driving loop even
    // on malformed input. NaN never occurs (inputs are finite), so
    // point equality is well defined here.
    let looped = decode_line(input, stepped.len() + 1);
    assert_eq!(stepped, looped);

    // Property: in_progress is consistent with how the input ended.
    if input.is_empty() {
        assert!(!decoder.in_progress());
    }
});
