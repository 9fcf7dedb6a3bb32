#![no_main]
use libfuzzer_sys::fuzz_target;
use runerev::{reverse_code_points, reverse_code_points_bytes, reverse_code_points_lossy};

fn reverse(data: &[u8]) {
    match reverse_code_points_bytes(data) {
        Ok(reversed) => {
            // Strict acceptance must match core's notion of valid UTF-8.
            let text = core::str::from_utf8(data).unwrap();
            assert_eq!(reverse_code_points(&reversed), text);
            assert_eq!(reversed.chars().count(), text.chars().count());
        }
        Err(err) => {
            assert!(core::str::from_utf8(data).is_err());
            assert!(err.valid_up_to() <= data.len());
        }
    }

    // The lossy path is total and involutive over its own output.
    let lossy = reverse_code_points_lossy(data);
    assert_eq!(reverse_code_points(&reverse_code_points(&lossy)), lossy);
}

fuzz_target!(|data: &[u8]| reverse(data));
