#![no_main]

use libfuzzer_sys::fuzz_target;
use mascara::{parse_amount, parse_currency_input};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = parse_amount(s);
        let _ = parse_currency_input(s);
    }
});
