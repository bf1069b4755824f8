#![no_main]

use libfuzzer_sys::fuzz_target;
use mascara::{apply_currency_mask, remove_currency_mask};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let masked = apply_currency_mask(s);
        // Idempotence must hold for any input
        assert_eq!(apply_currency_mask(&masked), masked);
        assert_eq!(apply_currency_mask(&remove_currency_mask(&masked)), masked);
    }
});
