#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — rejection is fine, panics are bugs.
        let (net, vat) = s.split_once('\n').unwrap_or((s, "23"));
        if let Some(result) = allegro_pricing::calculate(net, vat) {
            assert!(result.net_price > rust_decimal::Decimal::ZERO);
        }
    }
});
