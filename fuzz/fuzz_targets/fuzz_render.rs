#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let result = allegro_pricing::calculate(s, "5");
        let _ = allegro_pricing::render::render_report(result.as_ref());
    }
});
