#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = snbt::parse_value(s);
        let _ = snbt::parse_compound(s);
        let _ = snbt::parse_list(s);
    }
});
