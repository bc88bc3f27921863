#![no_main]
use libfuzzer_sys::fuzz_target;
use snbt::{Options, parse_value, parse_value_with};

// Interning must never change the parsed tree.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let plain = parse_value(s);
        let opts = Options::default().with_intern_names(true).with_intern_values(true);
        let interned = parse_value_with(s, &opts);
        match (plain, interned) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => panic!("interning changed outcome: {:?} vs {:?}", a.is_ok(), b.is_ok()),
        }
    }
});
