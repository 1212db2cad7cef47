#![no_main]
use libfuzzer_sys::fuzz_target;
use ssmlparse::{parse_ssml, ssml_to_text};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Both entry points accept and reject exactly the same inputs
        assert_eq!(parse_ssml(s).is_ok(), ssml_to_text(s).is_ok());
    }
});
