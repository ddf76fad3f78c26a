#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Import scanning must never panic, and every capture is quote-free
        for filename in blockcheck::scan_references(content) {
            assert!(!filename.is_empty());
            assert!(!filename.contains('\''));
        }
    }
});
