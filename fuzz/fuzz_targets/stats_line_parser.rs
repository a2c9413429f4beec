#![no_main]

use libfuzzer_sys::fuzz_target;
use stemsweep::record::parse_stats;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Any input must parse or return an error, never panic
        if let Ok(records) = parse_stats(input) {
            for record in records {
                let _ = record.specificity();
                let _ = record.sensitivity();
            }
        }
    }
});
