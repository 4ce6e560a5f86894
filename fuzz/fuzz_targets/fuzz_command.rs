#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the browse command parser with arbitrary strings
    let _ = temple_atlas::browse::parse_command(data);
});
