#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the YAML input boundary - this should never panic, only
    // return InvalidInput for garbage.
    let _ = dirgram::parse_nodes(data);
});
