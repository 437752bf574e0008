#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that parses must render without panicking; the layout
    // engine is total over a valid tree.
    if let Ok(nodes) = dirgram::parse_nodes(data) {
        let _ = dirgram::generate(&nodes);
    }
});
