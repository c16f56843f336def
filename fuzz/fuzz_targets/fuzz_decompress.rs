#![no_main]

use libfuzzer_sys::fuzz_target;
use tricodec::{Algorithm, CodecConfig};

fuzz_target!(|data: &[u8]| {
    // Keep declared lengths small so hostile headers cannot force large allocations
    let config = CodecConfig { max_decoded_len: 1 << 20 };

    // Decompression may fail on invalid input - that's OK
    // We're looking for panics/crashes, not errors
    for algorithm in Algorithm::ALL {
        let _ = algorithm.codec(config.clone()).decompress(data);
    }
});
