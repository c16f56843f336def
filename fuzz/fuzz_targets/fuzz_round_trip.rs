#![no_main]

use libfuzzer_sys::fuzz_target;
use tricodec::{compress, decompress, Algorithm};

fuzz_target!(|data: &[u8]| {
    // Limit data size to avoid slowdowns
    let data = if data.len() > 64 * 1024 { &data[..64 * 1024] } else { data };

    for algorithm in Algorithm::ALL {
        let compressed = compress(algorithm, data).expect("compression failed");
        let restored = decompress(algorithm, &compressed).expect("decompression failed");
        assert_eq!(restored, data, "{} round trip mismatch", algorithm);
    }
});
