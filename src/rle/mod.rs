pub mod decoder;
pub mod encoder;

pub use encoder::Runs;

use crate::error::Result;
use crate::{Codec, CodecConfig};

/// Original length (4)
pub const HEADER_LEN: usize = 4;

/// Marker that replaces the length header for raw (unencoded) payloads
pub const RAW_SENTINEL: u32 = 0xFFFF_FFFF;

/// Sentinel (4) + original length (4)
pub const RAW_HEADER_LEN: usize = 8;

/// Longest run a single record can describe
pub const MAX_RUN: u8 = 255;

/// Run-length codec with a raw fallback for incompressible input
#[derive(Clone, Debug, Default)]
pub struct Rle {
    config: CodecConfig,
}

impl Rle {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl Codec for Rle {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decode(input, self.config.max_decoded_len)
    }
}
