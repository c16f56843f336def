pub mod decoder;
pub mod encoder;
pub mod dictionary;

pub use dictionary::{DecodeDictionary, EncodeDictionary, MAX_ENTRIES};

use crate::error::Result;
use crate::{Codec, CodecConfig};

/// Original length (4)
pub const HEADER_LEN: usize = 4;

/// Smallest decodable stream: header plus one code
pub const MIN_STREAM_LEN: usize = HEADER_LEN + 2;

/// Mask applied to the second byte of each code pair
pub const HIGH_NIBBLE_MASK: u8 = 0x0F;

/// LZW codec with 12-bit codes and a 4096-entry dictionary
#[derive(Clone, Debug, Default)]
pub struct Lzw {
    config: CodecConfig,
}

impl Lzw {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl Codec for Lzw {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decode(input, self.config.max_decoded_len)
    }
}
