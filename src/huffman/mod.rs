pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use codes::{Code, CodeTable};
pub use frequency::FrequencyCounter;
pub use queue::MinQueue;
pub use tree::{HuffmanTree, Node};

use crate::error::Result;
use crate::{Codec, CodecConfig};

/// Original length (8) + tree length (4)
pub const HEADER_LEN: usize = 12;

/// Smallest decodable stream: header plus the padding byte
pub const MIN_STREAM_LEN: usize = HEADER_LEN + 1;

/// Huffman codec with a per-call tree stored in the stream header
#[derive(Clone, Debug, Default)]
pub struct Huffman {
    config: CodecConfig,
}

impl Huffman {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl Codec for Huffman {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decode(input, self.config.max_decoded_len)
    }
}
