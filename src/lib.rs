pub mod bits;
pub mod error;
pub mod huffman;
pub mod lzw;
pub mod rle;

pub use error::{Error, Result};
pub use huffman::Huffman;
pub use lzw::Lzw;
pub use rle::Rle;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default upper bound on the original length a stream may declare (100 MB)
pub const DEFAULT_MAX_DECODED_LEN: usize = 100_000_000;

/// Codec family selector
///
/// Each codec's output is only readable by the same codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Huffman coding with the tree stored in the header
    #[default]
    Huffman,
    /// Run-length encoding with a raw fallback
    Rle,
    /// LZW with 12-bit codes
    Lzw,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Huffman, Algorithm::Rle, Algorithm::Lzw];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Rle => "rle",
            Self::Lzw => "lzw",
        }
    }

    /// File extension (without dot) used for compressed output
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Huffman => "huff",
            Self::Rle => "rle",
            Self::Lzw => "lzw",
        }
    }

    /// Detect the codec from a compressed file's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str()).map(|s| s.to_lowercase())?;
        Self::ALL.into_iter().find(|a| a.extension() == ext)
    }

    /// Build the codec for this algorithm
    pub fn codec(&self, config: CodecConfig) -> Box<dyn Codec> {
        match self {
            Self::Huffman => Box::new(Huffman::new(config)),
            Self::Rle => Box::new(Rle::new(config)),
            Self::Lzw => Box::new(Lzw::new(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower || a.extension() == lower)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Configuration shared by all codecs
#[derive(Clone, Debug)]
pub struct CodecConfig {
    /// Largest original length a compressed stream may declare
    pub max_decoded_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_decoded_len: DEFAULT_MAX_DECODED_LEN }
    }
}

/// Whole-buffer compression codec
///
/// Empty input compresses and decompresses to empty output. Malformed
/// compressed input is reported as an error, never as an empty buffer.
pub trait Codec {
    /// Compress `input` into this codec's container format
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Restore the original bytes from a container produced by `compress`
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Compress `data` with `algorithm` using the default configuration
pub fn compress(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
    algorithm.codec(CodecConfig::default()).compress(data)
}

/// Decompress `data` with `algorithm` using the default configuration
pub fn decompress(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
    algorithm.codec(CodecConfig::default()).decompress(data)
}

/// Output path for a compressed file: the input path with `.<ext>` appended
pub fn compressed_path(input: &Path, algorithm: Algorithm) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(algorithm.extension());
    PathBuf::from(name)
}

/// Output path for a decompressed file.
///
/// A known codec extension is stripped; anything else gets `.decompressed`
/// appended.
pub fn decompressed_path(input: &Path) -> PathBuf {
    if Algorithm::from_path(input).is_some() {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".decompressed");
        PathBuf::from(name)
    }
}
