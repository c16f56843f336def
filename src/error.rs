use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Header errors
    #[error("{format} header too short: need at least {needed} bytes, got {found}")]
    HeaderTooShort { format: &'static str, needed: usize, found: usize },

    #[error("Declared length {length} is outside the accepted range 1..={max}")]
    InvalidLength { length: u64, max: usize },

    #[error("Input of {0} bytes is too large for a 32-bit length header")]
    InputTooLarge(usize),

    // Huffman tree errors
    #[error("Invalid Huffman tree marker: {0}")]
    InvalidTreeMarker(u8),

    #[error("Huffman tree contains an empty child slot")]
    EmptyTreeSlot,

    #[error("Huffman tree deeper than {0} levels")]
    TreeTooDeep(usize),

    #[error("Huffman tree section has {0} unused trailing bytes")]
    TrailingTreeBytes(usize),

    #[error("Huffman code longer than {0} bits")]
    CodeTooLong(u8),

    #[error("Invalid padding bit count: {0} (max 7)")]
    InvalidPadding(u8),

    // LZW errors
    #[error("Invalid first LZW code: {0} (must be a single-byte code)")]
    InvalidFirstCode(u16),

    #[error("Invalid LZW code {code}: next assignable code is {next}")]
    InvalidCode { code: u16, next: usize },

    // RLE errors
    #[error("Zero-length run at offset {0}")]
    ZeroRunLength(usize),

    // Size checks
    #[error("Size mismatch: expected {expected} bytes, got {found}")]
    SizeMismatch { expected: u64, found: u64 },

    // Internal errors
    #[error("Unexpected end of input")]
    UnexpectedEof,

    // Caller errors
    #[error("Unknown algorithm: {0} (expected huffman, rle or lzw)")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
