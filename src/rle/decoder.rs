use crate::bits::BitReader;
use crate::error::{Error, Result};

/// Decompress an RLE stream produced by [`super::encoder::encode`]
pub fn decode(input: &[u8], max_len: usize) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() < super::HEADER_LEN {
        return Err(Error::HeaderTooShort {
            format: "RLE",
            needed: super::HEADER_LEN,
            found: input.len(),
        });
    }

    let mut reader = BitReader::new(input);
    let marker = reader.read_u32_le()?;

    if marker == super::RAW_SENTINEL {
        return decode_raw(&mut reader, input.len());
    }

    let original_len = marker;
    if original_len == 0 || original_len as u64 > max_len as u64 {
        return Err(Error::InvalidLength { length: original_len as u64, max: max_len });
    }
    let original_len = original_len as usize;

    let records = reader.remaining_bytes();
    let capacity = original_len.min(records.len() / 2 * super::MAX_RUN as usize);
    let mut output = Vec::with_capacity(capacity);
    for (index, pair) in records.chunks_exact(2).enumerate() {
        let (byte, count) = (pair[0], pair[1] as usize);
        if count == 0 {
            return Err(Error::ZeroRunLength(super::HEADER_LEN + index * 2 + 1));
        }

        let take = count.min(original_len - output.len());
        output.resize(output.len() + take, byte);
        if output.len() == original_len {
            return Ok(output);
        }
    }

    Err(Error::SizeMismatch { expected: original_len as u64, found: output.len() as u64 })
}

/// Raw fallback container: sentinel, u32 LE length, bytes verbatim
fn decode_raw(reader: &mut BitReader<'_>, input_len: usize) -> Result<Vec<u8>> {
    if input_len < super::RAW_HEADER_LEN {
        return Err(Error::HeaderTooShort {
            format: "RLE raw",
            needed: super::RAW_HEADER_LEN,
            found: input_len,
        });
    }

    let original_len = reader.read_u32_le()? as usize;
    let available = reader.remaining_bytes().len();
    if available < original_len {
        return Err(Error::SizeMismatch {
            expected: original_len as u64,
            found: available as u64,
        });
    }
    Ok(reader.read_bytes(original_len)?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::encoder::encode;
    use crate::DEFAULT_MAX_DECODED_LEN;

    fn decode_default(input: &[u8]) -> Result<Vec<u8>> {
        decode(input, DEFAULT_MAX_DECODED_LEN)
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_default(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_short_header() {
        let result = decode_default(&[1, 0, 0]);
        assert!(matches!(result, Err(Error::HeaderTooShort { needed: 4, found: 3, .. })));
    }

    #[test]
    fn test_decode_runs() {
        let data = decode_default(&[6, 0, 0, 0, b'x', 4, b'y', 2]).unwrap();
        assert_eq!(data, b"xxxxyy");
    }

    #[test]
    fn test_decode_split_run() {
        let data = decode_default(&[0x2C, 0x01, 0, 0, 0x42, 255, 0x42, 45]).unwrap();
        assert_eq!(data, vec![0x42; 300]);
    }

    #[test]
    fn test_decode_raw_fallback() {
        let stream = [0xFF, 0xFF, 0xFF, 0xFF, 3, 0, 0, 0, b'a', b'b', b'c'];
        assert_eq!(decode_default(&stream).unwrap(), b"abc");
    }

    #[test]
    fn test_decode_raw_ignores_extra_bytes() {
        let stream = [0xFF, 0xFF, 0xFF, 0xFF, 2, 0, 0, 0, b'a', b'b', b'c'];
        assert_eq!(decode_default(&stream).unwrap(), b"ab");
    }

    #[test]
    fn test_decode_raw_truncated() {
        let stream = [0xFF, 0xFF, 0xFF, 0xFF, 9, 0, 0, 0, b'a'];
        let result = decode_default(&stream);
        assert!(matches!(result, Err(Error::SizeMismatch { expected: 9, found: 1 })));

        let result = decode_default(&[0xFF, 0xFF, 0xFF, 0xFF, 1]);
        assert!(matches!(result, Err(Error::HeaderTooShort { needed: 8, found: 5, .. })));
    }

    #[test]
    fn test_decode_rejects_zero_count() {
        let result = decode_default(&[4, 0, 0, 0, b'a', 2, b'b', 0]);
        assert!(matches!(result, Err(Error::ZeroRunLength(7))));
    }

    #[test]
    fn test_decode_rejects_zero_length() {
        let result = decode_default(&[0, 0, 0, 0, b'a', 1]);
        assert!(matches!(result, Err(Error::InvalidLength { length: 0, .. })));
    }

    #[test]
    fn test_decode_rejects_oversized_length() {
        let stream = 200_000_000u32.to_le_bytes();
        let result = decode_default(&stream);
        assert!(matches!(result, Err(Error::InvalidLength { length: 200_000_000, .. })));
    }

    #[test]
    fn test_decode_stops_at_declared_length() {
        let data = decode_default(&[3, 0, 0, 0, b'z', 10, b'q', 5]).unwrap();
        assert_eq!(data, b"zzz");
    }

    #[test]
    fn test_decode_short_expansion() {
        let result = decode_default(&[9, 0, 0, 0, b'z', 4]);
        assert!(matches!(result, Err(Error::SizeMismatch { expected: 9, found: 4 })));
    }

    #[test]
    fn test_decode_round_trip_mixed() {
        let data = b"aaaaaaaaaabbbbbbbbbbbbcddddddddddddddddddddeeeeeeeeeef";
        assert_eq!(decode_default(&encode(data).unwrap()).unwrap(), data);
    }
}
