use crate::bits::BitReader;
use crate::error::{Error, Result};

use super::dictionary::{DecodeDictionary, SEED_ENTRIES};

/// Decompress an LZW stream produced by [`super::encoder::encode`].
///
/// The dictionary is rebuilt one step behind the encoder: each code adds
/// `previous + first byte of current`. A code equal to the next free code
/// refers to the entry the encoder created on the step being decoded, which
/// can only be `previous + first byte of previous`.
pub fn decode(input: &[u8], max_len: usize) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() < super::MIN_STREAM_LEN {
        return Err(Error::HeaderTooShort {
            format: "LZW",
            needed: super::MIN_STREAM_LEN,
            found: input.len(),
        });
    }

    let mut reader = BitReader::new(input);
    let original_len = reader.read_u32_le()?;
    if original_len == 0 || original_len as u64 > max_len as u64 {
        return Err(Error::InvalidLength { length: original_len as u64, max: max_len });
    }
    let original_len = original_len as usize;

    // A dangling odd byte cannot hold a code and is ignored
    let mut codes = reader
        .remaining_bytes()
        .chunks_exact(2)
        .map(|pair| pair[0] as u16 | (((pair[1] & super::HIGH_NIBBLE_MASK) as u16) << 8));

    let first = codes.next().ok_or(Error::UnexpectedEof)?;
    if first as usize >= SEED_ENTRIES {
        return Err(Error::InvalidFirstCode(first));
    }

    let mut dict = DecodeDictionary::new();
    let mut output = Vec::with_capacity(original_len);
    let mut previous = vec![first as u8];
    output.extend_from_slice(&previous);

    for code in codes {
        if output.len() >= original_len {
            break;
        }

        let entry = match dict.get(code) {
            Some(sequence) => sequence.to_vec(),
            None if code as usize == dict.next_code() => {
                let mut sequence = previous.clone();
                sequence.push(previous[0]);
                sequence
            }
            None => return Err(Error::InvalidCode { code, next: dict.next_code() }),
        };
        output.extend_from_slice(&entry);

        let mut new_entry = std::mem::take(&mut previous);
        new_entry.push(entry[0]);
        dict.push(new_entry);
        previous = entry;
    }

    if output.len() < original_len {
        return Err(Error::SizeMismatch {
            expected: original_len as u64,
            found: output.len() as u64,
        });
    }
    output.truncate(original_len);

    log::trace!("lzw: decoded {} bytes, {} dictionary entries", original_len, dict.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lzw::encoder::encode;
    use crate::lzw::MAX_ENTRIES;
    use crate::DEFAULT_MAX_DECODED_LEN;

    fn decode_default(input: &[u8]) -> Result<Vec<u8>> {
        decode(input, DEFAULT_MAX_DECODED_LEN)
    }

    fn stream(original_len: u32, codes: &[u16]) -> Vec<u8> {
        let mut out = original_len.to_le_bytes().to_vec();
        for &code in codes {
            out.push((code & 0xFF) as u8);
            out.push((code >> 8) as u8);
        }
        out
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_default(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_short_header() {
        let result = decode_default(&[1, 0, 0, 0, 65]);
        assert!(matches!(result, Err(Error::HeaderTooShort { needed: 6, found: 5, .. })));
    }

    #[test]
    fn test_decode_next_free_code_branch() {
        // 258 is referenced before the decoder has built it
        let data = decode_default(&stream(8, &[65, 66, 256, 258, 66])).unwrap();
        assert_eq!(data, b"ABABABAB");
    }

    #[test]
    fn test_decode_run_of_one_byte() {
        // A, AA(256), AAA(257): every code after the first hits the next free code
        let data = decode_default(&stream(6, &[65, 256, 257])).unwrap();
        assert_eq!(data, b"AAAAAA");
    }

    #[test]
    fn test_decode_round_trip_classic() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        assert_eq!(decode_default(&encode(data).unwrap()).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_zero_length() {
        let result = decode_default(&stream(0, &[65]));
        assert!(matches!(result, Err(Error::InvalidLength { length: 0, .. })));
    }

    #[test]
    fn test_decode_rejects_oversized_length() {
        let result = decode(&stream(5000, &[65]), 4999);
        assert!(matches!(result, Err(Error::InvalidLength { length: 5000, max: 4999 })));
        let result = decode_default(&stream(u32::MAX, &[65]));
        assert!(matches!(result, Err(Error::InvalidLength { .. })));
    }

    #[test]
    fn test_decode_rejects_non_seed_first_code() {
        let result = decode_default(&stream(2, &[256, 65]));
        assert!(matches!(result, Err(Error::InvalidFirstCode(256))));
    }

    #[test]
    fn test_decode_rejects_code_beyond_next() {
        let result = decode_default(&stream(3, &[65, 300]));
        assert!(matches!(result, Err(Error::InvalidCode { code: 300, next: 256 })));
    }

    #[test]
    fn test_decode_masks_high_bits() {
        let mut data = stream(2, &[65, 66]);
        data[5] |= 0xF0;
        data[7] |= 0xA0;
        assert_eq!(decode_default(&data).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_too_few_codes() {
        let result = decode_default(&stream(10, &[65, 66]));
        assert!(matches!(result, Err(Error::SizeMismatch { expected: 10, found: 2 })));
    }

    #[test]
    fn test_decode_truncates_to_declared_length() {
        // AB(256) expands past the declared 2 bytes
        assert_eq!(decode_default(&stream(2, &[65, 256])).unwrap(), b"AA");
        assert_eq!(decode_default(&stream(1, &[65, 66, 67])).unwrap(), b"A");
    }

    #[test]
    fn test_decode_ignores_dangling_byte() {
        let mut data = stream(2, &[65, 66]);
        data.push(0x7F);
        assert_eq!(decode_default(&data).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_after_dictionary_fills() {
        // Noise keeps matches short, so the dictionary saturates early
        let mut state = 0x9E37_79B9_7F4A_7C15u64;
        let data: Vec<u8> = (0..40_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 24) as u8
            })
            .collect();
        let encoded = encode(&data).unwrap();
        let codes = (encoded.len() - 4) / 2;
        assert!(codes > MAX_ENTRIES);
        assert_eq!(decode_default(&encoded).unwrap(), data);
    }
}
