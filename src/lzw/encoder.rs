use crate::error::{Error, Result};

use super::dictionary::EncodeDictionary;

/// Compress `input` into a u32 LE length header followed by 12-bit codes
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let original_len = u32::try_from(input.len()).map_err(|_| Error::InputTooLarge(input.len()))?;

    let mut dict = EncodeDictionary::new();
    let mut output = Vec::with_capacity(super::HEADER_LEN + input.len());
    output.extend_from_slice(&original_len.to_le_bytes());

    let mut current: Vec<u8> = Vec::new();
    let mut current_code: Option<u16> = None;
    let mut codes_written = 0usize;

    for &byte in input {
        current.push(byte);
        if let Some(code) = dict.get(&current) {
            current_code = Some(code);
            continue;
        }

        if let Some(code) = current_code {
            write_code(&mut output, code);
            codes_written += 1;
        }

        let extended = std::mem::replace(&mut current, vec![byte]);
        if dict.insert(extended).is_some() && dict.is_full() {
            log::debug!("lzw: dictionary full after {} codes", codes_written);
        }
        current_code = Some(byte as u16);
    }

    if let Some(code) = current_code {
        write_code(&mut output, code);
        codes_written += 1;
    }

    log::debug!(
        "lzw: {} bytes -> {} codes, {} dictionary entries",
        input.len(),
        codes_written,
        dict.len()
    );
    Ok(output)
}

/// Write a 12-bit code as `(low byte, high nibble)`
#[inline]
fn write_code(output: &mut Vec<u8>, code: u16) {
    output.push((code & 0xFF) as u8);
    output.push(((code >> 8) as u8) & super::HIGH_NIBBLE_MASK);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_of(stream: &[u8]) -> Vec<u16> {
        stream[4..].chunks_exact(2).map(|p| p[0] as u16 | ((p[1] as u16) << 8)).collect()
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode(b"A").unwrap(), vec![1, 0, 0, 0, b'A', 0]);
    }

    #[test]
    fn test_encode_overlapping_pattern() {
        let stream = encode(b"ABABABAB").unwrap();
        assert_eq!(&stream[..4], &8u32.to_le_bytes());
        // A, B, AB(256), ABA(258), B
        assert_eq!(codes_of(&stream), vec![65, 66, 256, 258, 66]);
    }

    #[test]
    fn test_encode_classic_example() {
        let stream = encode(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
        let expected: Vec<u16> = vec![
            b'T' as u16, b'O' as u16, b'B' as u16, b'E' as u16, b'O' as u16, b'R' as u16,
            b'N' as u16, b'O' as u16, b'T' as u16, 256, 258, 260, 265, 259, 261, 263,
        ];
        assert_eq!(codes_of(&stream), expected);
    }

    #[test]
    fn test_encode_high_nibble_only() {
        // Enough distinct pairs to push codes past 0xFF
        let data: Vec<u8> = (0..2000u32).map(|i| (i * 7 % 251) as u8).collect();
        let stream = encode(&data).unwrap();
        assert!(stream[4..].chunks_exact(2).all(|p| p[1] & 0xF0 == 0));
        assert!(codes_of(&stream).iter().any(|&c| c > 0xFF));
    }

    #[test]
    fn test_encode_codes_stay_below_dictionary_limit() {
        let mut state = 0x2545F4914F6CDD1Du64;
        let data: Vec<u8> = (0..200_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state & 0xFF) as u8
            })
            .collect();
        let stream = encode(&data).unwrap();
        assert!(codes_of(&stream).iter().all(|&c| (c as usize) < crate::lzw::MAX_ENTRIES));
    }
}
