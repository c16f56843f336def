use crate::error::{Error, Result};

/// Compress `input` into run records, or a raw container when runs would not
/// be smaller than the input
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let original_len = u32::try_from(input.len()).map_err(|_| Error::InputTooLarge(input.len()))?;

    let runs = Runs::new(input);
    let encoded_len = runs.clone().count() * 2;

    if encoded_len >= input.len() {
        log::debug!(
            "rle: {} bytes would need {} bytes of runs, storing raw",
            input.len(),
            encoded_len
        );
        let mut output = Vec::with_capacity(super::RAW_HEADER_LEN + input.len());
        output.extend_from_slice(&super::RAW_SENTINEL.to_le_bytes());
        output.extend_from_slice(&original_len.to_le_bytes());
        output.extend_from_slice(input);
        return Ok(output);
    }

    let mut output = Vec::with_capacity(super::HEADER_LEN + encoded_len);
    output.extend_from_slice(&original_len.to_le_bytes());
    for (byte, count) in runs {
        output.push(byte);
        output.push(count);
    }

    log::debug!("rle: {} bytes -> {} run bytes", input.len(), encoded_len);
    Ok(output)
}

/// Iterator over `(byte, count)` runs, each at most 255 long
#[derive(Clone)]
pub struct Runs<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<(u8, u8)> {
        let byte = *self.data.get(self.pos)?;
        let count = self.data[self.pos..]
            .iter()
            .take(super::MAX_RUN as usize)
            .take_while(|&&b| b == byte)
            .count();
        self.pos += count;
        Some((byte, count as u8))
    }
}
