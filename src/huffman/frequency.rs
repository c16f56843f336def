/// Byte frequency counter for Huffman tree construction
///
/// One slot per byte value, indexed directly by the byte.
#[derive(Clone, Debug)]
pub struct FrequencyCounter {
    counts: [u64; 256],
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut freq = Self::new();
        freq.count_bytes(data);
        freq
    }

    /// Add the bytes of `data` to the running counts
    pub fn count_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Occurrence count of a single byte value
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of distinct byte values seen at least once
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of bytes counted
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(byte, count)` pairs for bytes that occurred, in ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().filter(|(_, &c)| c > 0).map(|(b, &c)| (b as u8, c))
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_counter() {
        let freq = FrequencyCounter::from_bytes(b"abracadabra");

        assert_eq!(freq.get(b'a'), 5);
        assert_eq!(freq.get(b'b'), 2);
        assert_eq!(freq.get(b'r'), 2);
        assert_eq!(freq.get(b'c'), 1);
        assert_eq!(freq.get(b'd'), 1);
        assert_eq!(freq.get(b'z'), 0);
        assert_eq!(freq.distinct(), 5);
        assert_eq!(freq.total(), 11);
    }

    #[test]
    fn test_iter_skips_absent_and_is_ascending() {
        let freq = FrequencyCounter::from_bytes(&[200, 3, 3, 0, 200, 200]);
        let entries: Vec<(u8, u64)> = freq.iter().collect();
        assert_eq!(entries, vec![(0, 1), (3, 2), (200, 3)]);
    }

    #[test]
    fn test_empty_counter() {
        let freq = FrequencyCounter::default();
        assert_eq!(freq.distinct(), 0);
        assert_eq!(freq.iter().count(), 0);
    }

    #[test]
    fn test_count_bytes_accumulates() {
        let mut freq = FrequencyCounter::new();
        freq.count_bytes(&[0xFF]);
        freq.count_bytes(&[0xFF, 0xFF]);
        assert_eq!(freq.get(0xFF), 3);
    }
}
