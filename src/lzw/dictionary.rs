use std::collections::HashMap;

/// Largest number of entries a 12-bit code space can address
pub const MAX_ENTRIES: usize = 4096;

/// Single-byte sequences present before any input is seen
pub const SEED_ENTRIES: usize = 256;

/// Sequence-to-code dictionary built while compressing
#[derive(Clone, Debug)]
pub struct EncodeDictionary {
    codes: HashMap<Vec<u8>, u16>,
}

impl EncodeDictionary {
    /// Create a dictionary holding the 256 single-byte sequences as codes 0-255
    pub fn new() -> Self {
        let mut codes = HashMap::with_capacity(MAX_ENTRIES);
        for byte in 0..=255u8 {
            codes.insert(vec![byte], byte as u16);
        }
        Self { codes }
    }

    pub fn get(&self, sequence: &[u8]) -> Option<u16> {
        self.codes.get(sequence).copied()
    }

    /// Assign the next free code to `sequence`.
    ///
    /// Returns `None` without inserting once the dictionary is full.
    pub fn insert(&mut self, sequence: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.codes.len() as u16;
        self.codes.insert(sequence, code);
        Some(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.codes.len() >= MAX_ENTRIES
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Code-to-sequence dictionary rebuilt while decompressing
#[derive(Clone, Debug)]
pub struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    /// Create a dictionary holding the 256 single-byte sequences as codes 0-255
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(MAX_ENTRIES);
        entries.extend((0..=255u8).map(|byte| vec![byte]));
        Self { entries }
    }

    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// The code the next inserted sequence will receive
    pub fn next_code(&self) -> usize {
        self.entries.len()
    }

    /// Append `sequence` under the next code, unless the dictionary is full
    pub fn push(&mut self, sequence: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        self.entries.push(sequence);
        Some((self.entries.len() - 1) as u16)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ENTRIES
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_single_bytes() {
        let enc = EncodeDictionary::new();
        let dec = DecodeDictionary::new();
        assert_eq!(enc.len(), SEED_ENTRIES);
        assert_eq!(dec.len(), SEED_ENTRIES);
        for byte in 0..=255u8 {
            assert_eq!(enc.get(&[byte]), Some(byte as u16));
            assert_eq!(dec.get(byte as u16), Some(&[byte][..]));
        }
        assert_eq!(dec.get(256), None);
        assert_eq!(enc.get(b"AB"), None);
    }

    #[test]
    fn test_insert_assigns_sequential_codes() {
        let mut enc = EncodeDictionary::new();
        let mut dec = DecodeDictionary::new();
        assert_eq!(enc.insert(b"AB".to_vec()), Some(256));
        assert_eq!(enc.insert(b"BA".to_vec()), Some(257));
        assert_eq!(dec.next_code(), 256);
        assert_eq!(dec.push(b"AB".to_vec()), Some(256));
        assert_eq!(dec.push(b"BA".to_vec()), Some(257));
        assert_eq!(enc.get(b"BA"), Some(257));
        assert_eq!(dec.get(257), Some(&b"BA"[..]));
    }

    #[test]
    fn test_dictionaries_stop_growing_at_capacity() {
        let mut enc = EncodeDictionary::new();
        let mut dec = DecodeDictionary::new();
        for i in 0..5000u32 {
            let seq = i.to_be_bytes().to_vec();
            enc.insert(seq.clone());
            dec.push(seq);
        }
        assert_eq!(enc.len(), MAX_ENTRIES);
        assert_eq!(dec.len(), MAX_ENTRIES);
        assert!(enc.is_full());
        assert!(dec.is_full());
        assert_eq!(enc.insert(b"late".to_vec()), None);
        assert_eq!(dec.push(b"late".to_vec()), None);
        assert_eq!(enc.get(b"late"), None);
        // Existing entries are still found
        assert_eq!(enc.get(&0u32.to_be_bytes()), Some(256));
        assert_eq!(dec.get(4095), Some(&3839u32.to_be_bytes()[..]));
    }
}
