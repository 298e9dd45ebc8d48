use crate::error::{GmcError, Result};
use std::fmt;

/// An ordered sequence of binary digits, one bit per element (`0` or `1`).
///
/// Produced from a byte buffer by expanding each byte into 8 bits,
/// most-significant bit first, so N input bytes always yield exactly 8N bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bits: Vec::with_capacity(capacity) }
    }

    /// Expand a byte buffer into its bit sequence, MSB first.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(data.len() * 8);
        for &byte in data {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1);
            }
        }
        Self { bits }
    }

    /// Build a sequence from raw bit values. Anything other than 0 or 1
    /// is rejected.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(GmcError::InvalidInput(format!(
                "bit value out of range: {}",
                bad
            )));
        }
        Ok(Self { bits })
    }

    /// Parse a textual `'0'`/`'1'` sequence, the format the encoded output
    /// is persisted in.
    pub fn parse(s: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (pos, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => {
                    return Err(GmcError::InvalidInput(format!(
                        "unexpected character {:?} at position {}",
                        ch, pos
                    )))
                }
            }
        }
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn push(&mut self, bit: u8) {
        debug_assert!(bit <= 1);
        self.bits.push(bit);
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_msb_first() {
        let bits = BitSequence::from_bytes(&[0xF0]);
        assert_eq!(bits.to_string(), "11110000");

        let bits = BitSequence::from_bytes(&[0x00]);
        assert_eq!(bits.to_string(), "00000000");

        let bits = BitSequence::from_bytes(&[0x01, 0x80]);
        assert_eq!(bits.to_string(), "0000000110000000");
    }

    #[test]
    fn test_length_is_eight_per_byte() {
        let data = vec![0xABu8; 37];
        let bits = BitSequence::from_bytes(&data);
        assert_eq!(bits.len(), 8 * data.len());
    }

    #[test]
    fn test_empty_input() {
        let bits = BitSequence::from_bytes(&[]);
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn test_parse_round_trip() {
        let bits = BitSequence::parse("10110010").unwrap();
        assert_eq!(bits.to_string(), "10110010");
        assert_eq!(bits.as_slice(), &[1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BitSequence::parse("0102").is_err());
        assert!(BitSequence::parse("01 0").is_err());
    }

    #[test]
    fn test_from_bits_rejects_out_of_range() {
        assert!(BitSequence::from_bits(vec![0, 1, 2]).is_err());
        assert!(BitSequence::from_bits(vec![0, 1, 1]).is_ok());
    }
}
