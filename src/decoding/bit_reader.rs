/// Exposes a packed payload as a bounded sequence of bits, most significant
/// bit of each byte first, with the trailing filler bits already trimmed
/// off the readable range.
pub(crate) struct BitReader<'s> {
    /// Index counts bits already read
    idx: usize,
    /// Total readable bits, excluding the filler
    num_bits: usize,
    source: &'s [u8],
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GetBitsError {
    #[error("Cannot read {requested} bits, only {remaining} bits are left in the stream")]
    NotEnoughBits { requested: usize, remaining: usize },
}

impl<'s> BitReader<'s> {
    /// `padding_bits` must already be validated to be in `0..=7`, and zero
    /// for an empty source.
    pub fn new(source: &'s [u8], padding_bits: u8) -> Self {
        debug_assert!(padding_bits < 8);
        debug_assert!(!source.is_empty() || padding_bits == 0);
        BitReader {
            idx: 0,
            num_bits: source.len() * 8 - padding_bits as usize,
            source,
        }
    }

    pub fn bits_left(&self) -> usize {
        self.num_bits - self.idx
    }

    /// Read a single bit, `false` for 0 and `true` for 1.
    pub fn get_bit(&mut self) -> Result<bool, GetBitsError> {
        if self.idx == self.num_bits {
            return Err(GetBitsError::NotEnoughBits {
                requested: 1,
                remaining: 0,
            });
        }
        let bit = (self.source[self.idx / 8] >> (7 - self.idx % 8)) & 1;
        self.idx += 1;
        Ok(bit == 1)
    }
}
