//! Fixed-capacity bit array packed into `u64` words.
//!
//! Bit `i` lives in word `i / 64`, counted from the most significant bit of
//! that word: bit 0 of a word is its top bit and bit 63 its bottom bit. This
//! ordering is part of the archive layout and must not change.

use crate::error::{BitArrayError, Result};

/// Number of bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Word-packed bit storage for a Bloom filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u64>,
}

impl BitArray {
    /// Allocate `count / 64 + 1` zeroed words.
    ///
    /// The extra word is always reserved, even when `count` is a multiple of
    /// 64. Filter arithmetic built on top of this type depends on it.
    pub fn new(count: usize) -> Self {
        let num_words = count / WORD_BITS + 1;
        Self {
            words: vec![0; num_words],
        }
    }

    /// Wrap existing words verbatim.
    pub fn from_words(words: Vec<u64>) -> Result<Self> {
        if words.is_empty() {
            return Err(BitArrayError::EmptyStorage);
        }
        Ok(Self { words })
    }

    /// Highest addressable bit index, `word_count() * 64 - 1`.
    pub fn count(&self) -> usize {
        self.words.len() * WORD_BITS - 1
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let (word, offset) = word_position(index);
        Ok(self.words[word] & mask(offset)? != 0)
    }

    /// Set or clear a single bit. Only the word holding `index` is touched.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        let (word, offset) = word_position(index);
        if value {
            self.words[word] |= mask(offset)?;
        } else {
            self.words[word] &= negative(offset)?;
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        check_bound(index, self.count())
    }
}

/// Split a bit index into `(word index, bit offset within the word)`.
pub fn word_position(index: usize) -> (usize, usize) {
    (index / WORD_BITS, index % WORD_BITS)
}

/// Shift distance from the least significant end for an in-word offset.
pub fn inverted_index(offset: usize) -> usize {
    WORD_BITS - 1 - offset
}

/// Word with only the bit at `offset` set, most significant bit first.
pub fn mask(offset: usize) -> Result<u64> {
    check_bound(offset, WORD_BITS - 1)?;
    Ok(1u64 << inverted_index(offset))
}

/// Complement of [`mask`], for clearing a bit.
pub fn negative(offset: usize) -> Result<u64> {
    Ok(!mask(offset)?)
}

fn check_bound(index: usize, max: usize) -> Result<()> {
    if index > max {
        return Err(BitArrayError::OutOfBounds { index, max });
    }
    Ok(())
}
