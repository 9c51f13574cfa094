//! Fixed-width bit vectors for truth table rows.
//!
//! A [`BitRow`] packs booleans into `u64` words. Unlike a growable bit set,
//! its length is fixed at construction: a row of a truth table always has one
//! bit per input (or per output) column.

use std::fmt;

/// A fixed-width bit vector backed by a vector of u64 words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitRow {
    /// Storage: each u64 holds 64 bits, bit `i` at word `i / 64`.
    words: Vec<u64>,
    /// Number of bits.
    len: usize,
}

impl BitRow {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero row of the given width.
    pub fn zeros(len: usize) -> Self {
        let num_words = len.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            len,
        }
    }

    /// Creates a row holding the binary representation of `value`, MSB-first:
    /// bit 0 of the row is the most significant of the `width` low bits.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn from_counter(value: u64, width: usize) -> Self {
        assert!(width <= 64, "Counter width should be in the range 0..=64");
        let mut row = Self::zeros(width);
        for i in 0..width {
            row.set(i, (value >> (width - 1 - i)) & 1 == 1);
        }
        row
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the row has no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Returns the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "Bit index {} out of range for width {}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "Bit index {} out of range for width {}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        if value {
            self.words[word_idx] |= mask;
        } else {
            self.words[word_idx] &= !mask;
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Reads the row back as an MSB-first binary number.
    ///
    /// # Panics
    ///
    /// Panics if the row is wider than 64 bits.
    pub fn to_counter(&self) -> u64 {
        assert!(self.len <= 64, "Row of width {} does not fit in a u64", self.len);
        self.iter().fold(0, |acc, bit| (acc << 1) | bit as u64)
    }

    /// Returns an iterator over the bits, in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }
}

impl FromIterator<bool> for BitRow {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        let mut row = Self::zeros(bits.len());
        for (i, bit) in bits.into_iter().enumerate() {
            row.set(i, bit);
        }
        row
    }
}

impl fmt::Display for BitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let row = BitRow::zeros(100);
        assert_eq!(row.len(), 100);
        assert_eq!(row.count_ones(), 0);
        assert!(!row.get(99));
        assert!(BitRow::zeros(0).is_empty());
    }

    #[test]
    fn test_set_get() {
        let mut row = BitRow::zeros(70);
        row.set(3, true);
        row.set(64, true); // Second word
        assert!(row.get(3));
        assert!(row.get(64));
        assert!(!row.get(4));
        assert_eq!(row.count_ones(), 2);
        row.set(3, false);
        assert!(!row.get(3));
        assert_eq!(row.count_ones(), 1);
    }

    #[test]
    #[should_panic(expected = "Bit index 5 out of range for width 5")]
    fn test_get_out_of_range() {
        BitRow::zeros(5).get(5);
    }

    #[test]
    fn test_from_counter_msb_first() {
        let row = BitRow::from_counter(0b110, 3);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![true, true, false]);
        assert_eq!(row.to_string(), "110");

        let row = BitRow::from_counter(1, 4);
        assert_eq!(row.to_string(), "0001");
    }

    #[test]
    fn test_counter_round_trip() {
        for width in [0, 1, 3, 10] {
            for value in 0..(1u64 << width) {
                assert_eq!(BitRow::from_counter(value, width).to_counter(), value);
            }
        }
    }

    #[test]
    fn test_from_iter() {
        let row: BitRow = [true, false, true].into_iter().collect();
        assert_eq!(row.len(), 3);
        assert_eq!(row.to_string(), "101");
        assert_eq!(row, BitRow::from_counter(5, 3));
    }
}
