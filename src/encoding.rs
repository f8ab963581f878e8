//! # Solution Encoding
//!
//! A candidate is a flat genome of bits. How the genome maps onto knapsacks
//! depends on the [`EncodingMode`]:
//!
//! - [`EncodingMode::Tuple`]: the genome holds one row of `n` bits per knapsack,
//!   row `j` occupying bits `j * n .. (j + 1) * n`. An item may be set in at most
//!   one row.
//! - [`EncodingMode::Single`]: the genome is a single row of `n` bits which is
//!   checked against every knapsack's weight vector.
//!
//! ```rust
//! use mkga::encoding::BitString;
//!
//! let bits: BitString = "000010".parse().unwrap();
//! assert_eq!(bits.count_ones(), 1);
//! assert_eq!(bits.to_string(), "000010");
//! ```

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{GeneticError, Result};

/// How a genome is laid out across the knapsacks of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingMode {
    /// One row per knapsack, each item assigned to at most one row.
    #[default]
    Tuple,
    /// A single selection row checked against every knapsack.
    Single,
}

impl EncodingMode {
    /// Number of bits in a genome for the given instance dimensions.
    pub fn genome_len(&self, number_items: usize, number_knapsacks: usize) -> usize {
        match self {
            EncodingMode::Tuple => number_items * number_knapsacks,
            EncodingMode::Single => number_items,
        }
    }
}

/// An ordered sequence of bits. Bit `i` set means item `i` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitString(Vec<bool>);

impl BitString {
    /// A bit string of `len` unset bits.
    pub fn zeros(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.0
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&bit| bit).count()
    }

    /// Flips every bit in `[start, end)`. Panics if the range is out of bounds.
    pub(crate) fn flip_range(&mut self, start: usize, end: usize) {
        self.0[start..end].iter_mut().for_each(|bit| *bit = !*bit);
    }

    /// Splits the genome into `rows` consecutive rows of equal length.
    pub fn rows(&self, rows: usize) -> Result<Vec<BitString>> {
        if rows == 0 || self.0.len() % rows != 0 {
            return Err(GeneticError::InvalidInput(format!(
                "cannot split {} bits into {} equal rows",
                self.0.len(),
                rows
            )));
        }
        let width = self.0.len() / rows;
        if width == 0 {
            return Ok(vec![BitString::default(); rows]);
        }
        Ok(self
            .0
            .chunks(width)
            .map(|chunk| BitString(chunk.to_vec()))
            .collect())
    }

    /// Concatenates rows back into a single genome.
    pub fn concat(rows: &[BitString]) -> BitString {
        rows.iter().flat_map(|row| row.0.iter().copied()).collect()
    }
}

impl Deref for BitString {
    type Target = [bool];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for BitString {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(idx, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidInput(format!(
                    "unexpected character {:?} at position {} in bit string",
                    other, idx
                ))),
            })
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
