//! # Genetic Operators
//!
//! One-point crossover and segment bit-flip mutation on bit strings.
//! Out-of-range cut points and mutation ranges leave the input untouched.
//!
//! ```rust
//! use mkga::encoding::BitString;
//! use mkga::operators::{cross_parenting, mutate};
//!
//! let p1: BitString = "1111".parse().unwrap();
//! let p2: BitString = "0000".parse().unwrap();
//!
//! let (c1, c2) = cross_parenting(&p1, &p2, 1).unwrap();
//! assert_eq!(c1.to_string(), "1000");
//! assert_eq!(c2.to_string(), "0111");
//!
//! assert_eq!(mutate(&p2, 1, 3).to_string(), "0110");
//! ```

use crate::encoding::BitString;
use crate::error::{ensure_same_len, Result};

/// Recombines two parents of equal length at cut point `k`.
///
/// Returns `(p1[..k] + p2[k..], p2[..k] + p1[k..])`. When `k` exceeds the
/// parent length the parents are returned unchanged. Parents of different
/// lengths are rejected.
pub fn cross_parenting(parent1: &[bool], parent2: &[bool], k: usize) -> Result<(BitString, BitString)> {
    ensure_same_len("Crossover parents", parent1.len(), parent2.len())?;

    if k > parent1.len() {
        return Ok((BitString::from(parent1.to_vec()), BitString::from(parent2.to_vec())));
    }

    let child1: BitString = parent1[..k].iter().chain(&parent2[k..]).copied().collect();
    let child2: BitString = parent2[..k].iter().chain(&parent1[k..]).copied().collect();
    Ok((child1, child2))
}

/// Flips every bit in `[start, end)`.
///
/// Empty input, `end < start` and `end > bits.len()` all return the input unchanged.
pub fn mutate(bits: &[bool], start: usize, end: usize) -> BitString {
    let mut result = BitString::from(bits.to_vec());
    if bits.is_empty() || end < start || end > bits.len() {
        return result;
    }
    result.flip_range(start, end);
    result
}
