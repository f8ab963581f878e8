//! # Scoring
//!
//! Pure functions computing benefit, weight and constraint violations of a bit
//! string, and the scalar cost that blends objective value and penalty.
//!
//! ```rust
//! use mkga::encoding::BitString;
//! use mkga::scoring::{value, violation_count, weight};
//!
//! let benefits = [100.0, 600.0, 1200.0, 2400.0, 500.0, 2000.0];
//! let weights = vec![vec![8.0, 12.0, 13.0, 64.0, 22.0, 41.0]];
//! let bits: BitString = "000010".parse().unwrap();
//!
//! assert_eq!(value(&bits, &benefits).unwrap(), 500.0);
//! assert_eq!(weight(&bits, &weights[0]).unwrap(), 22.0);
//! assert_eq!(violation_count(&bits, &weights, &[80.0]).unwrap(), 0);
//! ```

use crate::error::{ensure_same_len, Result};

/// Sum of `benefits[i]` over every set bit `i`.
pub fn value(bits: &[bool], benefits: &[f64]) -> Result<f64> {
    ensure_same_len("Bit string and benefit vector", bits.len(), benefits.len())?;
    Ok(attribute_sum(bits, benefits))
}

/// Sum of `weights[i]` over every set bit `i`, for a single knapsack's weight vector.
pub fn weight(bits: &[bool], weights: &[f64]) -> Result<f64> {
    ensure_same_len("Bit string and weight vector", bits.len(), weights.len())?;
    Ok(attribute_sum(bits, weights))
}

/// Number of knapsacks whose capacity is exceeded when `bits` is packed into
/// each of them. Zero means feasible.
pub fn violation_count(bits: &[bool], weight_matrix: &[Vec<f64>], capacities: &[f64]) -> Result<usize> {
    ensure_same_len(
        "Weight matrix rows and capacity vector",
        weight_matrix.len(),
        capacities.len(),
    )?;

    let mut violations = 0;
    for (weights, &capacity) in weight_matrix.iter().zip(capacities) {
        if weight(bits, weights)? > capacity {
            violations += 1;
        }
    }
    Ok(violations)
}

/// Cost of `bits`: its objective value scaled down by the violation penalty.
///
/// See [`penalized_cost`] for the penalty.
pub fn cost(
    bits: &[bool],
    benefits: &[f64],
    violation_count: usize,
    number_constraints: usize,
) -> Result<f64> {
    Ok(penalized_cost(value(bits, benefits)?, violation_count, number_constraints))
}

/// Blends an objective value with an exponential violation penalty:
///
/// `cost = value * exp(-v / (m - v))` for `v < m`
///
/// The factor is 1 for a feasible candidate and falls towards 0 as `v`
/// approaches `m`. When every constraint is violated (`v >= m`) the ratio
/// is undefined and the cost is pinned to `0.0`, the limit of the formula,
/// which marks the candidate as maximally infeasible.
pub fn penalized_cost(value: f64, violation_count: usize, number_constraints: usize) -> f64 {
    if violation_count >= number_constraints {
        return 0.0;
    }
    if violation_count == 0 {
        return value;
    }
    let v = violation_count as f64;
    let m = number_constraints as f64;
    value * (-v / (m - v)).exp()
}

fn attribute_sum(bits: &[bool], attribute: &[f64]) -> f64 {
    bits.iter()
        .zip(attribute)
        .filter(|&(&bit, _)| bit)
        .map(|(_, &a)| a)
        .sum()
}
