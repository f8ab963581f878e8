//! # Feasibility
//!
//! Checks for solutions expressed as one row per knapsack. A solution is
//! feasible when no item is set in more than one row and every row fits its
//! knapsack. An empty solution is never feasible.

use crate::encoding::BitString;
use crate::error::{ensure_same_len, Result};
use crate::scoring::weight;

/// `true` when every item position is set in at most one row.
///
/// Returns `false` for an empty solution and fails if the rows differ in length.
pub fn unique_positional_assignment(rows: &[BitString]) -> Result<bool> {
    let Some(first) = rows.first() else {
        return Ok(false);
    };
    for row in rows {
        ensure_same_len("Knapsack rows", first.len(), row.len())?;
    }
    Ok(double_booked_items(rows) == 0)
}

/// `true` when row `j` weighs no more than `capacities[j]` for every knapsack.
///
/// Returns `false` for an empty solution.
pub fn within_capacity(rows: &[BitString], weight_matrix: &[Vec<f64>], capacities: &[f64]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    Ok(overloaded_knapsacks(rows, weight_matrix, capacities)? == 0)
}

/// `true` iff both [`unique_positional_assignment`] and [`within_capacity`] hold.
pub fn is_feasible(rows: &[BitString], weight_matrix: &[Vec<f64>], capacities: &[f64]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    Ok(unique_positional_assignment(rows)? && within_capacity(rows, weight_matrix, capacities)?)
}

/// Number of item positions set in more than one row.
pub(crate) fn double_booked_items(rows: &[BitString]) -> usize {
    let width = rows.first().map_or(0, |row| row.len());
    (0..width)
        .filter(|&i| rows.iter().filter(|row| row[i]).count() > 1)
        .count()
}

/// Number of rows whose weight exceeds their knapsack's capacity.
pub(crate) fn overloaded_knapsacks(
    rows: &[BitString],
    weight_matrix: &[Vec<f64>],
    capacities: &[f64],
) -> Result<usize> {
    ensure_same_len("Knapsack rows and capacity vector", rows.len(), capacities.len())?;
    ensure_same_len("Knapsack rows and weight matrix", rows.len(), weight_matrix.len())?;

    let mut overloaded = 0;
    for ((row, weights), &capacity) in rows.iter().zip(weight_matrix).zip(capacities) {
        if weight(row, weights)? > capacity {
            overloaded += 1;
        }
    }
    Ok(overloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&str]) -> Vec<BitString> {
        rows.iter().map(|r| r.parse().unwrap()).collect()
    }

    fn matrix() -> Vec<Vec<f64>> {
        vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]]
    }

    #[test]
    fn test_empty_solution_is_infeasible() {
        assert!(!unique_positional_assignment(&[]).unwrap());
        assert!(!within_capacity(&[], &matrix(), &[5.0, 5.0]).unwrap());
        assert!(!is_feasible(&[], &matrix(), &[5.0, 5.0]).unwrap());
    }

    #[test]
    fn test_shared_bit_is_infeasible() {
        let solution = rows(&["100", "100"]);
        assert!(!unique_positional_assignment(&solution).unwrap());
        assert!(!is_feasible(&solution, &matrix(), &[50.0, 50.0]).unwrap());
        assert_eq!(double_booked_items(&solution), 1);
    }

    #[test]
    fn test_disjoint_rows_within_capacity() {
        let solution = rows(&["101", "010"]);
        assert!(unique_positional_assignment(&solution).unwrap());
        assert!(within_capacity(&solution, &matrix(), &[4.0, 2.0]).unwrap());
        assert!(is_feasible(&solution, &matrix(), &[4.0, 2.0]).unwrap());
    }

    #[test]
    fn test_overloaded_row_is_infeasible() {
        let solution = rows(&["101", "010"]);
        assert!(!within_capacity(&solution, &matrix(), &[3.0, 2.0]).unwrap());
        assert_eq!(overloaded_knapsacks(&solution, &matrix(), &[3.0, 1.0]).unwrap(), 2);
    }

    #[test]
    fn test_malformed_rows_fail() {
        assert!(unique_positional_assignment(&rows(&["10", "101"])).is_err());
        assert!(within_capacity(&rows(&["101"]), &matrix(), &[4.0, 2.0]).is_err());
    }
}
