use crate::error::{GeneticError, Result};
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;

/// Fitness proportionate selection without replacement.
///
/// Each draw picks one of the remaining individuals with probability
/// `cost / sum(remaining costs)` and removes it from the wheel. Costs must be
/// finite, non-negative and not all zero. Once only zero-cost individuals are
/// left, the remaining draws are uniform among them.
///
/// # Examples
///
/// ```
/// use mkga::encoding::BitString;
/// use mkga::population::Individual;
/// use mkga::rng::RandomNumberGenerator;
/// use mkga::selection::RouletteWheelSelection;
///
/// let population: Vec<Individual> = [1.0, 5.0, 2.0, 8.0]
///     .iter()
///     .map(|&cost| Individual::new(BitString::zeros(3), cost, 0, cost))
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let selected = RouletteWheelSelection::new()
///     .select(&population, 2, &mut rng)
///     .unwrap();
/// assert_eq!(selected.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Checks the costs and returns them as selection weights.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeights` if any cost is negative or not finite, or if all are zero.
    fn weights(&self, population: &[Individual]) -> Result<Vec<f64>> {
        if let Some(bad) = population
            .iter()
            .find(|individual| !individual.cost.is_finite() || individual.cost < 0.0)
        {
            return Err(GeneticError::InvalidWeights(format!(
                "Roulette wheel selection requires non-negative finite costs, got {}",
                bad.cost
            )));
        }

        let weights: Vec<f64> = population.iter().map(|individual| individual.cost).collect();
        if weights.iter().sum::<f64>() == 0.0 {
            return Err(GeneticError::InvalidWeights(
                "Roulette wheel selection requires at least one individual with non-zero cost"
                    .to_string(),
            ));
        }
        Ok(weights)
    }

    /// Spins the wheel once over `remaining` and returns a position into it.
    fn spin(&self, remaining: &[(usize, f64)], rng: &mut RandomNumberGenerator) -> usize {
        let total: f64 = remaining.iter().map(|&(_, w)| w).sum();
        if total <= 0.0 {
            return rng.gen_index(remaining.len());
        }

        let r = rng.gen_unit() * total;
        let mut cumulative = 0.0;
        for (pos, &(_, weight)) in remaining.iter().enumerate() {
            cumulative += weight;
            if r < cumulative {
                return pos;
            }
        }

        // Floating-point rounding: fall back to the last slot with weight
        remaining
            .iter()
            .rposition(|&(_, w)| w > 0.0)
            .unwrap_or(remaining.len() - 1)
    }

    /// Draws `num_to_select` distinct individuals.
    ///
    /// # Errors
    ///
    /// - `EmptyPopulation` if `population` is empty.
    /// - `InvalidInput` if more individuals are requested than exist.
    /// - `InvalidWeights` if the costs do not form a distribution.
    pub fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if num_to_select > population.len() {
            return Err(GeneticError::InvalidInput(format!(
                "Cannot draw {} individuals without replacement from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        let mut remaining: Vec<(usize, f64)> =
            self.weights(population)?.into_iter().enumerate().collect();

        let mut selected = Vec::with_capacity(num_to_select);
        while selected.len() < num_to_select {
            let pos = self.spin(&remaining, rng);
            let (idx, _) = remaining.remove(pos);
            selected.push(population[idx].clone());
        }

        Ok(selected)
    }
}

/// Draws `sample_size` distinct individuals with probability proportional to cost.
pub fn get_fitted_solutions(
    population: &[Individual],
    sample_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Individual>> {
    RouletteWheelSelection::new().select(population, sample_size, rng)
}
