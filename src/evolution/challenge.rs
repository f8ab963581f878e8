use std::fmt::Debug;

use crate::{
    encoding::{BitString, EncodingMode},
    error::{ensure_same_len, Result},
    feasibility::{double_booked_items, is_feasible, overloaded_knapsacks},
    instance::Instance,
    population::Individual,
    scoring::{penalized_cost, value, violation_count},
};

/// Scores genomes for the evolution loop.
///
/// Implementations must be pure: the same genome always yields the same
/// scores, so evaluations can run on any thread in any order.
pub trait Challenge: Debug + Send + Sync {
    /// Number of bits in a genome.
    fn genome_len(&self) -> usize;

    /// Number of constraints a genome can violate.
    fn number_constraints(&self) -> usize;

    fn objective_value(&self, genome: &BitString) -> Result<f64>;

    fn violation_count(&self, genome: &BitString) -> Result<usize>;

    /// Splits a genome into one row per knapsack as seen by this challenge.
    fn decode(&self, genome: &BitString) -> Result<Vec<BitString>>;

    fn is_feasible(&self, genome: &BitString) -> Result<bool> {
        Ok(self.violation_count(genome)? == 0)
    }

    /// Scores a genome into an [`Individual`].
    fn evaluate(&self, genome: BitString) -> Result<Individual> {
        let violations = self.violation_count(&genome)?;
        let objective_value = self.objective_value(&genome)?;
        let cost = penalized_cost(objective_value, violations, self.number_constraints());
        Ok(Individual::new(genome, objective_value, violations, cost))
    }
}

/// The multi-knapsack challenge for a fixed instance and encoding.
///
/// In [`EncodingMode::Tuple`] a genome violates one constraint per overloaded
/// knapsack and one per item placed in more than one knapsack, out of
/// `knapsacks + items` constraints. In [`EncodingMode::Single`] it violates one
/// constraint per knapsack whose capacity the selection exceeds.
#[derive(Debug, Clone)]
pub struct KnapsackChallenge {
    instance: Instance,
    mode: EncodingMode,
}

impl KnapsackChallenge {
    pub fn new(instance: Instance, mode: EncodingMode) -> Self {
        Self { instance, mode }
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    fn checked_rows(&self, genome: &BitString) -> Result<Vec<BitString>> {
        ensure_same_len("Genome", genome.len(), self.genome_len())?;
        match self.mode {
            EncodingMode::Tuple => genome.rows(self.instance.number_knapsacks()),
            EncodingMode::Single => Ok(vec![genome.clone()]),
        }
    }
}

impl Challenge for KnapsackChallenge {
    fn genome_len(&self) -> usize {
        self.mode
            .genome_len(self.instance.number_items(), self.instance.number_knapsacks())
    }

    fn number_constraints(&self) -> usize {
        match self.mode {
            EncodingMode::Tuple => self.instance.number_knapsacks() + self.instance.number_items(),
            EncodingMode::Single => self.instance.number_knapsacks(),
        }
    }

    fn objective_value(&self, genome: &BitString) -> Result<f64> {
        let benefits = self.instance.benefits();
        self.checked_rows(genome)?
            .iter()
            .try_fold(0.0, |total, row| -> Result<f64> {
                Ok(total + value(row, benefits)?)
            })
    }

    fn violation_count(&self, genome: &BitString) -> Result<usize> {
        let weight_matrix = self.instance.weight_matrix();
        let capacities = self.instance.capacities();
        match self.mode {
            EncodingMode::Tuple => {
                let rows = self.checked_rows(genome)?;
                Ok(overloaded_knapsacks(&rows, weight_matrix, capacities)?
                    + double_booked_items(&rows))
            }
            EncodingMode::Single => {
                ensure_same_len("Genome", genome.len(), self.genome_len())?;
                violation_count(genome, weight_matrix, capacities)
            }
        }
    }

    fn decode(&self, genome: &BitString) -> Result<Vec<BitString>> {
        self.checked_rows(genome)
    }

    fn is_feasible(&self, genome: &BitString) -> Result<bool> {
        match self.mode {
            EncodingMode::Tuple => is_feasible(
                &self.checked_rows(genome)?,
                self.instance.weight_matrix(),
                self.instance.capacities(),
            ),
            EncodingMode::Single => Ok(self.violation_count(genome)? == 0),
        }
    }
}
