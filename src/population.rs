//! # Population
//!
//! A population is an ordered list of scored [`Individual`]s. The generator
//! draws uniformly random genomes one after another and keeps them until both
//! the feasible and the infeasible quota of [`EvolutionOptions`] are met.
//!
//! Draws happen in batches sized to the slots still open. Batches at or above
//! the parallel threshold are scored on the rayon pool; acceptance always
//! follows draw order, so the outcome for a given seed does not depend on the
//! threshold.

use rayon::prelude::*;

use crate::{
    encoding::BitString,
    error::{GeneticError, Result},
    evolution::{options::EvolutionOptions, Challenge},
    rng::RandomNumberGenerator,
};

/// A scored candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub genome: BitString,
    pub objective_value: f64,
    pub violation_count: usize,
    pub cost: f64,
}

impl Individual {
    pub fn new(genome: BitString, objective_value: f64, violation_count: usize, cost: f64) -> Self {
        Self {
            genome,
            objective_value,
            violation_count,
            cost,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.violation_count == 0
    }
}

/// Builds a generation of `options.get_generation_size()` individuals containing
/// exactly `options.required_infeasible()` infeasible ones.
///
/// # Errors
///
/// - `Configuration` if the options are invalid.
/// - `QuotaUnsatisfied` if the attempt cap is reached first.
/// - Any error the challenge reports while scoring.
pub fn generate_population<C: Challenge>(
    challenge: &C,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Individual>> {
    options.validate()?;

    let required_infeasible = options.required_infeasible();
    let required_feasible = options.required_feasible();
    let max_attempts = options.get_max_generation_attempts();
    let genome_len = challenge.genome_len();

    let mut generation = Vec::with_capacity(options.get_generation_size());
    let mut feasible = 0;
    let mut infeasible = 0;
    let mut attempts = 0;

    while feasible < required_feasible || infeasible < required_infeasible {
        let open_slots = (required_feasible - feasible) + (required_infeasible - infeasible);
        let batch_size = match max_attempts {
            Some(cap) if attempts >= cap => {
                return Err(GeneticError::QuotaUnsatisfied {
                    feasible,
                    infeasible,
                    attempts,
                });
            }
            Some(cap) => open_slots.min(cap - attempts),
            None => open_slots,
        };

        let batch: Vec<BitString> = (0..batch_size).map(|_| rng.random_bits(genome_len)).collect();
        attempts += batch_size;

        for individual in score_batch(challenge, batch, options.get_parallel_threshold())? {
            if individual.is_feasible() {
                if feasible < required_feasible {
                    feasible += 1;
                    generation.push(individual);
                }
            } else if infeasible < required_infeasible {
                infeasible += 1;
                generation.push(individual);
            }

            if feasible == required_feasible && infeasible == required_infeasible {
                break;
            }
        }
    }

    tracing::debug!(
        feasible,
        infeasible,
        attempts,
        "Generation complete"
    );

    Ok(generation)
}

/// Scores genomes in order, in parallel when the batch is large enough.
pub(crate) fn score_batch<C: Challenge>(
    challenge: &C,
    batch: Vec<BitString>,
    parallel_threshold: usize,
) -> Result<Vec<Individual>> {
    if batch.len() >= parallel_threshold {
        batch
            .into_par_iter()
            .map(|genome| challenge.evaluate(genome))
            .collect()
    } else {
        batch
            .into_iter()
            .map(|genome| challenge.evaluate(genome))
            .collect()
    }
}

/// The member with the fewest violations, ties broken by highest cost and then
/// by first occurrence.
pub fn fittest(population: &[Individual]) -> Option<&Individual> {
    population.iter().fold(None, |best, candidate| match best {
        Some(current)
            if candidate.violation_count > current.violation_count
                || (candidate.violation_count == current.violation_count
                    && candidate.cost <= current.cost) =>
        {
            Some(current)
        }
        _ => Some(candidate),
    })
}
