use std::collections::HashSet;

use super::{
    challenge::{Challenge, KnapsackChallenge},
    options::{EvolutionOptions, PoolStrategy},
};
use crate::{
    encoding::{BitString, EncodingMode},
    error::{GeneticError, OptionExt, Result},
    instance::Instance,
    population::{fittest, generate_population, Individual},
    rng::RandomNumberGenerator,
    selection::get_fitted_solutions,
    strategy::{BreedStrategy, OnePointStrategy},
};

/// The best solution of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// The flat genome of the incumbent.
    pub genome: BitString,
    /// The genome split into one row per knapsack (a single row in `Single` mode).
    pub rows: Vec<BitString>,
    pub objective_value: f64,
    pub cost: f64,
    pub violation_count: usize,
    /// Number of iterations that ran.
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    /// Population generated and incumbent chosen, no iteration run yet.
    Initialized,
    Iterating,
    /// Iteration budget exhausted.
    Terminated,
}

/// A single run of the evolution loop.
///
/// Parents are drawn uniformly from a pool holding half of the initial
/// population, itself drawn with probability proportional to cost. Children
/// whose genome already appears in the initial population are skipped; every
/// other child is scored and replaces the incumbent when it is better.
#[derive(Debug)]
pub struct Evolution<'a, C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    challenge: &'a C,
    strategy: &'a B,
    options: EvolutionOptions,
    population: Vec<Individual>,
    known_genomes: HashSet<BitString>,
    pool: Option<Vec<Individual>>,
    incumbent: Individual,
    iteration: usize,
    state: EvolutionState,
}

impl<'a, C, B> Evolution<'a, C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    /// Generates the initial population and picks the incumbent: the member
    /// with the fewest violations and then the highest cost, first one wins.
    ///
    /// # Errors
    ///
    /// Fails on invalid options or if the population cannot be generated.
    pub fn initialize(
        challenge: &'a C,
        strategy: &'a B,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let population = generate_population(challenge, options, rng)?;
        let incumbent = fittest(&population)
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let known_genomes = population.iter().map(|i| i.genome.clone()).collect();

        tracing::info!(
            population = population.len(),
            incumbent_cost = incumbent.cost,
            incumbent_violations = incumbent.violation_count,
            "Evolution initialized"
        );

        Ok(Self {
            challenge,
            strategy,
            options: options.clone(),
            population,
            known_genomes,
            pool: None,
            incumbent,
            iteration: 0,
            state: EvolutionState::Initialized,
        })
    }

    pub fn state(&self) -> EvolutionState {
        self.state
    }

    pub fn incumbent(&self) -> &Individual {
        &self.incumbent
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Number of iterations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Runs one iteration and returns the resulting state. Does nothing once terminated.
    pub fn step(&mut self, rng: &mut RandomNumberGenerator) -> Result<EvolutionState> {
        if self.state == EvolutionState::Terminated {
            return Ok(self.state);
        }
        self.state = EvolutionState::Iterating;

        if self.pool.is_none() || self.options.get_pool_strategy() == PoolStrategy::Resampled {
            self.pool = Some(self.draw_pool(rng)?);
        }
        let pool = self
            .pool
            .as_deref()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let parent1 = &pool[rng.gen_index(pool.len())].genome;
        let parent2 = &pool[rng.gen_index(pool.len())].genome;
        let (child1, child2) = self.strategy.breed(parent1, parent2, &self.options, rng)?;

        for child in [child1, child2] {
            if self.known_genomes.contains(&child) {
                continue;
            }
            let scored = self.challenge.evaluate(child)?;
            if improves(&scored, &self.incumbent) {
                tracing::info!(
                    iteration = self.iteration,
                    cost = scored.cost,
                    objective_value = scored.objective_value,
                    violations = scored.violation_count,
                    "New incumbent"
                );
                self.incumbent = scored;
            }
        }

        self.iteration += 1;
        tracing::trace!(iteration = self.iteration, "Iteration complete");

        if self.iteration >= self.options.get_iteration_budget() {
            self.state = EvolutionState::Terminated;
        }
        Ok(self.state)
    }

    /// Steps until the iteration budget is exhausted.
    pub fn run(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        while self.step(rng)? != EvolutionState::Terminated {}
        Ok(())
    }

    /// Consumes the run and returns its incumbent.
    pub fn into_result(self) -> Result<EvolutionResult> {
        let rows = self.challenge.decode(&self.incumbent.genome)?;
        Ok(EvolutionResult {
            genome: self.incumbent.genome,
            rows,
            objective_value: self.incumbent.objective_value,
            cost: self.incumbent.cost,
            violation_count: self.incumbent.violation_count,
            iterations: self.iteration,
        })
    }

    /// Draws half the population (at least one member) with probability
    /// proportional to cost. A population whose costs are all zero has no
    /// distribution to draw from, so its leading half is used instead.
    fn draw_pool(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Individual>> {
        let size = (self.population.len() / 2).max(1);
        if self.population.iter().all(|individual| individual.cost == 0.0) {
            tracing::warn!("All costs are zero, using the leading half of the population as parent pool");
            return Ok(self.population[..size].to_vec());
        }
        tracing::debug!(size, "Drawing parent pool");
        get_fitted_solutions(&self.population, size, rng)
    }
}

/// A feasible candidate beats an infeasible one; otherwise the higher cost wins strictly.
fn improves(candidate: &Individual, incumbent: &Individual) -> bool {
    match (candidate.is_feasible(), incumbent.is_feasible()) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.cost > incumbent.cost,
    }
}

/// Manages the evolution process using a specified breeding strategy and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    strategy: B,
    challenge: C,
}

impl<C, B> EvolutionLauncher<C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    pub fn new(strategy: B, challenge: C) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Runs the loop for `options.get_iteration_budget()` iterations and returns the incumbent.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The initial population cannot be generated within the attempt cap
    /// - Breeding or scoring reports malformed input
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let mut evolution = Evolution::initialize(&self.challenge, &self.strategy, options, rng)?;
        evolution.run(rng)?;
        let result = evolution.into_result()?;

        tracing::info!(
            iterations = result.iterations,
            cost = result.cost,
            objective_value = result.objective_value,
            violations = result.violation_count,
            "Evolution terminated"
        );

        Ok(result)
    }
}

/// Solves `instance` with one-point breeding, seeding the generator when `seed` is given.
pub fn solve(
    instance: Instance,
    mode: EncodingMode,
    options: &EvolutionOptions,
    seed: Option<u64>,
) -> Result<EvolutionResult> {
    let mut rng = match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };
    EvolutionLauncher::new(OnePointStrategy::new(), KnapsackChallenge::new(instance, mode))
        .evolve(options, &mut rng)
}
