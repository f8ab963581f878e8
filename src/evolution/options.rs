//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a solver run:
//! generation size and quotas, iteration budget, mutation rate, how the parent
//! pool is drawn, and when candidate scoring moves onto the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use mkga::evolution::options::{EvolutionOptions, PoolStrategy};
//!
//! let options = EvolutionOptions::builder()
//!     .generation_size(40)
//!     .iteration_budget(500)
//!     .mutation_rate(0.2)
//!     .include_infeasible(true)
//!     .infeasible_fraction(0.1)
//!     .pool_strategy(PoolStrategy::Resampled)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! assert_eq!(options.required_infeasible(), 4);
//! ```

use crate::error::{GeneticError, Result};

/// How the parent pool is drawn from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolStrategy {
    /// The pool is sampled once before the loop and reused for every iteration.
    #[default]
    Static,
    /// The pool is sampled again at the start of every iteration.
    Resampled,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    generation_size: usize,
    iteration_budget: usize,
    mutation_rate: f64,
    include_infeasible: bool,
    infeasible_fraction: f64,
    /// Upper bound on random draws while filling a generation; `None` draws forever
    max_generation_attempts: Option<usize>,
    pool_strategy: PoolStrategy,
    /// Minimum number of candidates to score in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(generation_size: usize, iteration_budget: usize, mutation_rate: f64) -> Self {
        Self {
            generation_size,
            iteration_budget,
            mutation_rate,
            ..Self::default()
        }
    }

    pub fn get_generation_size(&self) -> usize {
        self.generation_size
    }

    pub fn get_iteration_budget(&self) -> usize {
        self.iteration_budget
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_include_infeasible(&self) -> bool {
        self.include_infeasible
    }

    pub fn get_infeasible_fraction(&self) -> f64 {
        self.infeasible_fraction
    }

    pub fn get_max_generation_attempts(&self) -> Option<usize> {
        self.max_generation_attempts
    }

    pub fn get_pool_strategy(&self) -> PoolStrategy {
        self.pool_strategy
    }

    /// Returns the minimum number of candidates to score in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Number of infeasible candidates a generation must contain:
    /// `floor(infeasible_fraction * generation_size)` when infeasible inclusion
    /// is enabled, otherwise 0.
    pub fn required_infeasible(&self) -> usize {
        if !self.include_infeasible {
            return 0;
        }
        let quota = (self.infeasible_fraction * self.generation_size as f64).floor() as usize;
        quota.min(self.generation_size)
    }

    /// Number of feasible candidates a generation must contain.
    pub fn required_feasible(&self) -> usize {
        self.generation_size - self.required_infeasible()
    }

    pub fn set_generation_size(&mut self, generation_size: usize) {
        self.generation_size = generation_size;
    }

    pub fn set_iteration_budget(&mut self, iteration_budget: usize) {
        self.iteration_budget = iteration_budget;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_include_infeasible(&mut self, include_infeasible: bool) {
        self.include_infeasible = include_infeasible;
    }

    pub fn set_infeasible_fraction(&mut self, infeasible_fraction: f64) {
        self.infeasible_fraction = infeasible_fraction;
    }

    pub fn set_max_generation_attempts(&mut self, attempts: Option<usize>) {
        self.max_generation_attempts = attempts;
    }

    pub fn set_pool_strategy(&mut self, pool_strategy: PoolStrategy) {
        self.pool_strategy = pool_strategy;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks every option and reports the first invalid one as a `Configuration` error.
    pub fn validate(&self) -> Result<()> {
        if self.generation_size == 0 {
            return Err(GeneticError::Configuration(
                "Generation size cannot be zero".to_string(),
            ));
        }
        if self.iteration_budget == 0 {
            return Err(GeneticError::Configuration(
                "Iteration budget cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.infeasible_fraction) {
            return Err(GeneticError::Configuration(format!(
                "Infeasible fraction must be within [0, 1], got {}",
                self.infeasible_fraction
            )));
        }
        if self.max_generation_attempts == Some(0) {
            return Err(GeneticError::Configuration(
                "Generation attempt cap cannot be zero".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(GeneticError::Configuration(
                "Parallel threshold cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            generation_size: 50,
            iteration_budget: 100,
            mutation_rate: 0.1,
            include_infeasible: false,
            infeasible_fraction: 0.05,
            max_generation_attempts: Some(1_000_000),
            pool_strategy: PoolStrategy::Static,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    generation_size: Option<usize>,
    iteration_budget: Option<usize>,
    mutation_rate: Option<f64>,
    include_infeasible: Option<bool>,
    infeasible_fraction: Option<f64>,
    max_generation_attempts: Option<Option<usize>>,
    pool_strategy: Option<PoolStrategy>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn generation_size(mut self, value: usize) -> Self {
        self.generation_size = Some(value);
        self
    }

    pub fn iteration_budget(mut self, value: usize) -> Self {
        self.iteration_budget = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn include_infeasible(mut self, value: bool) -> Self {
        self.include_infeasible = Some(value);
        self
    }

    pub fn infeasible_fraction(mut self, value: f64) -> Self {
        self.infeasible_fraction = Some(value);
        self
    }

    /// Caps the number of draws while filling a generation. `None` removes the cap.
    pub fn max_generation_attempts(mut self, value: Option<usize>) -> Self {
        self.max_generation_attempts = Some(value);
        self
    }

    pub fn pool_strategy(mut self, value: PoolStrategy) -> Self {
        self.pool_strategy = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            generation_size: self.generation_size.unwrap_or(defaults.generation_size),
            iteration_budget: self.iteration_budget.unwrap_or(defaults.iteration_budget),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            include_infeasible: self.include_infeasible.unwrap_or(defaults.include_infeasible),
            infeasible_fraction: self.infeasible_fraction.unwrap_or(defaults.infeasible_fraction),
            max_generation_attempts: self
                .max_generation_attempts
                .unwrap_or(defaults.max_generation_attempts),
            pool_strategy: self.pool_strategy.unwrap_or(defaults.pool_strategy),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
        }
    }
}
