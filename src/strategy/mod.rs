//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! a pair of children from a pair of parent genomes.
pub mod one_point;

use std::fmt::Debug;

use crate::{
    encoding::BitString, error::Result, evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces two children from two parents of equal length. Implementations decide
/// how the parents are recombined and how the children are mutated, using
/// `evol_options` for rates and `rng` for every random draw.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// ## Errors
    ///
    /// This method can fail if the parents differ in length.
    fn breed(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(BitString, BitString)>;
}

pub use one_point::OnePointStrategy;
