//! # OnePointStrategy
//!
//! One-point crossover at a uniformly random cut in `[0, L)`, followed by a
//! segment flip on each child with probability `mutation_rate`.
use super::BreedStrategy;
use crate::{
    encoding::BitString,
    error::Result,
    evolution::options::EvolutionOptions,
    operators::{cross_parenting, mutate},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct OnePointStrategy;

impl OnePointStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Flips a uniformly random sub-range `[start, end)` of `child`.
    fn mutate_segment(&self, child: BitString, rng: &mut RandomNumberGenerator) -> BitString {
        let len = child.len();
        let a = rng.gen_index(len + 1);
        let b = rng.gen_index(len + 1);
        mutate(&child, a.min(b), a.max(b))
    }
}

impl BreedStrategy for OnePointStrategy {
    fn breed(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(BitString, BitString)> {
        let k = rng.gen_index(parent1.len());
        let (mut child1, mut child2) = cross_parenting(parent1, parent2, k)?;

        if rng.gen_bool(evol_options.get_mutation_rate()) {
            child1 = self.mutate_segment(child1, rng);
        }
        if rng.gen_bool(evol_options.get_mutation_rate()) {
            child2 = self.mutate_segment(child2, rng);
        }

        Ok((child1, child2))
    }
}
