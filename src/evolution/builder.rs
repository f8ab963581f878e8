use crate::{
    error::{GeneticError, Result},
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

pub struct EvolutionLauncherBuilder<C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    breed_strategy: Option<B>,
    challenge: Option<C>,
}

impl<C, B> EvolutionLauncherBuilder<C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<C, B>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<C, B> Default for EvolutionLauncherBuilder<C, B>
where
    C: Challenge,
    B: BreedStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}
