pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, KnapsackChallenge};
pub use launcher::{solve, Evolution, EvolutionLauncher, EvolutionResult, EvolutionState};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, PoolStrategy};
