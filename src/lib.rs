pub mod encoding;
pub mod error;
pub mod evolution;
pub mod feasibility;
pub mod instance;
pub mod operators;
pub mod population;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use encoding::{BitString, EncodingMode};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{solve, EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use instance::{Instance, Item, Knapsack};
