pub mod roulette;

pub use roulette::{get_fitted_solutions, RouletteWheelSelection};
