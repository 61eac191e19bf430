//! # Local Search Algorithms
//!
//! Single-point searches that move from one candidate to a nearby one.
//!
//! - [`HillClimbing`]: uniform steps within a fixed radius, strict improvements only,
//!   early stop after a patience threshold.
//! - [`LocalRandomSearch`]: Gaussian steps, strict improvements only, full budget.
//! - [`SimulatedAnnealing`]: discrete neighbors, probabilistic acceptance of worse
//!   moves under a geometric cooling schedule.
//!
//! The continuous searches minimize and start from the domain's lower-bound corner;
//! annealing maximizes and starts from a caller-supplied solution.

pub mod hill_climbing;
pub mod local_random_search;
pub mod simulated_annealing;

pub use hill_climbing::{HillClimbing, HillClimbingConfig, HillClimbingConfigBuilder};
pub use local_random_search::{
    LocalRandomSearch, LocalRandomSearchConfig, LocalRandomSearchConfigBuilder,
};
pub use simulated_annealing::{
    acceptance_probability, AnnealingConfig, AnnealingConfigBuilder, AnnealingState,
    SimulatedAnnealing,
};
