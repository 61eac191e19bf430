//! # stochsearch
//!
//! Stochastic optimizers for continuous box-constrained functions and discrete
//! combinatorial problems: hill climbing, local and global random search, simulated
//! annealing, and genetic algorithms over permutations and bit-strings. Repeated runs
//! can be dispatched in parallel and summarized by the mode of their solutions.
//!
//! Sign conventions differ per engine: the continuous engines and the binary genetic
//! algorithm minimize, simulated annealing maximizes, and the permutation genetic
//! algorithm minimizes tour cost by maximizing its reciprocal.

pub mod clustering;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod evolution;
pub mod global_search;
pub mod local_search;
pub mod objective;
pub mod observer;
pub mod operators;
pub mod problems;
pub mod repeat;
pub mod rng;
pub mod search;
pub mod selection;

// Re-export commonly used types for convenience
pub use clustering::{compute_mode, Mode};
pub use domain::Domain;
pub use error::{OptionExt, Result, SearchError};
pub use evolution::{BinaryGa, BinaryGaOptions, LogLevel, PermutationGa, PermutationGaOptions};
pub use global_search::{GlobalRandomSearch, GlobalRandomSearchConfig};
pub use local_search::{
    AnnealingConfig, HillClimbing, HillClimbingConfig, LocalRandomSearch,
    LocalRandomSearchConfig, SimulatedAnnealing,
};
pub use objective::{ContinuousObjective, DiscreteObjective, Maximize};
pub use rng::RandomNumberGenerator;
pub use search::{RunResult, SearchEngine};
