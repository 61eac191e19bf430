//! Genetic operators shared by the genetic algorithm variants.

pub mod crossover;
pub mod mutation;

pub use crossover::{
    order_crossover, order_crossover_at, single_point_crossover, single_point_crossover_at,
};
pub use mutation::{bit_flip_mutation, swap_mutation};
