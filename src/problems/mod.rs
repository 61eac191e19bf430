//! Benchmark problems: continuous test functions, the eight queens puzzle and the
//! travelling salesman.

pub mod continuous;
pub mod queens;
pub mod tsp;
