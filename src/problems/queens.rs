//! # Eight Queens
//!
//! A board holds one queen per column; entry `i` is the row (1 to 8) of the queen in
//! column `i`. The objective counts the non-attacking pairs, `28 - h(x)`, and is
//! maximized: 28 means no queen attacks another.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{ensure_non_zero, Result};
use crate::local_search::{AnnealingConfig, SimulatedAnnealing};
use crate::objective::DiscreteObjective;
use crate::rng::RandomNumberGenerator;

/// Board size.
pub const QUEENS: usize = 8;

/// Number of queen pairs on the board, the best possible objective value.
pub const MAX_NON_ATTACKING: f64 = 28.0;

/// Number of distinct solutions of the eight queens puzzle.
pub const SOLUTION_COUNT: usize = 92;

/// Counts the pairs of queens that share a row or a diagonal.
pub fn attacking_pairs(board: &[u8]) -> usize {
    let mut pairs = 0;
    for i in 0..board.len() {
        for j in (i + 1)..board.len() {
            let rows_apart = board[i].abs_diff(board[j]) as usize;
            if rows_apart == 0 || rows_apart == j - i {
                pairs += 1;
            }
        }
    }
    pairs
}

/// The objective `28 - attacking_pairs(board)`.
pub fn non_attacking_pairs(board: &[u8]) -> f64 {
    MAX_NON_ATTACKING - attacking_pairs(board) as f64
}

pub fn is_solution(board: &[u8]) -> bool {
    attacking_pairs(board) == 0
}

/// A board with every queen on a uniformly random row.
pub fn random_board(rng: &mut RandomNumberGenerator) -> Vec<u8> {
    (0..QUEENS).map(|_| 1 + rng.index(QUEENS) as u8).collect()
}

/// Moves the queen of one random column one row up or down, staying on the board.
pub fn neighbor(board: &[u8], rng: &mut RandomNumberGenerator) -> Vec<u8> {
    let mut next = board.to_vec();
    if next.is_empty() {
        return next;
    }

    let column = rng.index(next.len());
    let row = if rng.chance(0.5) {
        next[column].saturating_add(1)
    } else {
        next[column].saturating_sub(1)
    };
    next[column] = row.clamp(1, QUEENS as u8);

    next
}

/// The objective as a [`DiscreteObjective`] over boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAttackingPairs;

impl DiscreteObjective<Vec<u8>> for NonAttackingPairs {
    fn score(&self, board: &Vec<u8>) -> f64 {
        non_attacking_pairs(board)
    }
}

pub type BoardNeighbor = fn(&Vec<u8>, &mut RandomNumberGenerator) -> Vec<u8>;

pub type QueensAnnealer = SimulatedAnnealing<Vec<u8>, NonAttackingPairs, BoardNeighbor>;

fn board_neighbor(board: &Vec<u8>, rng: &mut RandomNumberGenerator) -> Vec<u8> {
    neighbor(board, rng)
}

/// Simulated annealing on the eight queens board that stops once a solution is found.
pub fn annealer(config: AnnealingConfig) -> Result<QueensAnnealer> {
    let engine = SimulatedAnnealing::new(
        NonAttackingPairs,
        board_neighbor as BoardNeighbor,
        config,
    )?;
    Ok(engine.with_target(MAX_NON_ATTACKING))
}

/// Runs the annealer from random boards until `wanted` distinct solutions are found
/// or `max_attempts` runs have been made.
pub fn find_distinct_solutions(
    engine: &QueensAnnealer,
    wanted: usize,
    max_attempts: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<BTreeSet<Vec<u8>>> {
    ensure_non_zero(max_attempts, "Maximum attempts")?;

    let mut found = BTreeSet::new();
    let mut attempts = 0;

    while found.len() < wanted && attempts < max_attempts {
        attempts += 1;
        let start = random_board(rng);
        let result = engine.search_from(start, rng)?;

        if is_solution(&result.solution) {
            found.insert(result.solution);
        }
    }

    debug!(found = found.len(), attempts, "Finished collecting queens solutions");

    Ok(found)
}

/// Collects distinct solutions until all [`SOLUTION_COUNT`] are known or `max_attempts`
/// runs have been made.
pub fn find_all_solutions(
    engine: &QueensAnnealer,
    max_attempts: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<BTreeSet<Vec<u8>>> {
    find_distinct_solutions(engine, SOLUTION_COUNT, max_attempts, rng)
}
