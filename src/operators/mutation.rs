//! # Mutation Operators

use crate::rng::RandomNumberGenerator;

/// With probability `probability`, swaps two distinct randomly chosen positions.
///
/// The probability applies once per individual, not per gene. Returns whether a swap
/// happened. Genomes shorter than two genes are never changed.
pub fn swap_mutation<T>(
    individual: &mut [T],
    probability: f64,
    rng: &mut RandomNumberGenerator,
) -> bool {
    if individual.len() < 2 || !rng.chance(probability) {
        return false;
    }

    let positions = rng.distinct_indices(individual.len(), 2);
    individual.swap(positions[0], positions[1]);
    true
}

/// Flips every bit independently with probability `probability`.
///
/// Returns the number of flipped bits.
pub fn bit_flip_mutation(
    bits: &mut [bool],
    probability: f64,
    rng: &mut RandomNumberGenerator,
) -> usize {
    let mut flipped = 0;
    for bit in bits.iter_mut() {
        if rng.chance(probability) {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}
