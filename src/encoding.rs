//! # Bit-String Encoding
//!
//! The binary genetic algorithm represents a real vector as one bit-string split into
//! equal-length genes, one gene per decision variable. A gene of `n` bits is read most
//! significant bit first into an integer `k` in `[0, 2^n - 1]` and mapped linearly onto
//! the variable's bounds:
//!
//! ```text
//! value = lower + (upper - lower) / (2^n - 1) * k
//! ```
//!
//! With [`Encoding::Gray`] the gene is first converted from reflected Gray code to plain
//! binary, so neighbouring integers differ in a single bit.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::encoding::{decode_gene, Encoding};
//!
//! assert_eq!(decode_gene(&[false; 8], -5.0, 5.0, Encoding::Binary), -5.0);
//! assert_eq!(decode_gene(&[true; 8], -5.0, 5.0, Encoding::Binary), 5.0);
//! assert_eq!(decode_gene(&[false; 8], -5.0, 5.0, Encoding::Gray), -5.0);
//! ```

use crate::domain::Domain;
use crate::error::{Result, SearchError};

/// Longest supported gene.
pub const MAX_BITS_PER_VARIABLE: usize = 52;

/// How the bits of a gene map to an integer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Plain positional binary.
    #[default]
    Binary,
    /// Reflected binary Gray code.
    Gray,
}

/// Reads a gene into its integer value, most significant bit first.
pub fn gene_to_integer(bits: &[bool], encoding: Encoding) -> u64 {
    let mut value = 0u64;
    let mut previous = false;

    for &bit in bits {
        let plain = match encoding {
            Encoding::Binary => bit,
            Encoding::Gray => previous ^ bit,
        };
        previous = plain;
        value = (value << 1) | u64::from(plain);
    }

    value
}

/// Writes `value` as an `nbits` gene, most significant bit first.
pub fn integer_to_gene(value: u64, nbits: usize, encoding: Encoding) -> Vec<bool> {
    let coded = match encoding {
        Encoding::Binary => value,
        Encoding::Gray => value ^ (value >> 1),
    };

    (0..nbits).rev().map(|shift| (coded >> shift) & 1 == 1).collect()
}

fn max_integer(nbits: usize) -> u64 {
    if nbits >= 64 {
        u64::MAX
    } else {
        (1u64 << nbits) - 1
    }
}

/// Decodes one gene onto `[lower, upper]`.
///
/// The all-zero gene yields exactly `lower`; the gene of the largest integer yields
/// exactly `upper`. An empty gene decodes to `lower`.
pub fn decode_gene(bits: &[bool], lower: f64, upper: f64, encoding: Encoding) -> f64 {
    let max = max_integer(bits.len());
    if max == 0 {
        return lower;
    }

    let t = gene_to_integer(bits, encoding) as f64 / max as f64;
    lower * (1.0 - t) + upper * t
}

/// Encodes `value` as the nearest `nbits` gene on `[lower, upper]`.
///
/// Values outside the bounds are clamped.
pub fn encode_gene(value: f64, lower: f64, upper: f64, nbits: usize, encoding: Encoding) -> Vec<bool> {
    let max = max_integer(nbits);
    let span = upper - lower;

    let k = if span > 0.0 {
        let t = ((value - lower) / span).clamp(0.0, 1.0);
        (t * max as f64).round() as u64
    } else {
        0
    };

    integer_to_gene(k.min(max), nbits, encoding)
}

/// Decodes a whole chromosome into one real value per domain dimension.
///
/// # Errors
///
/// Returns an error if the chromosome length is not `domain.dim() * bits_per_variable`.
pub fn decode(
    bits: &[bool],
    domain: &Domain,
    bits_per_variable: usize,
    encoding: Encoding,
) -> Result<Vec<f64>> {
    let expected = domain.dim() * bits_per_variable;
    if bits_per_variable == 0 || bits.len() != expected {
        return Err(SearchError::Configuration(format!(
            "Chromosome of {} bits cannot be split into {} genes of {} bits",
            bits.len(),
            domain.dim(),
            bits_per_variable
        )));
    }

    Ok(bits
        .chunks(bits_per_variable)
        .zip(domain.bounds())
        .map(|(gene, &(lower, upper))| decode_gene(gene, lower, upper, encoding))
        .collect())
}

/// Encodes a real vector into a chromosome; the inverse of [`decode`] up to quantization.
///
/// # Errors
///
/// Returns an error if `x` does not have one value per domain dimension.
pub fn encode(
    x: &[f64],
    domain: &Domain,
    bits_per_variable: usize,
    encoding: Encoding,
) -> Result<Vec<bool>> {
    if x.len() != domain.dim() {
        return Err(SearchError::Configuration(format!(
            "Expected {} values, got {}",
            domain.dim(),
            x.len()
        )));
    }

    Ok(x.iter()
        .zip(domain.bounds())
        .flat_map(|(&v, &(lower, upper))| encode_gene(v, lower, upper, bits_per_variable, encoding))
        .collect())
}
