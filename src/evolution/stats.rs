/// Cost statistics of one generation.
///
/// All values are costs, lower is better: tour lengths for the permutation variant
/// and raw objective values for the binary variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: f64,
    pub average: f64,
    pub worst: f64,
}

impl GenerationStats {
    /// Summarizes the costs of one generation. Returns `None` for an empty slice.
    pub fn from_costs(generation: usize, costs: &[f64]) -> Option<Self> {
        if costs.is_empty() {
            return None;
        }

        let best = costs.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = costs.iter().sum::<f64>() / costs.len() as f64;

        Some(Self {
            generation,
            best,
            average,
            worst,
        })
    }
}
