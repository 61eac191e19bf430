//! # Progress Observers
//!
//! Engines report progress through a [`SearchObserver`] instead of drawing or printing
//! anything themselves. Plotting and tabular export live outside the crate and plug in
//! here.

use crate::evolution::GenerationStats;

/// Receives progress notifications from a running search.
///
/// All methods have empty default implementations, so observers only override the
/// notifications they care about.
pub trait SearchObserver {
    /// Called after every iteration of a single-point search with the best cost so far.
    ///
    /// For simulated annealing the value is the best objective so far under
    /// maximization.
    fn on_iteration(&mut self, _iteration: usize, _best: f64) {}

    /// Called once per generation of a genetic algorithm.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// An observer that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct HistoryRecorder {
    /// Best value after each iteration, in order.
    pub iterations: Vec<f64>,
    /// Statistics of each generation, in order.
    pub generations: Vec<GenerationStats>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for HistoryRecorder {
    fn on_iteration(&mut self, _iteration: usize, best: f64) {
        self.iterations.push(best);
    }

    fn on_generation(&mut self, stats: &GenerationStats) {
        self.generations.push(stats.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_recorder_keeps_order() {
        let mut recorder = HistoryRecorder::new();
        recorder.on_iteration(0, 3.0);
        recorder.on_iteration(1, 2.0);
        recorder.on_generation(&GenerationStats {
            generation: 0,
            best: 1.0,
            average: 2.0,
            worst: 3.0,
        });

        assert_eq!(recorder.iterations, vec![3.0, 2.0]);
        assert_eq!(recorder.generations.len(), 1);
        assert_eq!(recorder.generations[0].worst, 3.0);
    }

    #[test]
    fn test_noop_observer_accepts_everything() {
        let mut observer = NoopObserver;
        observer.on_iteration(0, 1.0);
        observer.on_generation(&GenerationStats::default());
    }
}
