use stochsearch::{
    clustering::compute_mode_of_runs,
    domain::Domain,
    error::Result,
    global_search::{GlobalRandomSearch, GlobalRandomSearchConfig},
    local_search::{
        HillClimbing, HillClimbingConfig, LocalRandomSearch, LocalRandomSearchConfig,
    },
    objective::Maximize,
    observer::HistoryRecorder,
    problems::continuous::{ACKLEY, RASTRIGIN},
    repeat::{repeat_search, CostSummary},
    rng::RandomNumberGenerator,
    search::SearchEngine,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn shifted_sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| (v - 1.0).powi(2)).sum()
}

fn assert_non_increasing(history: &[f64]) {
    for pair in history.windows(2) {
        assert!(pair[1] <= pair[0], "best cost increased: {:?}", pair);
    }
}

#[test]
fn test_hill_climbing_descends_sphere() -> Result<()> {
    init_tracing();

    let domain = Domain::uniform(2, -5.0, 5.0)?;
    let config = HillClimbingConfig::builder().max_iterations(5000).build();
    let engine = HillClimbing::new(sphere, domain.clone(), config)?;

    let mut recorder = HistoryRecorder::new();
    let result = engine.search_observed(&mut RandomNumberGenerator::from_seed(1), &mut recorder)?;

    assert!(domain.contains(&result.solution));
    assert!(result.cost < 0.5);
    assert_eq!(recorder.iterations.len(), result.iterations);
    assert_non_increasing(&recorder.iterations);

    Ok(())
}

#[test]
fn test_local_random_search_descends_sphere() -> Result<()> {
    init_tracing();

    let domain = Domain::uniform(2, -5.0, 5.0)?;
    let engine = LocalRandomSearch::new(sphere, domain, LocalRandomSearchConfig::default())?;

    let mut recorder = HistoryRecorder::new();
    let result = engine.search_observed(&mut RandomNumberGenerator::from_seed(2), &mut recorder)?;

    assert_eq!(result.iterations, 1000);
    assert_eq!(recorder.iterations.len(), 1000);
    assert_non_increasing(&recorder.iterations);
    assert!(result.cost < 0.1);

    Ok(())
}

#[test]
fn test_global_random_search_finds_basin() -> Result<()> {
    let domain = Domain::uniform(2, -2.0, 2.0)?;
    let engine = GlobalRandomSearch::new(sphere, domain, GlobalRandomSearchConfig::new(5000))?;

    let mut recorder = HistoryRecorder::new();
    let result = engine.search_observed(&mut RandomNumberGenerator::from_seed(3), &mut recorder)?;

    assert!(result.cost < 0.05);
    assert_non_increasing(&recorder.iterations);

    Ok(())
}

#[test]
fn test_global_search_on_multimodal_problems() -> Result<()> {
    for problem in [ACKLEY, RASTRIGIN] {
        let engine = GlobalRandomSearch::new(
            problem,
            problem.domain()?,
            GlobalRandomSearchConfig::new(20_000),
        )?;
        let result = engine.search(&mut RandomNumberGenerator::from_seed(4))?;

        // Well below the value at the lower-bound corner
        let corner = problem.value(&problem.domain()?.lower_bounds());
        assert!(result.cost < corner / 2.0, "{} stuck at {}", problem.name, result.cost);
    }

    Ok(())
}

#[test]
fn test_maximize_wrapper() -> Result<()> {
    let bump = |x: &[f64]| -(x[0] - 1.0).powi(2) + 3.0;
    let domain = Domain::uniform(1, -3.0, 3.0)?;
    let config = LocalRandomSearchConfig::builder().sigma(0.2).build();
    let engine = LocalRandomSearch::new(Maximize(bump), domain, config)?;

    let result = engine.search(&mut RandomNumberGenerator::from_seed(5))?;

    assert!((result.solution[0] - 1.0).abs() < 0.1);
    assert!((-result.cost - 3.0).abs() < 0.01);

    Ok(())
}

#[test]
fn test_repeated_runs_and_mode() -> Result<()> {
    let domain = Domain::uniform(2, -3.0, 3.0)?;
    let config = HillClimbingConfig::builder().max_iterations(5000).build();
    let engine = HillClimbing::new(shifted_sphere, domain, config)?;

    let runs = repeat_search(&engine, 20, Some(10))?;
    assert_eq!(runs.len(), 20);

    let summary = CostSummary::from_results(&runs).expect("non-empty runs");
    assert!(summary.best <= summary.worst);
    assert!(summary.worst < 0.5);

    let mode = compute_mode_of_runs(&runs, 1.0).expect("non-empty runs");
    assert!(mode.count >= 10);
    assert!(mode.solution.iter().all(|v| (v - 1.0).abs() < 0.5));

    // Seeded batches are reproducible
    let again = repeat_search(&engine, 20, Some(10))?;
    assert_eq!(runs, again);

    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serialization() {
    let config = HillClimbingConfig::builder().epsilon(0.25).patience(7).build();
    let json = serde_json::to_string(&config).unwrap();
    let back: HillClimbingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
