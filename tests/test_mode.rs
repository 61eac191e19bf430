use stochsearch::clustering::{compute_mode, Mode};

fn results() -> Vec<(Vec<f64>, f64)> {
    vec![
        (vec![0.0, 0.0], 1.0),
        (vec![0.001, 0.001], 2.0),
        (vec![5.0, 5.0], 3.0),
    ]
}

#[test]
fn test_nearby_solutions_form_the_mode() {
    let mode = compute_mode(&results(), 0.01).unwrap();

    assert_eq!(mode.count, 2);
    assert_eq!(mode.cost, 1.5);
    assert!((mode.solution[0] - 0.0005).abs() < 1e-12);
    assert!((mode.solution[1] - 0.0005).abs() < 1e-12);
}

#[test]
fn test_zero_tolerance_makes_singletons() {
    let mode = compute_mode(&results(), 0.0).unwrap();

    assert_eq!(
        mode,
        Mode {
            solution: vec![0.0, 0.0],
            cost: 1.0,
            count: 1,
        }
    );
}

#[test]
fn test_empty_collection_has_no_mode() {
    let empty: Vec<(Vec<f64>, f64)> = Vec::new();
    assert_eq!(compute_mode(&empty, 0.01), None);
}

#[test]
fn test_generation_counts_as_one_dimensional_solutions() {
    let generations = [120.0, 87.0, 120.0, 300.0, 120.0, 87.0];
    let results: Vec<(Vec<f64>, f64)> = generations.iter().map(|&g| (vec![g], 0.0)).collect();

    let mode = compute_mode(&results, 0.5).unwrap();

    assert_eq!(mode.solution, vec![120.0]);
    assert_eq!(mode.count, 3);
}
