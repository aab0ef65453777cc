//! Shared and process-wide generators

use mt64_core_rs::rng::global;
use mt64_core_rs::{Mt64, SharedRng, DEFAULT_SEED};

// The only test in this binary that touches the global engine, so the
// first draw really is the first use.
#[test]
fn test_global_auto_seeds_then_reseeds() {
    let mut reference = Mt64::new(DEFAULT_SEED);
    assert_eq!(global::next(), reference.next());
    assert_eq!(global::next(), reference.next());

    global::seed(0);
    assert_eq!(global::next(), 2947667278772165694);

    let handle = global::handle();
    let mut after_seed = Mt64::new(0);
    after_seed.next();
    assert_eq!(handle.next(), after_seed.next());

    let drawn = global::with(|rng| rng.range(0, 10));
    assert!((0..10).contains(&drawn));
}

#[test]
fn test_shared_default_uses_default_seed() {
    let shared = SharedRng::default();
    assert_eq!(shared.next(), 14514284786278117030);
}

#[test]
fn test_shared_from_existing_engine_keeps_position() {
    let mut rng = Mt64::new(10);
    rng.next();
    let mut reference = rng.clone();

    let shared = SharedRng::from_rng(rng);
    assert_eq!(shared.next(), reference.next());
}

#[test]
fn test_independent_engines_per_worker() {
    let results: Vec<Vec<u64>> = (0..4u64)
        .map(|worker| {
            std::thread::spawn(move || {
                let mut rng = Mt64::new(1000 + worker);
                (0..100).map(|_| rng.next()).collect()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    for (worker, values) in results.iter().enumerate() {
        let mut reference = Mt64::new(1000 + worker as u64);
        let expected: Vec<u64> = (0..100).map(|_| reference.next()).collect();
        assert_eq!(values, &expected, "worker {} not reproducible", worker);
    }
}
