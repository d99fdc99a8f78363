#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use quadtree_index::{Coordinate, Rect};

//// Utility functions

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Rectangles with random position inside `area` and random size in
/// `[min_size, max_size)`; they may stick out past `area`'s far edges.
pub fn get_random_rects(area: Rect, n: usize, min_size: f64, max_size: f64, seed: u64) -> Vec<Rect> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let max = area.max();
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rect::new(
            Coordinate::new(rng.gen_range(area.pos.x, max.x), rng.gen_range(area.pos.y, max.y)),
            Coordinate::new(
                rng.gen_range(min_size, max_size),
                rng.gen_range(min_size, max_size),
            ),
        ));
    }

    results
}

/// Query rectangles spanning two random corners anywhere in `area`.
pub fn get_random_queries(area: Rect, n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let max = area.max();
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rect::from_corners(
            Coordinate::new(rng.gen_range(area.pos.x, max.x), rng.gen_range(area.pos.y, max.y)),
            Coordinate::new(rng.gen_range(area.pos.x, max.x), rng.gen_range(area.pos.y, max.y)),
        ));
    }

    results
}

pub fn find_brute_overlaps(query: &Rect, rects: &[Rect]) -> Vec<usize> {
    rects
        .iter()
        .enumerate()
        .filter(|(_, r)| query.overlaps(*r))
        .map(|(i, _)| i)
        .collect()
}
