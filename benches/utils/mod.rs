#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use quadtree_index::{Coordinate, Rect};

//// Utility functions

pub(crate) const WORLD_SIZE: f64 = 100_000.;

pub(crate) fn world() -> Rect {
    Rect::new((0., 0.).into(), (WORLD_SIZE, WORLD_SIZE).into())
}

/// Objects scattered over the world with sides between 0.1 and 100 units.
pub(crate) fn get_random_objects(n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rect::new(
            Coordinate::new(rng.gen_range(0., WORLD_SIZE), rng.gen_range(0., WORLD_SIZE)),
            Coordinate::new(rng.gen_range(0.1, 100.), rng.gen_range(0.1, 100.)),
        ));
    }

    results
}

/// Screen-shaped viewports of the given width at random spots in the world.
pub(crate) fn get_random_viewports(width: f64, n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let size = Coordinate::new(width, width * 0.75);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rect::new(
            Coordinate::new(
                rng.gen_range(0., WORLD_SIZE - size.x),
                rng.gen_range(0., WORLD_SIZE - size.y),
            ),
            size,
        ));
    }

    results
}
