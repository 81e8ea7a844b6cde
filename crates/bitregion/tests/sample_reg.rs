//! Enumeration and sampling regression test
//!
//! Run with:
//! ```
//! cargo test -p bitregion --test sample_reg
//! ```

use std::collections::HashSet;

use bitregion::{Coord, Region};
use bitregion_test::{RegParams, load_test_region};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn enumerate_reg() {
    let mut rp = RegParams::new("enumerate");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let region = Region::from_random_density(&mut rng, 0.3, 23, 150);
    let cells = region.as_coords();
    rp.compare_values(region.size() as f64, cells.len() as f64, 0.0);

    // Storage order is column-major, ascending y within a column
    let sorted = cells.windows(2).all(|w| (w[0].x, w[0].y) < (w[1].x, w[1].y));
    rp.compare_values(1.0, f64::from(u8::from(sorted)), 0.0);

    for (i, &cell) in cells.iter().enumerate().step_by(17) {
        rp.compare_values(1.0, f64::from(u8::from(region.nth(i) == Some(cell))), 0.0);
    }
    rp.compare_values(1.0, f64::from(u8::from(region.first() == cells.first().copied())), 0.0);
    rp.compare_values(1.0, f64::from(u8::from(region.last() == cells.last().copied())), 0.0);
    rp.compare_values(1.0, f64::from(u8::from(region.nth(cells.len()).is_none())), 0.0);

    // Z-order visits the same cells
    let z: HashSet<Coord> = region.iter_z_curve().collect();
    let all: HashSet<Coord> = cells.iter().copied().collect();
    rp.compare_values(1.0, f64::from(u8::from(z == all)), 0.0);
    rp.compare_values(cells.len() as f64, region.iter_z_curve().count() as f64, 0.0);

    // Rebuilding from the enumerated cells gives the region back
    let rebuilt = Region::from_points(23, 150, cells.iter().copied());
    rp.compare_regions(&region, &rebuilt);

    assert!(rp.cleanup(), "enumerate regression test failed");
}

#[test]
fn separated_reg() {
    let mut rp = RegParams::new("separated");

    // 40% of 100 cells gives 40 distinct cells
    let square = Region::from_rectangle(10, 10, 0, 0, 10, 10);
    let picked = square.separated_portion(0.4);
    let unique: HashSet<Coord> = picked.iter().copied().collect();
    rp.compare_values(40.0, picked.len() as f64, 0.0);
    rp.compare_values(40.0, unique.len() as f64, 0.0);

    // Distinct up to half, on an irregular region
    let islands = load_test_region("islands.txt").expect("islands.txt");
    let picked = islands.separated_portion(0.5);
    let unique: HashSet<Coord> = picked.iter().copied().collect();
    rp.compare_values(19.0, unique.len() as f64, 0.0);
    let inside = picked.iter().all(|&c| islands.contains_coord(c));
    rp.compare_values(1.0, f64::from(u8::from(inside)), 0.0);

    // The selection is deterministic and evenly spread along storage order
    rp.compare_values(
        1.0,
        f64::from(u8::from(square.separated_portion(0.4) == square.separated_portion(0.4))),
        0.0,
    );
    let quarter = square.separated_portion(0.25);
    for band in 0..5 {
        let count = quarter.iter().filter(|c| c.x / 2 == band).count();
        rp.compare_values(5.0, count as f64, 2.0);
    }

    let mut kept = square.clone();
    kept.separated_region(0.3);
    rp.compare_values(30.0, kept.size() as f64, 0.0);

    // A random rotation keeps the spacing
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..5 {
        let picked = square.mixed_random_separated(0.4, &mut rng);
        let unique: HashSet<Coord> = picked.iter().copied().collect();
        rp.compare_values(40.0, unique.len() as f64, 0.0);
    }

    let big = Region::from_rectangle(32, 32, 0, 0, 32, 32);
    let spread = big.separated_z_curve(1.0 / 16.0);
    rp.compare_values(64.0, spread.len() as f64, 0.0);
    for bx in 0..8 {
        for by in 0..8 {
            let n = spread
                .iter()
                .filter(|c| c.x / 4 == bx && c.y / 4 == by)
                .count();
            rp.compare_values(1.0, n as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "separated regression test failed");
}

#[test]
fn random_reg() {
    let mut rp = RegParams::new("random");
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    let islands = load_test_region("islands.txt").expect("islands.txt");

    // Every cell is reachable by single_random
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        if let Some(c) = islands.single_random(&mut rng) {
            seen.insert(c);
        }
    }
    rp.compare_values(38.0, seen.len() as f64, 0.0);

    let picked = islands.random_cells(&mut rng, 12);
    let unique: HashSet<Coord> = picked.iter().copied().collect();
    rp.compare_values(12.0, unique.len() as f64, 0.0);

    let mut portion = islands.clone();
    portion.random_portion(&mut rng, 10);
    rp.compare_values(10.0, portion.size() as f64, 0.0);
    rp.compare_values(0.0, portion.copy_with(|r| r.and_not(&islands)).size() as f64, 0.0);

    let open = Region::from_rectangle(50, 50, 0, 0, 50, 50);
    let scattered = open.random_scatter(&mut rng, 6, Some(20));
    rp.compare_values(20.0, scattered.len() as f64, 0.0);
    let apart = scattered
        .iter()
        .enumerate()
        .all(|(i, a)| scattered[i + 1..].iter().all(|b| a.chebyshev(*b) >= 6));
    rp.compare_values(1.0, f64::from(u8::from(apart)), 0.0);

    // Density fill lands near the requested fraction
    let dense = Region::from_random_density(&mut rng, 0.25, 100, 100);
    rp.compare_values(0.25, dense.size() as f64 / 10_000.0, 0.02);

    assert!(rp.cleanup(), "random regression test failed");
}
