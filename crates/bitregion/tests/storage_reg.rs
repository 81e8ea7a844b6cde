//! Storage and tail invariant regression test
//!
//! Every operation must leave the bits past the region height clear, for
//! heights that end mid-word and heights that end exactly on a word.
//!
//! Run with:
//! ```
//! cargo test -p bitregion --test storage_reg
//! ```

use bitregion::{Connectivity, Coord, Region};
use bitregion_test::RegParams;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type Op = Box<dyn Fn(&mut Region, &Region)>;

fn op(f: impl Fn(&mut Region, &Region) + 'static) -> Op {
    Box::new(f)
}

fn operations() -> Vec<(&'static str, Op)> {
    vec![
        ("not", op(|r, _| {
            r.not();
        })),
        ("or", op(|r, o| {
            r.or(o);
        })),
        ("and", op(|r, o| {
            r.and(o);
        })),
        ("xor", op(|r, o| {
            r.xor(o);
        })),
        ("and_not", op(|r, o| {
            r.and_not(o);
        })),
        ("not_and", op(|r, o| {
            r.not_and(o);
        })),
        ("expand", op(|r, _| {
            r.expand_by(3, Connectivity::FourWay);
        })),
        ("expand_8way", op(|r, _| {
            r.expand_by(3, Connectivity::EightWay);
        })),
        ("retract", op(|r, _| {
            r.retract();
        })),
        ("retract_8way", op(|r, _| {
            r.retract_8way();
        })),
        ("fringe", op(|r, _| {
            r.fringe_8way();
        })),
        ("surface", op(|r, _| {
            r.surface();
        })),
        ("connect_8way", op(|r, _| {
            r.connect_8way();
        })),
        ("thin_fully", op(|r, _| {
            r.thin_fully();
        })),
        ("disperse", op(|r, _| {
            r.disperse();
        })),
        ("remove_isolated", op(|r, _| {
            r.remove_isolated();
        })),
        ("translate_down", op(|r, _| {
            r.translate(1, 5);
        })),
        ("translate_up", op(|r, _| {
            r.translate(-1, -70);
        })),
        ("insert_translation", op(|r, _| {
            r.insert_translation(0, 63);
        })),
        ("flip", op(|r, _| {
            r.flip(true, true);
        })),
        ("zoom", op(|r, _| {
            r.zoom(3, 40);
        })),
        ("flood", op(|r, o| {
            r.flood_by(o, 4, Connectivity::EightWay);
        })),
        ("fill", op(|r, _| {
            r.fill(true);
        })),
        ("circle", op(|r, _| {
            r.insert_circle(Coord::new(5, 60), 30);
        })),
        ("rectangle", op(|r, _| {
            r.insert_rectangle(2, 50, 4, 500);
        })),
    ]
}

#[test]
fn storage_reg() {
    let mut rp = RegParams::new("storage");
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for height in [1usize, 63, 64, 65, 70, 128, 130] {
        let base = Region::from_random(&mut rng, 13, height);
        // Taller and shorter partners exercise the overlap clipping
        let partners = [
            Region::from_random(&mut rng, 13, height),
            Region::from_random(&mut rng, 7, height + 64),
            Region::from_random(&mut rng, 20, height / 2 + 1),
        ];
        for (name, apply) in operations() {
            for partner in &partners {
                let mut region = base.clone();
                apply(&mut region, partner);
                if !region.tails_clean() {
                    eprintln!("{} left tail bits set at height {}", name, height);
                }
                rp.compare_values(1.0, f64::from(u8::from(region.tails_clean())), 0.0);
                rp.compare_values(13.0, region.width() as f64, 0.0);
                rp.compare_values(height as f64, region.height() as f64, 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "storage regression test failed");
}

#[test]
fn plus_shape_reg() {
    let mut rp = RegParams::new("plus_shape");

    // A single cell grows into a plus and retracts back to the single cell
    let mut region = Region::new(4, 4);
    region.insert(1, 1);
    region.expand();
    let plus = Region::from_points(
        4,
        4,
        [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)].map(Coord::from),
    );
    rp.compare_regions(&plus, &region);
    rp.compare_values(5.0, region.size() as f64, 0.0);
    region.retract();
    rp.compare_regions(&Region::from_point(4, 4, Coord::new(1, 1)), &region);

    assert!(rp.cleanup(), "plus_shape regression test failed");
}

#[test]
fn word_boundary_reg() {
    let mut rp = RegParams::new("word_boundary");

    // Height 65: cell (0, 64) is bit 0 of the second word of column 0
    let mut region = Region::new(3, 65);
    region.insert(0, 64);
    rp.compare_values(2.0, region.words_per_column() as f64, 0.0);
    region.expand();
    let expected = Region::from_points(3, 65, [(0, 63), (0, 64), (1, 64)].map(Coord::from));
    rp.compare_regions(&expected, &region);
    rp.compare_values(0.0, region.words()[5] as f64, 0.0);
    rp.compare_values(1.0, f64::from(u8::from(region.tails_clean())), 0.0);

    // And back up: retracting a column that straddles the boundary
    let mut column = Region::from_rectangle(3, 65, 0, 0, 3, 65);
    column.retract();
    rp.compare_values(63.0, column.size() as f64, 0.0);
    rp.compare_values(1.0, f64::from(u8::from(column.contains(1, 63))), 0.0);
    rp.compare_values(0.0, f64::from(u8::from(column.contains(1, 64))), 0.0);

    assert!(rp.cleanup(), "word_boundary regression test failed");
}

#[test]
fn empty_region_reg() {
    let mut rp = RegParams::new("empty_region");

    for (w, h) in [(0usize, 0usize), (0, 70), (9, 0)] {
        let mut region = Region::new(w, h);
        region
            .fill(true)
            .expand_8way()
            .retract()
            .not()
            .flip(true, true)
            .zoom(1, 1)
            .translate(2, 2)
            .thin_fully()
            .remove_edges();
        rp.compare_values(0.0, region.size() as f64, 0.0);
        rp.compare_values(1.0, f64::from(u8::from(region.first().is_none())), 0.0);
        rp.compare_values(0.0, region.split().len() as f64, 0.0);
        let text = region.to_text();
        rp.compare_strings(&format!("{},{}", w, h), &text);
    }

    assert!(rp.cleanup(), "empty_region regression test failed");
}
