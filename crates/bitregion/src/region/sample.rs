//! Random and quasi-random selection of on cells
//!
//! Random selection takes any [`rand::Rng`]. Separated selection uses the
//! base-2 van der Corput sequence from [`crate::quasi`] to pick storage-order
//! indices that are spread evenly through the region. It is deterministic
//! unless a random rotation is applied.
//!
//! Separated picks are distinct while the requested fraction is at most 1/2.
//! Above that, neighboring sequence points can round to the same cell; the
//! duplicates are merged, so fewer cells than requested come back.

use rand::Rng;
use rand::seq::index;

use super::{Region, saturate};
use crate::coord::Coord;
use crate::quasi::VanDerCorput;

/// Sorted, distinct storage-order indices for `fraction` of `size` cells.
fn separated_indices(sequence: VanDerCorput, fraction: f64, size: usize) -> Vec<usize> {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let count = (size as f64 * fraction).floor() as usize;
    let mut indices = sequence.indices(count.min(size), size);
    indices.sort_unstable();
    indices.dedup();
    indices
}

impl Region {
    /// One on cell chosen uniformly at random, or `None` if the region is
    /// empty.
    pub fn single_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        match self.size() {
            0 => None,
            size => self.nth(rng.gen_range(0..size)),
        }
    }

    /// `count` distinct on cells chosen uniformly at random, in storage order.
    ///
    /// Returns every on cell when `count >= size()`.
    pub fn random_cells<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Coord> {
        let size = self.size();
        let amount = count.min(size);
        if amount == 0 {
            return Vec::new();
        }
        let mut picked = index::sample(rng, size, amount).into_vec();
        picked.sort_unstable();
        self.cells_at(&picked)
    }

    /// Keep only `count` on cells chosen uniformly at random.
    pub fn random_portion<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> &mut Self {
        if count >= self.size() {
            return self;
        }
        let keep = self.random_cells(rng, count);
        self.clear().insert_several(keep)
    }

    /// Random on cells, each at least `min_distance` (Chebyshev) from every
    /// other pick.
    ///
    /// Picks until no candidate is left or `limit` cells have been chosen.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source
    /// * `min_distance` - Smallest Chebyshev distance between two picks;
    ///   values of 1 or less allow neighbors
    /// * `limit` - Most cells to pick, or `None` for as many as fit
    ///
    /// # Returns
    ///
    /// The picked cells in the order they were chosen.
    pub fn random_scatter<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_distance: i32,
        limit: Option<usize>,
    ) -> Vec<Coord> {
        let limit = limit.unwrap_or(usize::MAX);
        // Past the larger dimension every pick clears the whole grid
        let span = i64::try_from(self.width.max(self.height)).unwrap_or(i64::MAX);
        let reach = (i64::from(min_distance) - 1).clamp(0, span);
        let side = saturate(2 * reach + 1);
        let mut candidates = self.clone();
        let mut picked = Vec::new();
        while picked.len() < limit {
            let Some(point) = candidates.single_random(rng) else {
                break;
            };
            candidates.remove_rectangle(
                saturate(i64::from(point.x) - reach),
                saturate(i64::from(point.y) - reach),
                side,
                side,
            );
            picked.push(point);
        }
        tracing::trace!(picked = picked.len(), min_distance, "random_scatter");
        picked
    }

    /// About `fraction` of the on cells, spread evenly, in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::Region;
    ///
    /// let region = Region::from_rectangle(10, 10, 0, 0, 10, 10);
    /// let picked = region.separated_portion(0.4);
    /// assert_eq!(picked.len(), 40);
    /// ```
    pub fn separated_portion(&self, fraction: f64) -> Vec<Coord> {
        let indices = separated_indices(VanDerCorput::new(), fraction, self.size());
        self.cells_at(&indices)
    }

    /// Keep only about `fraction` of the on cells, spread evenly.
    pub fn separated_region(&mut self, fraction: f64) -> &mut Self {
        let keep = self.separated_portion(fraction);
        self.clear().insert_several(keep)
    }

    /// Like [`Region::separated_portion`], with the sequence rotated by a
    /// random offset so repeated calls pick different cells.
    pub fn mixed_random_separated<R: Rng + ?Sized>(
        &self,
        fraction: f64,
        rng: &mut R,
    ) -> Vec<Coord> {
        let sequence = VanDerCorput::rotated(rng.gen_range(0.0..1.0));
        let indices = separated_indices(sequence, fraction, self.size());
        self.cells_at(&indices)
    }

    /// About `fraction` of the on cells, spread evenly along the Z-order
    /// curve, in Z-order.
    ///
    /// Spreading along the Z-order curve keeps picks apart in both
    /// dimensions, where storage order only spreads them along columns.
    pub fn separated_z_curve(&self, fraction: f64) -> Vec<Coord> {
        let ordered: Vec<Coord> = self.iter_z_curve().collect();
        separated_indices(VanDerCorput::new(), fraction, ordered.len())
            .into_iter()
            .map(|i| ordered[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn full(w: usize, h: usize) -> Region {
        Region::from_rectangle(w, h, 0, 0, w as i32, h as i32)
    }

    #[test]
    fn test_single_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert!(Region::new(4, 4).single_random(&mut rng).is_none());
        let region = Region::from_rectangle(20, 20, 5, 5, 3, 3);
        for _ in 0..50 {
            let point = region.single_random(&mut rng);
            assert!(point.is_some_and(|p| region.contains_coord(p)));
        }
    }

    #[test]
    fn test_random_cells_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = full(30, 70);
        let cells = region.random_cells(&mut rng, 100);
        let unique: HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 100);
        assert!(cells.iter().all(|&c| region.contains_coord(c)));

        let small = Region::from_rectangle(5, 5, 0, 0, 2, 2);
        assert_eq!(small.random_cells(&mut rng, 10).len(), 4);
        assert!(small.random_cells(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_random_portion() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let original = full(12, 12);
        let mut region = original.clone();
        region.random_portion(&mut rng, 17);
        assert_eq!(region.size(), 17);
        assert_eq!(region.copy_with(|r| r.and_not(&original)).size(), 0);
    }

    #[test]
    fn test_random_scatter_separation() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let region = full(40, 40);
        let points = region.random_scatter(&mut rng, 4, None);
        assert!(points.len() >= 10);
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                assert!(a.chebyshev(*b) >= 4, "{} and {} too close", a, b);
            }
        }
        assert_eq!(region.random_scatter(&mut rng, 4, Some(3)).len(), 3);
    }

    #[test]
    fn test_random_scatter_huge_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let region = full(10, 10);
        assert_eq!(region.random_scatter(&mut rng, i32::MAX, None).len(), 1);
        assert_eq!(region.random_scatter(&mut rng, 10, None).len(), 1);
        assert_eq!(region.random_scatter(&mut rng, i32::MIN, None).len(), 100);
    }

    #[test]
    fn test_separated_portion() {
        let region = full(10, 10);
        let picked = region.separated_portion(0.4);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 40);
        assert!(region.separated_portion(0.0).is_empty());
        assert!(Region::new(5, 5).separated_portion(0.5).is_empty());
    }

    #[test]
    fn test_separated_overlap_above_half() {
        let region = full(10, 10);
        let picked = region.separated_portion(0.9);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
        assert!(picked.len() <= 90);
        assert!(picked.len() >= 50);
    }

    #[test]
    fn test_separated_region() {
        let mut region = full(8, 8);
        region.separated_region(0.25);
        assert_eq!(region.size(), 16);
    }

    #[test]
    fn test_mixed_random_separated() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let region = full(10, 10);
        let picked = region.mixed_random_separated(0.3, &mut rng);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn test_separated_z_curve() {
        let region = full(16, 16);
        let picked = region.separated_z_curve(0.25);
        assert_eq!(picked.len(), 64);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 64);
        // Every 4x4 block of the 16x16 square gets its share
        for bx in 0..4 {
            for by in 0..4 {
                let count = picked
                    .iter()
                    .filter(|c| c.x / 4 == bx && c.y / 4 == by)
                    .count();
                assert_eq!(count, 4);
            }
        }
    }
}
