//! Morphological operations
//!
//! All operators here look at the 3x3 neighborhood of each cell, so they run
//! as word arithmetic: a column's vertical neighbors come from shifting its
//! words by one bit (carrying across word boundaries), and horizontal
//! neighbors are simply the adjacent columns' words.
//!
//! Cells outside the grid always count as off. Expansion therefore never
//! wraps, and retraction strips cells on the border.

use super::{Connectivity, Region};
use crate::bits::{self, shifted_word};

impl Region {
    /// New storage where each word is `f(column, i)` over this region's columns.
    fn vertical_words(&self, f: fn(&[u64], usize) -> u64) -> Vec<u64> {
        let wpc = self.words_per_column;
        self.data
            .chunks_exact(wpc)
            .flat_map(|column| (0..wpc).map(move |i| f(column, i)))
            .collect()
    }

    pub(crate) fn expand_with(&mut self, connectivity: Connectivity) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let (width, wpc) = (self.width, self.words_per_column);
        let vertical = self.vertical_words(bits::vertical_or);
        let side = match connectivity {
            Connectivity::FourWay => &self.data,
            Connectivity::EightWay => &vertical,
        };
        let mut next = vertical.clone();
        for x in 0..width {
            for i in 0..wpc {
                let mut word = 0;
                if x > 0 {
                    word |= side[(x - 1) * wpc + i];
                }
                if x + 1 < width {
                    word |= side[(x + 1) * wpc + i];
                }
                next[x * wpc + i] |= word;
            }
        }
        self.data = next;
        self.mask_tails();
        self
    }

    pub(crate) fn retract_with(&mut self, connectivity: Connectivity) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let (width, wpc) = (self.width, self.words_per_column);
        let vertical = self.vertical_words(bits::vertical_and);
        let side = match connectivity {
            Connectivity::FourWay => &self.data,
            Connectivity::EightWay => &vertical,
        };
        let mut next = vec![0u64; self.data.len()];
        // Border columns have an off neighbor outside the grid, so they stay 0
        for x in 1..width.saturating_sub(1) {
            for i in 0..wpc {
                next[x * wpc + i] =
                    vertical[x * wpc + i] & side[(x - 1) * wpc + i] & side[(x + 1) * wpc + i];
            }
        }
        self.data = next;
        self
    }

    /// Grow by one cell in the four orthogonal directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{Coord, Region};
    ///
    /// let mut region = Region::from_point(4, 4, Coord::new(1, 1));
    /// region.expand();
    /// assert_eq!(region.size(), 5);
    /// assert!(region.contains(1, 0) && region.contains(0, 1) && region.contains(1, 2));
    /// ```
    pub fn expand(&mut self) -> &mut Self {
        self.expand_with(Connectivity::FourWay)
    }

    /// Grow by one cell in all eight directions.
    pub fn expand_8way(&mut self) -> &mut Self {
        self.expand_with(Connectivity::EightWay)
    }

    /// Grow by `amount` cells.
    pub fn expand_by(&mut self, amount: usize, connectivity: Connectivity) -> &mut Self {
        for _ in 0..amount {
            self.expand_with(connectivity);
        }
        self
    }

    /// Shrink by one cell: keep only cells whose four orthogonal neighbors
    /// are all on.
    pub fn retract(&mut self) -> &mut Self {
        self.retract_with(Connectivity::FourWay)
    }

    /// Shrink by one cell: keep only cells whose eight neighbors are all on.
    pub fn retract_8way(&mut self) -> &mut Self {
        self.retract_with(Connectivity::EightWay)
    }

    /// Shrink by `amount` cells.
    pub fn retract_by(&mut self, amount: usize, connectivity: Connectivity) -> &mut Self {
        for _ in 0..amount {
            if self.is_empty() {
                break;
            }
            self.retract_with(connectivity);
        }
        self
    }

    /// Snapshots of this region after each of `amount` expansions.
    pub fn expand_series(&self, amount: usize, connectivity: Connectivity) -> Vec<Region> {
        let mut current = self.clone();
        (0..amount)
            .map(|_| current.expand_with(connectivity).clone())
            .collect()
    }

    /// Snapshots of this region after each expansion, until expanding no
    /// longer adds cells.
    pub fn expand_series_to_limit(&self, connectivity: Connectivity) -> Vec<Region> {
        let mut series = Vec::new();
        let mut current = self.clone();
        let mut size = current.size();
        loop {
            current.expand_with(connectivity);
            let next = current.size();
            if next == size {
                break;
            }
            size = next;
            series.push(current.clone());
        }
        tracing::trace!(steps = series.len(), "expand_series_to_limit");
        series
    }

    /// Snapshots of this region after each of `amount` retractions.
    pub fn retract_series(&self, amount: usize, connectivity: Connectivity) -> Vec<Region> {
        let mut current = self.clone();
        (0..amount)
            .map(|_| current.retract_with(connectivity).clone())
            .collect()
    }

    /// Replace this region with the cells just outside it (4-way).
    ///
    /// Equivalent to `expand()` followed by `and_not(original)`.
    pub fn fringe(&mut self) -> &mut Self {
        self.fringe_by(1, Connectivity::FourWay)
    }

    /// Replace this region with the cells just outside it (8-way).
    pub fn fringe_8way(&mut self) -> &mut Self {
        self.fringe_by(1, Connectivity::EightWay)
    }

    /// Replace this region with the band of cells up to `amount` steps
    /// outside it.
    pub fn fringe_by(&mut self, amount: usize, connectivity: Connectivity) -> &mut Self {
        let original = self.clone();
        self.expand_by(amount, connectivity).and_not(&original)
    }

    /// Successive one-cell rings around this region, nearest first.
    pub fn fringe_series(&self, amount: usize, connectivity: Connectivity) -> Vec<Region> {
        let mut previous = self.clone();
        let mut rings = Vec::with_capacity(amount);
        for _ in 0..amount {
            let mut grown = previous.clone();
            grown.expand_with(connectivity);
            let mut ring = grown.clone();
            ring.and_not(&previous);
            rings.push(ring);
            previous = grown;
        }
        rings
    }

    /// Replace this region with its outermost layer of cells (4-way).
    ///
    /// Equivalent to `xor` with a retracted copy of itself.
    pub fn surface(&mut self) -> &mut Self {
        self.surface_by(1, Connectivity::FourWay)
    }

    /// Replace this region with its outermost layer of cells (8-way).
    pub fn surface_8way(&mut self) -> &mut Self {
        self.surface_by(1, Connectivity::EightWay)
    }

    /// Replace this region with its outer band `amount` cells thick.
    pub fn surface_by(&mut self, amount: usize, connectivity: Connectivity) -> &mut Self {
        let mut inner = self.clone();
        inner.retract_by(amount, connectivity);
        self.xor(&inner)
    }

    /// Successive one-cell layers peeled from this region, outermost first.
    pub fn surface_series(&self, amount: usize, connectivity: Connectivity) -> Vec<Region> {
        let mut previous = self.clone();
        let mut layers = Vec::with_capacity(amount);
        for _ in 0..amount {
            let mut inner = previous.clone();
            inner.retract_with(connectivity);
            let mut layer = previous;
            layer.xor(&inner);
            layers.push(layer);
            previous = inner;
        }
        layers
    }

    fn connect_with(&mut self, connectivity: Connectivity) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let (width, wpc) = (self.width, self.words_per_column);
        let mut next = self.data.clone();
        for x in 0..width {
            let column = self.column(x);
            let left = (x > 0).then(|| self.column(x - 1));
            let right = (x + 1 < width).then(|| self.column(x + 1));
            for i in 0..wpc {
                let mut word = shifted_word(column, i, 1) & shifted_word(column, i, -1);
                if let (Some(l), Some(r)) = (left, right) {
                    word |= l[i] & r[i];
                    if connectivity == Connectivity::EightWay {
                        word |= shifted_word(l, i, 1) & shifted_word(r, i, -1);
                        word |= shifted_word(l, i, -1) & shifted_word(r, i, 1);
                    }
                }
                next[x * wpc + i] |= word;
            }
        }
        self.data = next;
        self.mask_tails();
        self
    }

    /// Fill single-cell gaps between two on cells in a row or column.
    ///
    /// An off cell turns on when both of its vertical neighbors or both of
    /// its horizontal neighbors are on.
    pub fn connect(&mut self) -> &mut Self {
        self.connect_with(Connectivity::FourWay)
    }

    /// Like [`Region::connect`], also bridging single-cell diagonal gaps.
    pub fn connect_8way(&mut self) -> &mut Self {
        self.connect_with(Connectivity::EightWay)
    }

    fn thin_with(&mut self, connectivity: Connectivity) -> &mut Self {
        if self.width <= 2 || self.height <= 2 {
            return self;
        }
        let (outer, inner) = match connectivity {
            Connectivity::FourWay => (Connectivity::EightWay, Connectivity::FourWay),
            Connectivity::EightWay => (Connectivity::FourWay, Connectivity::EightWay),
        };
        let mut core = self.clone();
        core.retract_with(outer);
        // Cells the opening would lose, plus their neighbors, keep thin links alive
        let mut links = core.clone();
        links
            .expand_with(outer)
            .xor(self)
            .expand_with(inner)
            .and(self);
        core.or(&links);
        *self = core;
        self
    }

    /// One thinning pass that narrows thick areas without breaking thin
    /// connections between them.
    pub fn thin(&mut self) -> &mut Self {
        self.thin_with(Connectivity::FourWay)
    }

    /// One thinning pass, preserving 8-way connections.
    pub fn thin_8way(&mut self) -> &mut Self {
        self.thin_with(Connectivity::EightWay)
    }

    fn thin_fully_with(&mut self, connectivity: Connectivity) -> &mut Self {
        let mut size = self.size();
        let mut passes = 0usize;
        loop {
            self.thin_with(connectivity);
            passes += 1;
            let next = self.size();
            tracing::trace!(pass = passes, size = next, "thin");
            if next == size {
                break;
            }
            size = next;
        }
        tracing::debug!(passes, size, ?connectivity, "thinned fully");
        self
    }

    /// Thin repeatedly until the region stops shrinking.
    ///
    /// Each pass yields a subset of its input, so this always terminates.
    pub fn thin_fully(&mut self) -> &mut Self {
        self.thin_fully_with(Connectivity::FourWay)
    }

    /// Thin repeatedly (8-way) until the region stops shrinking.
    pub fn thin_fully_8way(&mut self) -> &mut Self {
        self.thin_fully_with(Connectivity::EightWay)
    }

    /// Keep only cells on a checkerboard, so no two remaining cells are
    /// orthogonally adjacent.
    pub fn disperse(&mut self) -> &mut Self {
        let wpc = self.words_per_column;
        if wpc == 0 {
            return self;
        }
        for (x, column) in self.data.chunks_exact_mut(wpc).enumerate() {
            let mask = if x % 2 == 0 {
                0x5555_5555_5555_5555
            } else {
                0xAAAA_AAAA_AAAA_AAAA
            };
            for word in column {
                *word &= mask;
            }
        }
        self
    }

    /// Keep only cells with even x and even y, so no two remaining cells are
    /// adjacent in any of the eight directions.
    pub fn disperse_8way(&mut self) -> &mut Self {
        let wpc = self.words_per_column;
        if wpc == 0 {
            return self;
        }
        for (x, column) in self.data.chunks_exact_mut(wpc).enumerate() {
            let mask = if x % 2 == 0 { 0x5555_5555_5555_5555 } else { 0 };
            for word in column {
                *word &= mask;
            }
        }
        self
    }

    /// Keep each cell with probability 1/2.
    pub fn disperse_random<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        for word in self.data.iter_mut() {
            *word &= rng.next_u64();
        }
        self
    }

    /// Turn off every cell on the outer border of the grid.
    pub fn remove_edges(&mut self) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let wpc = self.words_per_column;
        let last_bit = 1u64 << ((self.height - 1) & 63);
        for column in self.data.chunks_exact_mut(wpc) {
            column[0] &= !1;
            column[wpc - 1] &= !last_bit;
        }
        let len = self.data.len();
        self.data[..wpc].fill(0);
        self.data[len - wpc..].fill(0);
        self
    }

    /// Turn off every cell with no orthogonal neighbor that is on.
    pub fn remove_isolated(&mut self) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let (width, wpc) = (self.width, self.words_per_column);
        let mut next = self.data.clone();
        for x in 0..width {
            let column = self.column(x);
            for i in 0..wpc {
                let mut neighbors = shifted_word(column, i, 1) | shifted_word(column, i, -1);
                if x > 0 {
                    neighbors |= self.data[(x - 1) * wpc + i];
                }
                if x + 1 < width {
                    neighbors |= self.data[(x + 1) * wpc + i];
                }
                next[x * wpc + i] &= neighbors;
            }
        }
        self.data = next;
        self
    }
}
