//! Flood fill and connected components
//!
//! A flood grows this region one expansion at a time, but only into cells
//! that are on in `bounds`. Everything is built on [`Region::flood_by`]; the
//! component operations flood a single seed cell to its fixed point.

use rand::Rng;

use super::{Connectivity, Region};

impl Region {
    /// One flood step, returning whether any cell was added.
    fn flood_step(&mut self, bounds: &Region, connectivity: Connectivity) -> bool {
        let mut grown = self.clone();
        grown.expand_with(connectivity).and(bounds).and_not(self);
        if grown.is_empty() {
            return false;
        }
        self.or(&grown);
        true
    }

    /// Grow one step (4-way) into cells that are on in `bounds`.
    pub fn flood(&mut self, bounds: &Region) -> &mut Self {
        self.flood_step(bounds, Connectivity::FourWay);
        self
    }

    /// Grow one step (8-way) into cells that are on in `bounds`.
    pub fn flood_8way(&mut self, bounds: &Region) -> &mut Self {
        self.flood_step(bounds, Connectivity::EightWay);
        self
    }

    /// Grow up to `amount` steps into `bounds`, stopping early once a step
    /// adds nothing.
    ///
    /// # Arguments
    ///
    /// * `bounds` - Cells the flood may enter; cells already on stay on
    /// * `amount` - Most steps to take
    /// * `connectivity` - Neighborhood used for each step
    pub fn flood_by(
        &mut self,
        bounds: &Region,
        amount: usize,
        connectivity: Connectivity,
    ) -> &mut Self {
        for _ in 0..amount {
            if !self.flood_step(bounds, connectivity) {
                break;
            }
        }
        self
    }

    /// Grow into `bounds` until nothing more can be reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{Connectivity, Coord, Region};
    ///
    /// let mut floor = Region::new(10, 10);
    /// floor.insert_rectangle(0, 0, 4, 10).insert_rectangle(6, 0, 4, 10);
    ///
    /// let mut reached = Region::from_point(10, 10, Coord::new(0, 0));
    /// reached.flood_to_limit(&floor, Connectivity::FourWay);
    /// assert_eq!(reached.size(), 40);
    /// ```
    pub fn flood_to_limit(&mut self, bounds: &Region, connectivity: Connectivity) -> &mut Self {
        let mut steps = 0usize;
        while self.flood_step(bounds, connectivity) {
            steps += 1;
        }
        tracing::trace!(steps, size = self.size(), "flood_to_limit");
        self
    }

    /// Snapshots of this region after each of `amount` flood steps.
    ///
    /// # Arguments
    ///
    /// * `bounds` - Cells the flood may enter
    /// * `amount` - Number of steps to take
    /// * `connectivity` - Neighborhood used for each step
    ///
    /// # Returns
    ///
    /// Always `amount` snapshots; once the flood stops growing the remaining
    /// ones repeat the final state.
    pub fn flood_series(
        &self,
        bounds: &Region,
        amount: usize,
        connectivity: Connectivity,
    ) -> Vec<Region> {
        let mut current = self.clone();
        (0..amount)
            .map(|_| {
                current.flood_step(bounds, connectivity);
                current.clone()
            })
            .collect()
    }

    /// Snapshots of this region after each flood step that added cells.
    pub fn flood_series_to_limit(&self, bounds: &Region, connectivity: Connectivity) -> Vec<Region> {
        let mut current = self.clone();
        let mut series = Vec::new();
        while current.flood_step(bounds, connectivity) {
            series.push(current.clone());
        }
        series
    }

    fn split_with(&self, connectivity: Connectivity) -> Vec<Region> {
        let mut remaining = self.clone();
        let mut parts = Vec::new();
        while let Some(seed) = remaining.first() {
            let mut part = Region::from_point(self.width, self.height, seed);
            part.flood_to_limit(&remaining, connectivity);
            remaining.and_not(&part);
            parts.push(part);
        }
        tracing::debug!(parts = parts.len(), ?connectivity, "split");
        parts
    }

    /// Separate into 4-way connected components, in storage order of their
    /// first cell.
    ///
    /// The parts are disjoint and their union is this region.
    pub fn split(&self) -> Vec<Region> {
        self.split_with(Connectivity::FourWay)
    }

    /// Separate into 8-way connected components.
    pub fn split_8way(&self) -> Vec<Region> {
        self.split_with(Connectivity::EightWay)
    }

    fn largest_part_with(&self, connectivity: Connectivity) -> Region {
        let mut remaining = self.clone();
        let mut best = Region::new(self.width, self.height);
        let mut best_size = 0;
        while let Some(seed) = remaining.first() {
            // No later part can beat the best once fewer cells remain
            if remaining.size() <= best_size {
                break;
            }
            let mut part = Region::from_point(self.width, self.height, seed);
            part.flood_to_limit(&remaining, connectivity);
            remaining.and_not(&part);
            let size = part.size();
            if size > best_size {
                best_size = size;
                best = part;
            }
        }
        tracing::debug!(size = best_size, ?connectivity, "largest_part");
        best
    }

    /// The largest 4-way connected component.
    ///
    /// Ties go to the component found first in storage order. An empty
    /// region yields an empty region.
    pub fn largest_part(&self) -> Region {
        self.largest_part_with(Connectivity::FourWay)
    }

    /// The largest 8-way connected component.
    pub fn largest_part_8way(&self) -> Region {
        self.largest_part_with(Connectivity::EightWay)
    }

    /// Grow randomly into `bounds`, one 4-way fringe cell at a time, until
    /// this region has `volume` cells or no bounded fringe cell is left.
    ///
    /// # Arguments
    ///
    /// * `bounds` - Cells the spill may enter
    /// * `volume` - Target number of on cells; a region already this large
    ///   is left unchanged
    /// * `rng` - Random source choosing the next fringe cell
    pub fn spill<R: Rng + ?Sized>(
        &mut self,
        bounds: &Region,
        volume: usize,
        rng: &mut R,
    ) -> &mut Self {
        let mut fringe = self.copy_with(|r| r.fringe().and(bounds));
        let mut size = self.size();
        while size < volume {
            let Some(cell) = fringe.single_random(rng) else {
                break;
            };
            self.insert(cell.x, cell.y);
            fringe.remove(cell.x, cell.y);
            for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                let next = cell.translate(dx, dy);
                if bounds.contains_coord(next) && !self.contains_coord(next) {
                    fringe.insert(next.x, next.y);
                }
            }
            size += 1;
        }
        tracing::debug!(size, volume, "spill");
        self
    }
}
