//! Cell access and bulk fill operations
//!
//! Reads outside `[0, width) x [0, height)` return off and writes there are
//! ignored. Callers routinely insert or remove candidate points generated
//! next to the border, so this is the expected case, not an error.

use super::{Region, saturate};
use crate::bits::{column_span, words_for};
use crate::coord::Coord;

impl Region {
    /// Check whether `(x, y)` is on. Out of bounds is off.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(index, bit)| self.data[index] & bit != 0)
    }

    /// Check whether `point` is on.
    #[inline]
    pub fn contains_coord(&self, point: Coord) -> bool {
        self.contains(point.x, point.y)
    }

    /// Turn `(x, y)` on.
    pub fn insert(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((index, bit)) = self.locate(x, y) {
            self.data[index] |= bit;
        }
        self
    }

    /// Turn `(x, y)` off.
    pub fn remove(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((index, bit)) = self.locate(x, y) {
            self.data[index] &= !bit;
        }
        self
    }

    /// Flip `(x, y)`.
    pub fn toggle(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((index, bit)) = self.locate(x, y) {
            self.data[index] ^= bit;
        }
        self
    }

    /// Set `(x, y)` to `on`.
    pub fn set(&mut self, on: bool, x: i32, y: i32) -> &mut Self {
        if on { self.insert(x, y) } else { self.remove(x, y) }
    }

    /// Turn on every point in `points`.
    pub fn insert_several(&mut self, points: impl IntoIterator<Item = Coord>) -> &mut Self {
        for p in points {
            self.insert(p.x, p.y);
        }
        self
    }

    /// Turn off every point in `points`.
    pub fn remove_several(&mut self, points: impl IntoIterator<Item = Coord>) -> &mut Self {
        for p in points {
            self.remove(p.x, p.y);
        }
        self
    }

    /// Turn on the rectangle `[x, x + w) x [y, y + h)`, clipped to the grid.
    pub fn insert_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> &mut Self {
        self.apply_rectangle(x, y, w, h, true)
    }

    /// Turn off the rectangle `[x, x + w) x [y, y + h)`, clipped to the grid.
    pub fn remove_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> &mut Self {
        self.apply_rectangle(x, y, w, h, false)
    }

    fn apply_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool) -> &mut Self {
        let (x0, x1) = clip_span(x, w, self.width);
        let (y0, y1) = clip_span(y, h, self.height);
        if x0 >= x1 || y0 >= y1 {
            return self;
        }
        let wpc = self.words_per_column;
        for column in self.data[x0 * wpc..x1 * wpc].chunks_exact_mut(wpc) {
            for i in (y0 >> 6)..words_for(y1) {
                let span = column_span(i, y0, y1);
                if on {
                    column[i] |= span;
                } else {
                    column[i] &= !span;
                }
            }
        }
        self
    }

    /// Turn on every cell within Euclidean distance `radius` of `center`.
    pub fn insert_circle(&mut self, center: Coord, radius: i32) -> &mut Self {
        if radius < 0 {
            return self;
        }
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let r = i64::from(radius);
        let r2 = r * r;
        // Only columns inside the grid can change
        let first = (cx - r).max(0);
        let last = (cx + r).min(self.width as i64 - 1);
        for x in first..=last {
            let dx = x - cx;
            let half = ((r2 - dx * dx) as f64).sqrt() as i64;
            let (y0, y1) = ((cy - half).max(0), (cy + half + 1).min(self.height as i64));
            if y0 < y1 {
                self.insert_rectangle(saturate(x), saturate(y0), 1, saturate(y1 - y0));
            }
        }
        self
    }

    /// Turn every cell on or off.
    pub fn fill(&mut self, on: bool) -> &mut Self {
        self.data.fill(if on { u64::MAX } else { 0 });
        if on {
            self.mask_tails();
        }
        self
    }

    /// Turn every cell off.
    pub fn clear(&mut self) -> &mut Self {
        self.fill(false)
    }

    /// Check whether no cell is on.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// Check whether every cell is on. True for a region with no cells.
    pub fn all_on(&self) -> bool {
        self.size() == self.width * self.height
    }

    /// Number of cells that are on.
    pub fn size(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Change the dimensions.
    ///
    /// When the dimensions already match, nothing changes and every cell is
    /// kept; otherwise the region is reallocated all off.
    pub fn resize(&mut self, width: usize, height: usize) -> &mut Self {
        if width != self.width || height != self.height {
            *self = Region::new(width, height);
        }
        self
    }

    /// Make this an all-off region of the given size.
    ///
    /// When the dimensions already match, the storage is cleared in place;
    /// otherwise it is reallocated.
    pub fn resize_and_empty(&mut self, width: usize, height: usize) -> &mut Self {
        if width == self.width && height == self.height {
            self.data.fill(0);
        } else {
            *self = Region::new(width, height);
        }
        self
    }

    /// Make this region a copy of `other`, reusing storage where possible.
    pub fn remake(&mut self, other: &Region) -> &mut Self {
        self.clone_from(other);
        self
    }
}

/// Clip the half-open span `[start, start + len)` to `[0, limit)`.
fn clip_span(start: i32, len: i32, limit: usize) -> (usize, usize) {
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(len)).min(limit as i64);
    if hi <= lo {
        (0, 0)
    } else {
        (lo as usize, hi as usize)
    }
}
