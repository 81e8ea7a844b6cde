//! Enumeration of on cells
//!
//! Cells come out in storage order: column by column, top to bottom within a
//! column. Positional lookups (`nth`, `at_fraction`) count in that order too,
//! skipping whole words by popcount.

use std::iter::FusedIterator;

use super::Region;
use crate::bits::nth_set_bit;
use crate::coord::Coord;
use crate::morton;

/// Iterator over the on cells of a [`Region`] in storage order.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    region: &'a Region,
    index: usize,
    word: u64,
}

impl<'a> Cells<'a> {
    fn new(region: &'a Region) -> Self {
        Self {
            region,
            index: 0,
            word: region.data.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.word == 0 {
            self.index += 1;
            self.word = *self.region.data.get(self.index)?;
        }
        let bit = self.word.trailing_zeros();
        self.word &= self.word - 1;
        Some(self.region.coord_at(self.index, bit))
    }
}

impl FusedIterator for Cells<'_> {}

impl<'a> IntoIterator for &'a Region {
    type Item = Coord;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.iter()
    }
}

/// Iterator over the on cells of a [`Region`] in Z-order (Morton order).
///
/// Walks every Morton code of the smallest power-of-two square covering the
/// region, so regions far from square or with a side just past a power of
/// two spend most of the walk on codes outside the grid.
#[derive(Debug, Clone)]
pub struct ZCurveCells<'a> {
    region: &'a Region,
    code: u64,
    end: u64,
}

impl<'a> ZCurveCells<'a> {
    fn new(region: &'a Region) -> Self {
        let end = if region.is_degenerate() {
            0
        } else {
            let side = region.width.max(region.height).next_power_of_two() as u64;
            side * side
        };
        Self {
            region,
            code: 0,
            end,
        }
    }
}

impl Iterator for ZCurveCells<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.code < self.end {
            let (x, y) = morton::decode(self.code);
            self.code += 1;
            let point = Coord::new(x as i32, y as i32);
            if self.region.contains_coord(point) {
                return Some(point);
            }
        }
        None
    }
}

impl FusedIterator for ZCurveCells<'_> {}

impl Region {
    /// Iterate over the on cells in storage order.
    pub fn iter(&self) -> Cells<'_> {
        Cells::new(self)
    }

    /// Every on cell, in storage order.
    pub fn as_coords(&self) -> Vec<Coord> {
        let mut coords = Vec::with_capacity(self.size());
        coords.extend(self.iter());
        coords
    }

    /// The first on cell in storage order.
    pub fn first(&self) -> Option<Coord> {
        let index = self.data.iter().position(|&w| w != 0)?;
        Some(self.coord_at(index, self.data[index].trailing_zeros()))
    }

    /// The last on cell in storage order.
    pub fn last(&self) -> Option<Coord> {
        let index = self.data.iter().rposition(|&w| w != 0)?;
        Some(self.coord_at(index, 63 - self.data[index].leading_zeros()))
    }

    /// The `index`-th (0-based) on cell in storage order.
    pub fn nth(&self, index: usize) -> Option<Coord> {
        let mut remaining = index;
        for (i, &word) in self.data.iter().enumerate() {
            let count = word.count_ones() as usize;
            if remaining < count {
                return Some(self.coord_at(i, nth_set_bit(word, remaining as u32)));
            }
            remaining -= count;
        }
        None
    }

    /// The on cell at `fraction` of the way through storage order.
    ///
    /// Picks index `floor(fraction * size)`, clamped to the valid range; NaN
    /// counts as 0.
    pub fn at_fraction(&self, fraction: f64) -> Option<Coord> {
        let size = self.size();
        if size == 0 {
            return None;
        }
        let index = if fraction.is_nan() {
            0
        } else {
            ((fraction * size as f64).floor().max(0.0) as usize).min(size - 1)
        };
        self.nth(index)
    }

    /// Cells at ascending storage-order `indices`, found in one pass.
    ///
    /// Repeated indices yield repeated cells; indices past the end are
    /// dropped.
    pub(crate) fn cells_at(&self, indices: &[usize]) -> Vec<Coord> {
        debug_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        let mut cells = Vec::with_capacity(indices.len());
        let mut words = self.data.iter().enumerate();
        let mut current = words.next();
        let mut before = 0usize;
        for &index in indices {
            while let Some((i, &word)) = current {
                let count = word.count_ones() as usize;
                if index < before + count {
                    cells.push(self.coord_at(i, nth_set_bit(word, (index - before) as u32)));
                    break;
                }
                before += count;
                current = words.next();
            }
            if current.is_none() {
                break;
            }
        }
        cells
    }

    /// Iterate over the on cells in Z-order.
    pub fn iter_z_curve(&self) -> ZCurveCells<'_> {
        ZCurveCells::new(self)
    }

    /// The `index`-th (0-based) on cell in Z-order.
    pub fn nth_z_curve(&self, index: usize) -> Option<Coord> {
        self.iter_z_curve().nth(index)
    }
}
