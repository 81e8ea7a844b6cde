//! Geometric transforms
//!
//! Translation, flipping and zooming keep the region's dimensions. Cells
//! moved off the grid are dropped and cells moved in from outside are off.

use super::Region;
use crate::bits::{shift_column, shifted_word};
use crate::morton::double_bits;

impl Region {
    /// Storage for a region of this size where column `x` is produced by
    /// `fill(x, destination)`.
    fn rebuild_columns(&self, mut fill: impl FnMut(usize, &mut [u64])) -> Vec<u64> {
        let wpc = self.words_per_column;
        let mut next = vec![0u64; self.data.len()];
        for (x, column) in next.chunks_exact_mut(wpc).enumerate() {
            fill(x, column);
        }
        next
    }

    /// Move every cell by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        if self.is_degenerate() || (dx == 0 && dy == 0) {
            return self;
        }
        let width = self.width as i64;
        let next = self.rebuild_columns(|x, column| {
            let source = x as i64 - i64::from(dx);
            if (0..width).contains(&source) {
                shift_column(self.column(source as usize), column, dy as isize);
            }
        });
        self.data = next;
        self.mask_tails();
        self
    }

    /// Add a copy of this region moved by `(dx, dy)` to itself.
    pub fn insert_translation(&mut self, dx: i32, dy: i32) -> &mut Self {
        let mut moved = self.clone();
        moved.translate(dx, dy);
        self.or(&moved)
    }

    /// Mirror left-to-right and/or top-to-bottom.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) -> &mut Self {
        if self.is_degenerate() || !(horizontal || vertical) {
            return self;
        }
        let (width, wpc) = (self.width, self.words_per_column);
        // Reversing a column's bits puts cell y at 64 * wpc - 1 - y
        let padding = (64 * wpc - self.height) as isize;
        let mut reversed = vec![0u64; wpc];
        let next = self.rebuild_columns(|x, column| {
            let source = self.column(if horizontal { width - 1 - x } else { x });
            if vertical {
                for (i, word) in reversed.iter_mut().enumerate() {
                    *word = source[wpc - 1 - i].reverse_bits();
                }
                shift_column(&reversed, column, -padding);
            } else {
                column.copy_from_slice(source);
            }
        });
        self.data = next;
        self
    }

    /// Scale by two around `(cx, cy)`, cropping to the original size.
    ///
    /// Every cell becomes a 2x2 block of the doubled grid. The doubled grid is
    /// positioned so the block of `(cx, cy)` starts at `(cx, cy)`, so cell
    /// `(x, y)` of the result is on when source cell
    /// `((x + cx) / 2, (y + cy) / 2)` is on.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{Coord, Region};
    ///
    /// let mut region = Region::from_point(4, 4, Coord::new(1, 1));
    /// region.zoom(1, 1);
    /// assert_eq!(region.size(), 4);
    /// assert!(region.contains(2, 2));
    /// ```
    pub fn zoom(&mut self, cx: i32, cy: i32) -> &mut Self {
        if self.is_degenerate() {
            return self;
        }
        let width = self.width as i64;
        let mut doubled = vec![0u64; 2 * self.words_per_column];
        let next = self.rebuild_columns(|x, column| {
            let source = (x as i64 + i64::from(cx)).div_euclid(2);
            if !(0..width).contains(&source) {
                return;
            }
            for (j, &word) in self.column(source as usize).iter().enumerate() {
                doubled[2 * j] = double_bits(word as u32);
                doubled[2 * j + 1] = double_bits((word >> 32) as u32);
            }
            for (i, word) in column.iter_mut().enumerate() {
                *word = shifted_word(&doubled, i, -(cy as isize));
            }
        });
        self.data = next;
        self.mask_tails();
        self
    }
}
