//! Region - word-packed 2D on/off grid
//!
//! `Region` is the fundamental type of this crate: a rectangular set of cells
//! where every cell is either on or off, stored one bit per cell so that set
//! algebra and 3x3 morphology run 64 cells at a time.
//!
//! # Storage layout
//!
//! - Cells are stored column-major in 64-bit words
//! - Each column takes `words_per_column = ceil(height / 64)` words
//! - Column `x` occupies `data[x * wpc .. (x + 1) * wpc]`
//! - Cell `(x, y)` is bit `y & 63` of word `y >> 6` within its column
//! - Bits representing `y >= height` are always 0
//!
//! # Ownership model
//!
//! Mutating operations take `&mut self` and return `&mut Self`, so they chain:
//!
//! ```
//! use bitregion::{Coord, Region};
//!
//! let mut region = Region::from_point(8, 8, Coord::new(3, 3));
//! region.expand().expand().retract();
//! assert_eq!(region.size(), 5);
//! ```
//!
//! Every mutator has a copy path through [`Clone`] or [`Region::copy_with`],
//! which leaves the input untouched:
//!
//! ```
//! use bitregion::{Coord, Region};
//!
//! let seed = Region::from_point(8, 8, Coord::new(3, 3));
//! let grown = seed.copy_with(|r| r.expand_8way());
//! assert_eq!(seed.size(), 1);
//! assert_eq!(grown.size(), 9);
//! ```

mod access;
mod algebra;
mod connect;
mod convert;
mod iter;
mod morph;
mod sample;
mod serial;
mod transform;

pub use convert::{CharMapping, GridSource};
pub use iter::{Cells, ZCurveCells};

use crate::bits::{tail_mask, words_for};
use crate::coord::Coord;
use crate::error::{Error, Result};
use rand::Rng;

/// Neighborhood used by morphology and connectivity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Orthogonal neighbors only (up, down, left, right)
    #[default]
    FourWay,
    /// Orthogonal and diagonal neighbors
    EightWay,
}

/// Word-packed 2D on/off grid.
///
/// # Examples
///
/// ```
/// use bitregion::Region;
///
/// let mut region = Region::new(100, 70);
/// region.insert(10, 65);
/// assert!(region.contains(10, 65));
/// assert!(!region.contains(10, 70)); // out of bounds reads as off
/// assert_eq!(region.words_per_column(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    /// Width in cells
    width: usize,
    /// Height in cells
    height: usize,
    /// 64-bit words per column
    words_per_column: usize,
    /// Mask for the last word of each column
    tail_mask: u64,
    /// Column-major cell words
    data: Vec<u64>,
}

impl Default for Region {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Region {
    /// Create an all-off region.
    ///
    /// Either dimension may be 0, which gives an empty region with no
    /// storage.
    pub fn new(width: usize, height: usize) -> Self {
        let words_per_column = words_for(height);
        Self {
            width,
            height,
            words_per_column,
            tail_mask: tail_mask(height),
            data: vec![0; width * words_per_column],
        }
    }

    /// Create a region with the single cell `point` on (if it is in bounds).
    pub fn from_point(width: usize, height: usize, point: Coord) -> Self {
        let mut region = Self::new(width, height);
        region.insert(point.x, point.y);
        region
    }

    /// Create a region with every in-bounds point of `points` on.
    pub fn from_points(
        width: usize,
        height: usize,
        points: impl IntoIterator<Item = Coord>,
    ) -> Self {
        let mut region = Self::new(width, height);
        region.insert_several(points);
        region
    }

    /// Create a region with the rectangle `[x, x + w) x [y, y + h)` on,
    /// clipped to the grid.
    pub fn from_rectangle(width: usize, height: usize, x: i32, y: i32, w: i32, h: i32) -> Self {
        let mut region = Self::new(width, height);
        region.insert_rectangle(x, y, w, h);
        region
    }

    /// Create a region where each cell is on with probability 1/2.
    ///
    /// Each storage word is one draw of 64 random bits, so the random source
    /// must be well distributed across all bits, not just the low ones.
    pub fn from_random<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Self {
        let mut region = Self::new(width, height);
        for word in region.data.iter_mut() {
            *word = rng.next_u64();
        }
        region.mask_tails();
        region
    }

    /// Create a region where each cell is on with probability `fraction`.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source, drawn once per cell
    /// * `fraction` - Chance of each cell being on, clamped to `[0, 1]`;
    ///   NaN counts as 0
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    pub fn from_random_density<R: Rng + ?Sized>(
        rng: &mut R,
        fraction: f64,
        width: usize,
        height: usize,
    ) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let mut region = Self::new(width, height);
        for x in 0..width {
            for y in 0..height {
                if rng.gen_bool(fraction) {
                    region.set_unchecked(x, y);
                }
            }
        }
        region
    }

    /// Create a region from raw column-major words.
    ///
    /// Bits beyond the height are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WordCount`] if `words.len()` is not
    /// `width * ceil(height / 64)`.
    pub fn from_words(width: usize, height: usize, words: Vec<u64>) -> Result<Self> {
        let words_per_column = words_for(height);
        let expected = width.checked_mul(words_per_column).ok_or_else(|| {
            Error::InvalidDimension {
                field: "width",
                value: width.to_string(),
            }
        })?;
        if words.len() != expected {
            return Err(Error::WordCount {
                expected,
                actual: words.len(),
            });
        }
        let mut region = Self {
            width,
            height,
            words_per_column,
            tail_mask: tail_mask(height),
            data: words,
        };
        region.mask_tails();
        Ok(region)
    }

    /// Apply `op` to a copy of this region and return the copy.
    ///
    /// This is the non-destructive form of every mutator:
    /// `region.copy_with(|r| r.expand().and(&floor))`.
    pub fn copy_with(&self, op: impl FnOnce(&mut Region) -> &mut Region) -> Region {
        let mut copy = self.clone();
        op(&mut copy);
        copy
    }

    /// Get the width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the number of 64-bit words per column.
    #[inline]
    pub fn words_per_column(&self) -> usize {
        self.words_per_column
    }

    /// Get the raw column-major storage words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.data
    }

    /// Get the words of column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[inline]
    pub fn column(&self, x: usize) -> &[u64] {
        let start = x * self.words_per_column;
        &self.data[start..start + self.words_per_column]
    }

    /// True when the region has no cells at all (zero width or height).
    #[inline]
    pub(crate) fn is_degenerate(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the padding bits of every column.
    ///
    /// Restores the tail invariant after an operation that may have shifted
    /// or complemented bits into the padding of the last word.
    pub(crate) fn mask_tails(&mut self) {
        let wpc = self.words_per_column;
        if wpc == 0 || self.tail_mask == u64::MAX {
            return;
        }
        for column in self.data.chunks_exact_mut(wpc) {
            column[wpc - 1] &= self.tail_mask;
        }
    }

    /// Storage index and bit for `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn locate(&self, x: i32, y: i32) -> Option<(usize, u64)> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x * self.words_per_column + (y >> 6), 1u64 << (y & 63)))
    }

    /// Turn on an in-bounds cell.
    #[inline]
    pub(crate) fn set_unchecked(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height);
        self.data[x * self.words_per_column + (y >> 6)] |= 1u64 << (y & 63);
    }

    /// Coordinate of bit `bit` in storage word `index`.
    #[inline]
    pub(crate) fn coord_at(&self, index: usize, bit: u32) -> Coord {
        let x = index / self.words_per_column;
        let y = (index % self.words_per_column) * 64 + bit as usize;
        Coord::new(x as i32, y as i32)
    }

    /// Check that no column has bits set beyond the height.
    pub fn tails_clean(&self) -> bool {
        let wpc = self.words_per_column;
        wpc == 0
            || self
                .data
                .chunks_exact(wpc)
                .all(|column| column[wpc - 1] & !self.tail_mask == 0)
    }
}

/// Clamp a widened coordinate back into `i32`.
pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
