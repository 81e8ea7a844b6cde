//! Conversion between regions and nested grids
//!
//! All grids are indexed `grid[x][y]`: the outer slice holds columns. A grid's
//! width is the number of columns and its height the length of each column;
//! grids with columns of different lengths are rejected.

use std::fmt;

use super::Region;
use crate::error::{Error, Result};

/// A grid of cell values and the rule deciding which values are on.
#[derive(Debug, Clone, Copy)]
pub enum GridSource<'a> {
    /// `true` is on
    Bools(&'a [Vec<bool>]),
    /// Cells equal to `on` are on
    Chars { grid: &'a [Vec<char>], on: char },
    /// Cells matching any of `on` are on
    CharSet { grid: &'a [Vec<char>], on: &'a [char] },
    /// Cells in `[lower, upper)` are on
    Ints {
        grid: &'a [Vec<i32>],
        lower: i64,
        upper: i64,
    },
    /// Cells in `[lower, upper)` are on; NaN is always off
    Floats {
        grid: &'a [Vec<f64>],
        lower: f64,
        upper: f64,
    },
}

impl<'a> GridSource<'a> {
    /// Integer cells equal to `value` are on.
    pub fn ints_equal(grid: &'a [Vec<i32>], value: i32) -> Self {
        let value = i64::from(value);
        Self::Ints {
            grid,
            lower: value,
            upper: value + 1,
        }
    }

    /// Float cells below `upper` are on.
    pub fn floats_below(grid: &'a [Vec<f64>], upper: f64) -> Self {
        Self::Floats {
            grid,
            lower: f64::NEG_INFINITY,
            upper,
        }
    }

    /// Width and height of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedGrid`] if the columns differ in length.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        match *self {
            Self::Bools(grid) => rectangular(grid),
            Self::Chars { grid, .. } | Self::CharSet { grid, .. } => rectangular(grid),
            Self::Ints { grid, .. } => rectangular(grid),
            Self::Floats { grid, .. } => rectangular(grid),
        }
    }

    /// Check whether cell `(x, y)` is on. The cell must exist.
    fn is_on(&self, x: usize, y: usize) -> bool {
        match *self {
            Self::Bools(grid) => grid[x][y],
            Self::Chars { grid, on } => grid[x][y] == on,
            Self::CharSet { grid, on } => on.contains(&grid[x][y]),
            Self::Ints { grid, lower, upper } => (lower..upper).contains(&i64::from(grid[x][y])),
            Self::Floats { grid, lower, upper } => {
                let v = grid[x][y];
                v >= lower && v < upper
            }
        }
    }
}

fn rectangular<T>(grid: &[Vec<T>]) -> Result<(usize, usize)> {
    let height = grid.first().map_or(0, Vec::len);
    for (column, cells) in grid.iter().enumerate() {
        if cells.len() != height {
            return Err(Error::RaggedGrid {
                column,
                expected: height,
                actual: cells.len(),
            });
        }
    }
    Ok((grid.len(), height))
}

/// Characters used when rendering a region as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMapping {
    /// Character for on cells
    pub on: char,
    /// Character for off cells
    pub off: char,
}

impl Default for CharMapping {
    /// Floor-and-wall style: `.` on, `#` off.
    fn default() -> Self {
        Self { on: '.', off: '#' }
    }
}

impl CharMapping {
    /// Create a mapping from the on and off characters.
    pub fn new(on: char, off: char) -> Self {
        Self { on, off }
    }

    /// Set the character for on cells
    pub fn with_on(mut self, on: char) -> Self {
        self.on = on;
        self
    }

    /// Set the character for off cells
    pub fn with_off(mut self, off: char) -> Self {
        self.off = off;
        self
    }
}

impl Region {
    /// Create a region from a grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{GridSource, Region};
    ///
    /// let heights = vec![vec![0, 3, 7], vec![5, 1, 3]];
    /// let region = Region::from_grid(GridSource::ints_equal(&heights, 3)).unwrap();
    /// assert_eq!((region.width(), region.height()), (2, 3));
    /// assert!(region.contains(0, 1) && region.contains(1, 2));
    /// assert_eq!(region.size(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedGrid`] if the columns differ in length.
    pub fn from_grid(source: GridSource<'_>) -> Result<Self> {
        let mut region = Region::default();
        region.refill(source)?;
        Ok(region)
    }

    /// Create a region where cells equal to `on` are on.
    pub fn from_chars(grid: &[Vec<char>], on: char) -> Result<Self> {
        Self::from_grid(GridSource::Chars { grid, on })
    }

    /// Replace this region's contents with a grid, resizing to match it.
    ///
    /// Storage is reused when the grid has this region's dimensions. On error
    /// the region is left unchanged.
    pub fn refill(&mut self, source: GridSource<'_>) -> Result<&mut Self> {
        let (width, height) = source.dimensions()?;
        self.resize_and_empty(width, height);
        for x in 0..width {
            for y in 0..height {
                if source.is_on(x, y) {
                    self.set_unchecked(x, y);
                }
            }
        }
        Ok(self)
    }

    /// Grid of `true` for on cells, indexed `[x][y]`.
    pub fn to_bools(&self) -> Vec<Vec<bool>> {
        self.grid_of(true, false)
    }

    /// Grid of characters, indexed `[x][y]`.
    pub fn to_chars(&self, mapping: CharMapping) -> Vec<Vec<char>> {
        self.grid_of(mapping.on, mapping.off)
    }

    fn grid_of<T: Copy>(&self, on: T, off: T) -> Vec<Vec<T>> {
        let mut grid = vec![vec![off; self.height]; self.width];
        for cell in self.iter() {
            grid[cell.x as usize][cell.y as usize] = on;
        }
        grid
    }

    /// Text picture of the region, one line per row `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{CharMapping, Coord, Region};
    ///
    /// let region = Region::from_point(3, 2, Coord::new(1, 0));
    /// assert_eq!(region.render(CharMapping::default()), "#.#\n###");
    /// assert_eq!(region.render(CharMapping::new('1', '0')), "010\n000");
    /// ```
    pub fn render(&self, mapping: CharMapping) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            if y > 0 {
                text.push('\n');
            }
            for x in 0..self.width {
                let on = self.contains(x as i32, y as i32);
                text.push(if on { mapping.on } else { mapping.off });
            }
        }
        text
    }

    /// A copy of `grid` with `value` written at every on cell.
    ///
    /// Cells outside the overlap of the grid and the region are untouched.
    pub fn write_values<T: Clone>(&self, grid: &[Vec<T>], value: T) -> Vec<Vec<T>> {
        let mut copy = grid.to_vec();
        self.write_values_into(&mut copy, value);
        copy
    }

    /// Write `value` into `grid` at every on cell.
    pub fn write_values_into<T: Clone>(&self, grid: &mut [Vec<T>], value: T) {
        for cell in self.iter() {
            if let Some(slot) = grid
                .get_mut(cell.x as usize)
                .and_then(|column| column.get_mut(cell.y as usize))
            {
                *slot = value.clone();
            }
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CharMapping::default()))
    }
}
