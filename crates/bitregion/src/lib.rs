//! bitregion - Word-packed 2D on/off regions
//!
//! This crate stores a rectangular grid of on/off cells one bit per cell and
//! runs spatial operations over it 64 cells at a time:
//!
//! - [`Region`] - The grid itself, with cell access and bulk fills
//! - Set algebra - `or`, `and`, `and_not`, `not_and`, `xor`, `not`
//! - Morphology - expansion, retraction, fringes, surfaces, thinning,
//!   translation, flipping and zooming
//! - Connectivity - bounded flood fill, connected components, random spill
//! - Enumeration and sampling - storage order, Z-order, uniform random and
//!   evenly separated selection
//! - Encoding - grids of bools/chars/numbers, text pictures and a compact
//!   text format
//!
//! Coordinates are [`Coord`] values with signed components. Cells outside the
//! grid read as off and writes to them are ignored, so neighbors of border
//! cells need no special casing.
//!
//! # Example
//!
//! ```
//! use bitregion::{Connectivity, Coord, Region};
//!
//! let mut floor = Region::new(20, 10);
//! floor.insert_rectangle(1, 1, 18, 8).remove_rectangle(9, 1, 2, 7);
//!
//! let parts = floor.split();
//! assert_eq!(parts.len(), 1); // joined along the bottom row
//!
//! let mut reached = Region::from_point(20, 10, Coord::new(1, 1));
//! reached.flood_by(&floor, 5, Connectivity::FourWay);
//! assert!(reached.contains(6, 1));
//! assert!(!reached.contains(7, 1));
//! ```

pub mod bits;
mod coord;
pub mod error;
pub mod morton;
pub mod quasi;
mod region;

pub use coord::Coord;
pub use error::{Error, Result};
pub use region::{Cells, CharMapping, Connectivity, GridSource, Region, ZCurveCells};
