//! bitregion-test - Regression test framework for bitregion
//!
//! Tests build regions, run operations on them and check the results through
//! a [`RegParams`], which numbers each check, records every failure and
//! reports them all at the end instead of stopping at the first one.
//!
//! Two modes are supported:
//!
//! - **Compare**: Check results and record failures (default)
//! - **Display**: Also print the regions being compared
//!
//! # Usage
//!
//! ```ignore
//! use bitregion_test::RegParams;
//!
//! let mut rp = RegParams::new("split");
//! rp.compare_values(3.0, parts.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Filter for library log output, e.g. `bitregion=trace`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use bitregion::{GridSource, Region};

/// Load a test map from the test data directory
///
/// Maps are text pictures, one line per row, where `.` marks an on cell and
/// any other character an off cell. Lines are padded with off cells to the
/// longest line.
///
/// # Arguments
///
/// * `name` - Map filename (e.g., "islands.txt")
pub fn load_test_region(name: &str) -> TestResult<Region> {
    let path = test_data_path(name);
    let text = std::fs::read_to_string(&path).map_err(|e| TestError::RegionLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    region_from_picture(&text).map_err(|e| TestError::RegionLoad {
        path,
        message: e.to_string(),
    })
}

/// Build a region from a text picture (rows of `.` for on cells)
pub fn region_from_picture(text: &str) -> bitregion::Result<Region> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns: Vec<Vec<char>> = (0..width)
        .map(|x| {
            rows.iter()
                .map(|row| row.get(x).copied().unwrap_or('#'))
                .collect()
        })
        .collect();
    Region::from_grid(GridSource::Chars {
        grid: &columns,
        on: '.',
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bitregion-test is at crates/bitregion-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/maps/{}", workspace_root(), name)
}
