//! Regression test parameters and operations

use bitregion::Region;
use tracing_subscriber::EnvFilter;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Display mode - also print the regions being compared
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Install a log subscriber for tests, once per process.
///
/// Output goes through the test writer so it is captured per test; the
/// filter comes from `RUST_LOG` and defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Fails harmlessly when another test already installed it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "split")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "split")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        init_logging();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two regions for exact equality
    ///
    /// Reports a dimension mismatch, or the first cell in storage order
    /// where the regions differ.
    ///
    /// # Returns
    ///
    /// `true` if the regions are identical, `false` otherwise.
    pub fn compare_regions(&mut self, expected: &Region, actual: &Region) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("index {} expected:\n{}", self.index, expected);
            eprintln!("index {} actual:\n{}", self.index, actual);
        }

        if expected.width() != actual.width() || expected.height() != actual.height() {
            self.fail(format!(
                "Failure in {}_reg: region comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let difference = expected.copy_with(|r| r.xor(actual));
        if let Some(cell) = difference.first() {
            self.fail(format!(
                "Failure in {}_reg: region comparison for index {} - {} cells differ, \
                 first at {} (expected {}, got {})",
                self.test_name,
                self.index,
                difference.size(),
                cell,
                if expected.contains_coord(cell) { "on" } else { "off" },
                if actual.contains_coord(cell) { "on" } else { "off" },
            ));
            return false;
        }

        true
    }

    /// Compare two strings
    ///
    /// # Returns
    ///
    /// `true` if the strings are identical, `false` otherwise.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
