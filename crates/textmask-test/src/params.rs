//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use textmask_core::Pix;

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and every
/// failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "contour")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {test_name}_reg   ///////////////");
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {failure}", self.test_name);
        self.failures.push(failure);
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
        if (expected - actual).abs() > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two Pix images for exact equality
    ///
    /// Dimensions and depth must agree and every pixel must match. The
    /// failure message names the first mismatching pixel and the total
    /// number of mismatches.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let reason = format!(
                "size mismatch: {}x{}x{} vs {}x{}x{}",
                pix1.width(),
                pix1.height(),
                pix1.depth().bits(),
                pix2.width(),
                pix2.height(),
                pix2.depth().bits()
            );
            self.record(TestError::PixMismatch {
                index: self.index,
                reason,
            });
            return false;
        }

        let mut first = None;
        let mut count = 0usize;
        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                if pix1.get_pixel_unchecked(x, y) != pix2.get_pixel_unchecked(x, y) {
                    first.get_or_insert((x, y));
                    count += 1;
                }
            }
        }

        match first {
            None => true,
            Some((x, y)) => {
                self.record(TestError::PixMismatch {
                    index: self.index,
                    reason: format!("{count} pixels differ, first at ({x}, {y})"),
                });
                false
            }
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            self.record(TestError::CheckFailed {
                index: self.index,
                what: what.to_string(),
            });
        }
        ok
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    /// Finish the test, returning the first failure if any
    pub fn into_result(self) -> TestResult<()> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.is_success() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {failure}");
            }
        }
        eprintln!();
        self.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmask_core::{PixMut, PixelDepth};

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert!(matches!(
            rp.failures()[0],
            TestError::ValueMismatch { index: 1, .. }
        ));
    }

    #[test]
    fn test_compare_pix() {
        let a = Pix::new(4, 3, PixelDepth::Bit8).unwrap();
        let mut pm = PixMut::new(4, 3, PixelDepth::Bit8).unwrap();
        pm.set_pixel(2, 1, 5).unwrap();
        let b: Pix = pm.into();
        let c = Pix::new(3, 3, PixelDepth::Bit8).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(!rp.compare_pix(&a, &c));
        assert_eq!(rp.failures().len(), 2);
        match &rp.failures()[0] {
            TestError::PixMismatch { index, reason } => {
                assert_eq!(*index, 2);
                assert!(reason.contains("(2, 1)"));
            }
            other => panic!("unexpected failure {other:?}"),
        }
    }

    #[test]
    fn test_into_result() {
        let mut rp = RegParams::new("test");
        rp.check(true, "fine");
        assert!(rp.into_result().is_ok());

        let mut rp = RegParams::new("test");
        rp.check(false, "broken");
        assert_eq!(
            rp.into_result(),
            Err(TestError::CheckFailed {
                index: 1,
                what: "broken".to_string()
            })
        );
    }
}
