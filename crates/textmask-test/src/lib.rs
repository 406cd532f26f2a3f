//! textmask-test - Regression test harness
//!
//! Integration tests build their inputs in memory, run an operation and
//! record each comparison with [`RegParams`]. Every comparison gets a
//! running index so a failure report points at the exact check.
//!
//! # Usage
//!
//! ```
//! use textmask_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;
