//! textmask-morph - Binary morphology
//!
//! - Structuring elements (SEL) defining the operation neighborhood
//! - Word-level binary erosion

pub mod binary;
mod error;
pub mod sel;

pub use binary::{erode, erode_brick};
pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};
