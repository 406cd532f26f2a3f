//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological operations.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - must match foreground (set pixels)
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
/// The origin (cx, cy) is the reference point for the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create a new structuring element of don't-care elements with the
    /// origin at the center.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive: {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
        })
    }

    /// Create a rectangular "brick" structuring element with all hits
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (cx, cy, width) = (self.cx as i32, self.cy as i32, self.width);
        self.data
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == SelElement::Hit)
            .map(move |(idx, _)| {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                (x - cx, y - cy)
            })
    }
}
