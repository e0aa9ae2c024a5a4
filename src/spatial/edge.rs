//! Tile border edges stored as bit strings
//!
//! An edge is read in a fixed direction: left-to-right for horizontal borders
//! and top-to-bottom for vertical ones. Matching never relies on incidental
//! direction, so callers compare forward and reversed forms explicitly.

use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::io::error::PuzzleError;
use crate::io::parser::{parse_pixel, pixel_symbol};

/// One border of a tile, `true` for filled pixels
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    bits: BitVec,
}

impl Edge {
    /// Build an edge from pixels in reading order
    pub fn from_pixels(pixels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: pixels.into_iter().collect(),
        }
    }

    /// Number of pixels along the edge
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the edge has no pixels
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pixel at `index` in reading order
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).as_deref().copied()
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.reverse();
        Self { bits }
    }

    /// Direction-independent key: the smaller of the forward and reversed forms
    #[must_use]
    pub fn canonical(&self) -> Self {
        let reversed = self.reversed();
        if reversed < *self {
            reversed
        } else {
            self.clone()
        }
    }

    /// Test if two edges match when either is read forward or reversed
    pub fn is_compatible(&self, other: &Self) -> bool {
        self == other || *self == other.reversed()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", pixel_symbol(*bit))?;
        }
        Ok(())
    }
}

impl FromStr for Edge {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|symbol| parse_pixel(symbol, None))
            .collect::<Result<BitVec, _>>()
            .map(|bits| Self { bits })
    }
}
