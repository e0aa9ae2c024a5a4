//! Reassembly pipeline and the two puzzle queries
//!
//! `tiles → EdgeIndex → Classification → PlacedGrid → stitched image`. The
//! corner checksum only needs the classification; the stitched image needs a
//! full assembly. [`Reassembly`] runs the pipeline once and answers both.

use ndarray::Array2;

use crate::algorithm::assembler::Assembler;
use crate::algorithm::classifier::{Classification, classify, corner_tiles};
use crate::algorithm::index::EdgeIndex;
use crate::algorithm::stitch::stitch;
use crate::io::error::{Result, computation_error};
use crate::spatial::grid::PlacedGrid;
use crate::spatial::tile::{TileId, TileSet};

/// A solved puzzle: index, classification and placed grid of one tile set
#[derive(Debug, Clone)]
pub struct Reassembly<'a> {
    tiles: &'a TileSet,
    index: EdgeIndex,
    classification: Classification,
    grid: PlacedGrid,
}

impl<'a> Reassembly<'a> {
    /// Run the full pipeline on `tiles`
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` for inconsistent tile data and
    /// `UnsolvableArrangement`/`AmbiguousArrangement` if assembly gets stuck
    pub fn solve(tiles: &'a TileSet) -> Result<Self> {
        let index = EdgeIndex::build(tiles)?;
        let classification = classify(tiles, &index)?;
        let corners = corner_tiles(tiles, &index)?;
        let grid = Assembler::new(tiles, &index)?.assemble(&corners)?;

        Ok(Self {
            tiles,
            index,
            classification,
            grid,
        })
    }

    /// Tiles the puzzle was solved from
    pub const fn tiles(&self) -> &'a TileSet {
        self.tiles
    }

    /// Edge index built from the raw tiles
    pub const fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// Corner, border and interior tiles
    pub const fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The assembled arrangement
    pub const fn grid(&self) -> &PlacedGrid {
        &self.grid
    }

    /// Product of the four corner tile ids
    ///
    /// # Errors
    ///
    /// Returns a computation error if the product overflows `u64`
    pub fn corner_checksum(&self) -> Result<u64> {
        checksum(&self.classification.corners)
    }

    /// The assembled picture with tile borders removed
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if the grid refers to an unknown tile
    pub fn stitched_image(&self) -> Result<Array2<bool>> {
        stitch(&self.grid, self.tiles)
    }
}

/// Product of the four corner tile ids, without assembling the grid
///
/// # Errors
///
/// Returns `IntegrityViolation` if an edge has three or more owners or there
/// are not exactly four corners, and a computation error on overflow
pub fn corner_checksum(tiles: &TileSet) -> Result<u64> {
    let index = EdgeIndex::build(tiles)?;
    checksum(&corner_tiles(tiles, &index)?)
}

/// Assemble `tiles` and stitch the border-trimmed picture
///
/// # Errors
///
/// Returns any error of [`Reassembly::solve`]
pub fn stitched_image(tiles: &TileSet) -> Result<Array2<bool>> {
    Reassembly::solve(tiles)?.stitched_image()
}

fn checksum(corners: &[TileId]) -> Result<u64> {
    corners.iter().try_fold(1u64, |product, &id| {
        product.checked_mul(id).ok_or_else(|| {
            computation_error(
                "corner checksum",
                &format!("product of corner ids {corners:?} overflows u64"),
            )
        })
    })
}
