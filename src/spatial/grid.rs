//! The placed grid: every tile of a solved puzzle with its resolved orientation

use ndarray::{Array2, ArrayView2};
use std::fmt;

use crate::io::error::{Result, computation_error};
use crate::spatial::orientation::{Orientation, OrientedView};
use crate::spatial::tile::{TileId, TileSet};

/// A tile id together with the orientation it was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Placed tile
    pub tile_id: TileId,
    /// Orientation the tile is seen in at its cell
    pub orientation: Orientation,
}

/// Row-major N×N arrangement of placed tiles
///
/// Built once the last cell is known and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedGrid {
    cells: Array2<Placement>,
}

impl PlacedGrid {
    /// Build a grid from `side * side` placements in row-major order
    ///
    /// # Errors
    ///
    /// Returns a computation error if the number of placements is not `side * side`
    pub fn from_row_major(side: usize, placements: Vec<Placement>) -> Result<Self> {
        let cells = Array2::from_shape_vec((side, side), placements)
            .map_err(|e| computation_error("placed grid construction", &e))?;
        Ok(Self { cells })
    }

    /// Number of tiles along each side
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Placement at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<&Placement> {
        self.cells.get((row, col))
    }

    /// All placements as a 2D view
    pub fn cells(&self) -> ArrayView2<'_, Placement> {
        self.cells.view()
    }

    /// Placements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.cells.iter()
    }

    /// Ids of the tiles at the four corners: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side().saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&(row, col)| self.get(row, col))
            .map(|placement| placement.tile_id)
            .collect()
    }

    /// The tile at (`row`, `col`) seen in its placed orientation
    pub fn oriented<'a>(&self, row: usize, col: usize, tiles: &'a TileSet) -> Option<OrientedView<'a>> {
        let placement = self.get(row, col)?;
        tiles
            .get(placement.tile_id)
            .map(|tile| tile.oriented(placement.orientation))
    }

    /// Displayable arrangement of tile ids, one grid row per line
    pub const fn display_ids(&self) -> DisplayIds<'_> {
        DisplayIds { grid: self }
    }
}

/// Formats a [`PlacedGrid`] as rows of tile ids
#[derive(Debug)]
pub struct DisplayIds<'a> {
    grid: &'a PlacedGrid,
}

impl fmt::Display for DisplayIds<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|placement| placement.tile_id.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
