//! Sequential grid assembly
//!
//! Starting from one corner anchored at the top-left, cells are filled in
//! row-major order. A cell inside a row is found through the right edge of its
//! left neighbour; the first cell of a row through the bottom edge of the cell
//! above it. Exactly one unplaced tile may own the needed edge, and among its
//! 8 orientations the first one that fits every constraint of the cell wins.

use std::collections::HashSet;

use crate::algorithm::classifier::{border_edges_of, corner_tiles};
use crate::algorithm::index::EdgeIndex;
use crate::io::error::{PuzzleError, Result, integrity_violation};
use crate::spatial::edge::Edge;
use crate::spatial::grid::{PlacedGrid, Placement};
use crate::spatial::orientation::{Orientation, OrientedView, Side};
use crate::spatial::tile::{Tile, TileId, TileSet};

/// Assemble every tile into a square grid
///
/// The seed is the smallest corner id, oriented by [`seed_orientation`].
///
/// # Errors
///
/// Returns `IntegrityViolation` if the tile count is not a perfect square or
/// there are not exactly four corners, and `UnsolvableArrangement` or
/// `AmbiguousArrangement` if a cell has no single fitting tile
pub fn assemble(tiles: &TileSet, index: &EdgeIndex) -> Result<PlacedGrid> {
    let corners = corner_tiles(tiles, index)?;
    Assembler::new(tiles, index)?.assemble(&corners)
}

/// First orientation in [`Orientation::ALL`] turning the tile's border edges to the top and left
pub fn seed_orientation(tile: &Tile, index: &EdgeIndex) -> Option<Orientation> {
    let border: Vec<Edge> = border_edges_of(tile, index)
        .into_iter()
        .map(|(_, edge)| edge.canonical())
        .collect();

    Orientation::ALL.into_iter().find(|&orientation| {
        let view = tile.oriented(orientation);
        [Side::Top, Side::Left]
            .into_iter()
            .all(|side| border.contains(&view.edge(side).canonical()))
    })
}

/// Single-writer builder of a [`PlacedGrid`]
#[derive(Debug)]
pub struct Assembler<'a> {
    tiles: &'a TileSet,
    index: &'a EdgeIndex,
    side: usize,
    placements: Vec<Placement>,
    placed: HashSet<TileId>,
}

/// Edge requirements of one cell, in the candidate's oriented frame
struct CellConstraints {
    cell: [usize; 2],
    left: Option<Edge>,
    top: Option<Edge>,
    last_col: bool,
    last_row: bool,
}

impl<'a> Assembler<'a> {
    /// Prepare an empty grid for `tiles`
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if the tile count is not a perfect square
    pub fn new(tiles: &'a TileSet, index: &'a EdgeIndex) -> Result<Self> {
        let side = tiles.grid_side()?;
        Ok(Self {
            tiles,
            index,
            side,
            placements: Vec::with_capacity(side * side),
            placed: HashSet::with_capacity(side * side),
        })
    }

    /// Fill the grid starting from the smallest of `corners`
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if `corners` is empty or names an unknown
    /// tile, and `UnsolvableArrangement` or `AmbiguousArrangement` if a cell
    /// has no single fitting tile
    pub fn assemble(mut self, corners: &[TileId]) -> Result<PlacedGrid> {
        let seed = corners
            .iter()
            .copied()
            .min()
            .ok_or_else(|| integrity_violation(&"no corner tile to anchor the grid"))?;
        let seed_tile = self.tiles.tile(seed)?;
        let orientation = seed_orientation(seed_tile, self.index).ok_or_else(|| {
            PuzzleError::UnsolvableArrangement {
                cell: [0, 0],
                reason: format!(
                    "corner tile {seed} has no orientation with unmatched top and left edges"
                ),
            }
        })?;
        let constraints = self.constraints(0, 0)?;
        if !self.fits(&seed_tile.oriented(orientation), &constraints) {
            return Err(PuzzleError::UnsolvableArrangement {
                cell: [0, 0],
                reason: format!("corner tile {seed} does not fit a {0}x{0} grid", self.side),
            });
        }
        self.place(seed, orientation);

        for position in 1..self.side * self.side {
            let (row, col) = (position / self.side, position % self.side);
            let constraints = self.constraints(row, col)?;
            let Some(needed) = constraints.left.as_ref().or(constraints.top.as_ref()) else {
                return Err(PuzzleError::UnsolvableArrangement {
                    cell: constraints.cell,
                    reason: "cell has no placed neighbour".to_string(),
                });
            };
            let candidate = self.unique_candidate(constraints.cell, needed)?;
            let orientation = self.orient(candidate, &constraints)?;
            self.place(candidate, orientation);
        }

        PlacedGrid::from_row_major(self.side, self.placements)
    }

    fn place(&mut self, tile_id: TileId, orientation: Orientation) {
        self.placed.insert(tile_id);
        self.placements.push(Placement {
            tile_id,
            orientation,
        });
    }

    // Edge of an already placed cell, seen in its placed orientation
    fn placed_edge(&self, row: usize, col: usize, side: Side) -> Result<Edge> {
        let placement = self
            .placements
            .get(row * self.side + col)
            .ok_or_else(|| PuzzleError::UnsolvableArrangement {
                cell: [row, col],
                reason: "cell has not been placed yet".to_string(),
            })?;
        let tile = self.tiles.tile(placement.tile_id)?;
        Ok(tile.oriented(placement.orientation).edge(side))
    }

    fn constraints(&self, row: usize, col: usize) -> Result<CellConstraints> {
        let left = if col > 0 {
            Some(self.placed_edge(row, col - 1, Side::Right)?)
        } else {
            None
        };
        let top = if row > 0 {
            Some(self.placed_edge(row - 1, col, Side::Bottom)?)
        } else {
            None
        };
        Ok(CellConstraints {
            cell: [row, col],
            left,
            top,
            last_col: col + 1 == self.side,
            last_row: row + 1 == self.side,
        })
    }

    // The one unplaced tile owning `needed`
    fn unique_candidate(&self, cell: [usize; 2], needed: &Edge) -> Result<TileId> {
        let candidates: Vec<TileId> = self
            .index
            .owners_of(needed)
            .iter()
            .copied()
            .filter(|id| !self.placed.contains(id))
            .collect();

        if candidates.len() > 1 {
            return Err(PuzzleError::AmbiguousArrangement { cell, candidates });
        }
        candidates
            .first()
            .copied()
            .ok_or_else(|| PuzzleError::UnsolvableArrangement {
                cell,
                reason: format!("no unplaced tile has edge {needed}"),
            })
    }

    fn orient(&self, tile_id: TileId, constraints: &CellConstraints) -> Result<Orientation> {
        let tile = self.tiles.tile(tile_id)?;
        Orientation::ALL
            .into_iter()
            .find(|&orientation| self.fits(&tile.oriented(orientation), constraints))
            .ok_or_else(|| PuzzleError::UnsolvableArrangement {
                cell: constraints.cell,
                reason: format!("no orientation of tile {tile_id} matches its neighbours"),
            })
    }

    // Shared sides must equal the neighbour's edge exactly; sides on the
    // picture's frame must be unmatched
    fn fits(&self, view: &OrientedView<'_>, constraints: &CellConstraints) -> bool {
        let side_fits = |side: Side, neighbour: Option<&Edge>, on_frame: bool| {
            let edge = view.edge(side);
            match neighbour {
                Some(expected) => edge == *expected,
                None if on_frame => self.index.is_unmatched(&edge),
                None => true,
            }
        };

        side_fits(Side::Left, constraints.left.as_ref(), true)
            && side_fits(Side::Top, constraints.top.as_ref(), true)
            && side_fits(Side::Right, None, constraints.last_col)
            && side_fits(Side::Bottom, None, constraints.last_row)
    }
}
