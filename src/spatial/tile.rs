//! Square pixel tiles and the validated set a puzzle is made of

use ndarray::{Array2, ArrayView2, Axis};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::io::error::{Result, integrity_violation, malformed_input};
use crate::io::parser::pixel_symbol;
use crate::spatial::edge::Edge;
use crate::spatial::orientation::{Orientation, OrientedView};

/// Numeric tile identity as written in the tile header
pub type TileId = u64;

/// An immutable square grid of pixels with a stable id
///
/// Tiles are identified by id alone: two tiles with the same pixels but
/// different ids are different tiles, and equality ignores pixel content.
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    pixels: Array2<bool>,
}

impl Tile {
    /// Create a tile from square pixels
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if `pixels` is empty or not square
    pub fn new(id: TileId, pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(malformed_input(None, &format!("tile {id} has no pixels")));
        }
        if rows != cols {
            return Err(malformed_input(
                None,
                &format!("tile {id} is {rows}x{cols}, tiles must be square"),
            ));
        }
        Ok(Self { id, pixels })
    }

    /// Tile id
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in pixels
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Raw, unoriented pixels
    pub fn pixels(&self) -> ArrayView2<'_, bool> {
        self.pixels.view()
    }

    /// Number of filled pixels
    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }

    /// Allocation-free view of the tile under `orientation`
    pub fn oriented(&self, orientation: Orientation) -> OrientedView<'_> {
        OrientedView::new(self.pixels.view(), orientation)
    }

    /// The four raw borders, top, right, bottom, left
    pub fn edges(&self) -> [Edge; 4] {
        self.oriented(Orientation::Identity).edges()
    }

    /// A copy of the tile turned a quarter clockwise
    #[must_use]
    pub fn rotate90(&self) -> Self {
        // new[r][c] = old[n-1-c][r]: transpose, then reverse the columns
        let mut view = self.pixels.t();
        view.invert_axis(Axis(1));
        Self {
            id: self.id,
            pixels: view.to_owned(),
        }
    }

    /// A copy of the tile mirrored left-right
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        let mut view = self.pixels.view();
        view.invert_axis(Axis(1));
        Self {
            id: self.id,
            pixels: view.to_owned(),
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile {}:", self.id)?;
        for row in self.pixels.rows() {
            let line: String = row.iter().map(|&pixel| pixel_symbol(pixel)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Every tile of one puzzle, keyed and ordered by id
///
/// Guarantees at least one tile, unique ids and a shared side length.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: BTreeMap<TileId, Tile>,
    tile_side: usize,
}

impl TileSet {
    /// Collect tiles into a set
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if there are no tiles, an id repeats, or the
    /// tiles do not all share one side length
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        let mut tile_side = None;

        for tile in tiles {
            match tile_side {
                None => tile_side = Some(tile.side()),
                Some(side) if side != tile.side() => {
                    return Err(malformed_input(
                        None,
                        &format!(
                            "tile {} is {}x{} but earlier tiles are {side}x{side}",
                            tile.id,
                            tile.side(),
                            tile.side()
                        ),
                    ));
                }
                Some(_) => {}
            }

            match by_id.entry(tile.id) {
                Entry::Occupied(_) => {
                    return Err(malformed_input(
                        None,
                        &format!("tile id {} appears more than once", tile.id),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(tile);
                }
            }
        }

        let tile_side = tile_side.ok_or_else(|| malformed_input(None, &"input has no tiles"))?;

        Ok(Self {
            tiles: by_id,
            tile_side,
        })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the set has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Side length of the square grid of tiles
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if the tile count is not a perfect square
    pub fn grid_side(&self) -> Result<usize> {
        let count = self.tiles.len();
        let side = count.isqrt();
        if side * side == count {
            Ok(side)
        } else {
            Err(integrity_violation(&format!(
                "{count} tiles cannot form a square grid"
            )))
        }
    }

    /// Tile with `id`, if present
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Tile with `id`
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if no tile has that id
    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.get(id)
            .ok_or_else(|| integrity_violation(&format!("unknown tile id {id}")))
    }

    /// Tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Tile ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }
}
