//! Corner and border classification from unmatched edge counts
//!
//! An edge owned by a single tile lies on the outer frame of the picture.
//! Corner tiles have two such edges, other frame tiles one, interior tiles none.

use crate::algorithm::index::EdgeIndex;
use crate::io::error::{Result, integrity_violation};
use crate::spatial::edge::Edge;
use crate::spatial::orientation::Side;
use crate::spatial::tile::{Tile, TileId, TileSet};

/// Number of corners of a rectangular jigsaw
pub const CORNER_COUNT: usize = 4;

/// Tiles partitioned by how many of their edges lie on the picture's frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Tiles with exactly two unmatched edges
    pub corners: Vec<TileId>,
    /// Tiles with exactly one unmatched edge
    pub borders: Vec<TileId>,
    /// Tiles whose every edge is shared
    pub interior: Vec<TileId>,
}

/// Partition every tile by its unmatched edge count, ids ascending
///
/// # Errors
///
/// Returns `IntegrityViolation` if a tile has three or more unmatched edges
pub fn classify(tiles: &TileSet, index: &EdgeIndex) -> Result<Classification> {
    let mut classification = Classification::default();

    for tile in tiles.iter() {
        match index.unmatched_count(tile) {
            0 => classification.interior.push(tile.id()),
            1 => classification.borders.push(tile.id()),
            2 => classification.corners.push(tile.id()),
            count => {
                return Err(integrity_violation(&format!(
                    "tile {} has {count} unmatched edges, at most 2 fit a square grid",
                    tile.id()
                )));
            }
        }
    }

    Ok(classification)
}

/// The four corner tiles, ids ascending
///
/// # Errors
///
/// Returns `IntegrityViolation` unless exactly four tiles have two unmatched edges
pub fn corner_tiles(tiles: &TileSet, index: &EdgeIndex) -> Result<Vec<TileId>> {
    let corners: Vec<TileId> = tiles
        .iter()
        .filter(|tile| index.unmatched_count(tile) == 2)
        .map(Tile::id)
        .collect();

    if corners.len() == CORNER_COUNT {
        Ok(corners)
    } else {
        Err(integrity_violation(&format!(
            "expected {CORNER_COUNT} corner tiles, found {}",
            corners.len()
        )))
    }
}

/// The raw edges of `tile` that no other tile shares, with the side they are on
pub fn border_edges_of(tile: &Tile, index: &EdgeIndex) -> Vec<(Side, Edge)> {
    Side::ALL
        .into_iter()
        .zip(tile.edges())
        .filter(|(_, edge)| index.is_unmatched(edge))
        .collect()
}
