//! Edge index: which tiles own an edge, independent of reading direction

use std::collections::HashMap;

use crate::io::error::{Result, integrity_violation};
use crate::spatial::edge::Edge;
use crate::spatial::tile::{Tile, TileId, TileSet};

/// Mapping from canonical edge to the tiles owning it
///
/// Built from raw, unoriented tiles. Each edge is stored once under
/// [`Edge::canonical`], so lookups match either reading direction. After
/// construction every key has one owner (a border of the picture) or two
/// (a seam between neighbours).
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    owners: HashMap<Edge, Vec<TileId>>,
}

impl EdgeIndex {
    /// Index the four raw edges of every tile
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if any edge is owned by three or more tiles
    pub fn build(tiles: &TileSet) -> Result<Self> {
        let mut owners: HashMap<Edge, Vec<TileId>> = HashMap::new();

        for tile in tiles.iter() {
            for edge in tile.edges() {
                let ids = owners.entry(edge.canonical()).or_default();
                // A tile may repeat one of its own edges; it still owns it once
                if !ids.contains(&tile.id()) {
                    ids.push(tile.id());
                }
            }
        }

        if let Some((edge, ids)) = owners.iter().find(|(_, ids)| ids.len() > 2) {
            let mut ids = ids.clone();
            ids.sort_unstable();
            return Err(integrity_violation(&format!(
                "edge {edge} is shared by {} tiles ({})",
                ids.len(),
                ids.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(Self { owners })
    }

    /// Tiles owning `edge` read in either direction, in ascending id order
    pub fn owners_of(&self, edge: &Edge) -> &[TileId] {
        self.owners
            .get(&edge.canonical())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Test if `edge` belongs to exactly one tile, i.e. lies on the picture's border
    pub fn is_unmatched(&self, edge: &Edge) -> bool {
        self.owners_of(edge).len() == 1
    }

    /// Number of raw edges of `tile` that no other tile shares
    pub fn unmatched_count(&self, tile: &Tile) -> usize {
        tile.edges()
            .iter()
            .filter(|edge| self.is_unmatched(edge))
            .count()
    }

    /// Number of distinct canonical edges
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Test if no edges are indexed
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Canonical edges with their owners, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &[TileId])> {
        self.owners.iter().map(|(edge, ids)| (edge, ids.as_slice()))
    }
}
