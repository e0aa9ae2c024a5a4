//! Reassembly of scrambled square image tiles into the picture they were cut from
//!
//! Tiles share borders with their neighbours, but each tile may have been
//! rotated or mirrored. The engine indexes every border independently of
//! reading direction, identifies the four corner tiles, and places tiles row by
//! row from an anchored corner, searching the 8 orientations of each candidate.

#![forbid(unsafe_code)]

/// Edge indexing, classification, assembly and stitching
pub mod algorithm;
/// Pattern search over stitched pictures
pub mod analysis;
/// Parsing, configuration, error handling and the command-line front end
pub mod io;
/// Tiles, edges, orientations and placed grids
pub mod spatial;

pub use algorithm::executor::{Reassembly, corner_checksum, stitched_image};
pub use io::error::{ErrorKind, PuzzleError, Result};
pub use spatial::tile::{Tile, TileId, TileSet};
