//! Reassembly pipeline from edge matching to the stitched picture

/// Tile placement row by row from an anchored corner
pub mod assembler;
/// Corner, border and interior classification by unmatched edges
pub mod classifier;
/// Solved puzzle and the queries answered from it
pub mod executor;
/// Orientation-independent lookup of tiles by edge
pub mod index;
/// Concatenation of placed tiles without their borders
pub mod stitch;
