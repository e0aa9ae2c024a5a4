//! Input format constants and runtime configuration defaults

// Tile-list text format
/// Prefix of the line introducing each tile block
pub const TILE_HEADER_PREFIX: &str = "Tile ";
/// Terminator of the tile header line
pub const TILE_HEADER_SUFFIX: char = ':';
/// Symbol for a filled pixel
pub const FILLED_SYMBOL: char = '#';
/// Symbol for an empty pixel
pub const EMPTY_SYMBOL: char = '.';

/// Pattern searched for in the stitched image
///
/// Only `#` cells are significant; leading and trailing spaces are part of the
/// pattern's footprint.
pub const SEA_MONSTER: &str = "                  # \n#    ##    ##    ###\n #  #  #  #  #  #   ";

// Synthetic puzzles
/// Smallest tile side the synthetic generator supports
pub const MIN_SYNTHETIC_TILE_SIDE: usize = 5;
/// First id handed out to synthetic tiles
pub const SYNTHETIC_ID_BASE: u64 = 1000;

// Batch processing
/// Extension of puzzle files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_stitched";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// PNG export colours (RGBA)
/// Colour of filled pixels
pub const FILLED_COLOR: [u8; 4] = [20, 60, 120, 255];
/// Colour of empty pixels
pub const EMPTY_COLOR: [u8; 4] = [230, 240, 250, 255];
/// Colour of pixels covered by a pattern occurrence
pub const HIGHLIGHT_COLOR: [u8; 4] = [220, 60, 40, 255];
