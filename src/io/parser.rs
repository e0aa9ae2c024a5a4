//! Tile-list text format
//!
//! ```text
//! Tile 2311:
//! ..##.#..#.
//! ##..#.....
//! ...
//!
//! Tile 1951:
//! ...
//! ```
//!
//! Blocks are separated by blank lines. Trailing whitespace and CRLF line
//! endings are tolerated.

use ndarray::Array2;
use std::str::FromStr;

use crate::io::configuration::{
    EMPTY_SYMBOL, FILLED_SYMBOL, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX,
};
use crate::io::error::{PuzzleError, Result, malformed_input};
use crate::spatial::tile::{Tile, TileId, TileSet};

/// Parse every tile block of `input`
///
/// # Errors
///
/// Returns `MalformedInput` naming the offending line for a bad header, an
/// unknown symbol, a pixel row outside a block, or a block that is not square;
/// and for an empty input, a repeated id or mixed tile sizes
pub fn parse_tiles(input: &str) -> Result<TileSet> {
    let mut tiles = Vec::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.is_empty() {
            if let Some(block) = pending.take() {
                tiles.push(block.finish()?);
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix(TILE_HEADER_PREFIX) {
            if let Some(block) = pending.take() {
                tiles.push(block.finish()?);
            }
            pending = Some(PendingTile {
                id: parse_id(rest, line_number)?,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        let Some(block) = pending.as_mut() else {
            return Err(malformed_input(
                Some(line_number),
                &"pixel row outside of a tile block",
            ));
        };
        block.rows.push(parse_row(line, line_number)?);
    }

    if let Some(block) = pending.take() {
        tiles.push(block.finish()?);
    }

    TileSet::new(tiles)
}

impl FromStr for TileSet {
    type Err = PuzzleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_tiles(s)
    }
}

// A tile block whose pixel rows are still being read
struct PendingTile {
    id: TileId,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

impl PendingTile {
    fn finish(self) -> Result<Tile> {
        let side = self.rows.len();
        if side == 0 {
            return Err(malformed_input(
                Some(self.header_line),
                &format!("tile {} has no pixel rows", self.id),
            ));
        }

        if let Some((offset, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != side)
        {
            return Err(malformed_input(
                Some(self.header_line + 1 + offset),
                &format!(
                    "tile {} has {side} rows but this row has {} pixels",
                    self.id,
                    row.len()
                ),
            ));
        }

        let pixels = Array2::from_shape_vec((side, side), self.rows.concat())
            .map_err(|e| malformed_input(Some(self.header_line), &e))?;
        Tile::new(self.id, pixels)
    }
}

fn parse_id(rest: &str, line_number: usize) -> Result<TileId> {
    let digits = rest
        .strip_suffix(TILE_HEADER_SUFFIX)
        .ok_or_else(|| {
            malformed_input(
                Some(line_number),
                &format!("tile header must end with '{TILE_HEADER_SUFFIX}'"),
            )
        })?
        .trim();

    digits.parse::<TileId>().map_err(|e| {
        malformed_input(
            Some(line_number),
            &format!("invalid tile id '{digits}': {e}"),
        )
    })
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .map(|symbol| parse_pixel(symbol, Some(line_number)))
        .collect()
}

/// Pixel value of one picture symbol, `true` for filled
///
/// # Errors
///
/// Returns `MalformedInput`, naming `line_number` when known, for any symbol
/// other than the filled and empty ones
pub fn parse_pixel(symbol: char, line_number: Option<usize>) -> Result<bool> {
    match symbol {
        FILLED_SYMBOL => Ok(true),
        EMPTY_SYMBOL => Ok(false),
        other => Err(malformed_input(
            line_number,
            &format!("unexpected symbol '{other}'"),
        )),
    }
}

/// Symbol written for a pixel
pub const fn pixel_symbol(filled: bool) -> char {
    if filled { FILLED_SYMBOL } else { EMPTY_SYMBOL }
}
