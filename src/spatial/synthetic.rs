//! Deterministic synthetic puzzles for tests and benchmarks
//!
//! A picture is cut into `grid_side`² tiles whose shared borders ("seams") are
//! all distinct. Each seam carries a filled marker at position 1 and empty
//! pixels at both ends and at position `tile_side - 2`, so no seam equals
//! another seam read backwards. Every tile is then rotated or mirrored and
//! given an id unrelated to its position.

use ndarray::Array2;

use crate::io::configuration::{MIN_SYNTHETIC_TILE_SIDE, SYNTHETIC_ID_BASE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::orientation::{Orientation, OrientedView};
use crate::spatial::tile::{Tile, TileId, TileSet};

/// Scrambled tiles cut from the picture returned by [`expected_image`]
///
/// # Errors
///
/// Returns an invalid parameter error if `grid_side` is zero, `tile_side` is
/// below the supported minimum, or the tiles are too small to give every seam
/// a distinct pattern
pub fn scrambled_puzzle(grid_side: usize, tile_side: usize) -> Result<TileSet> {
    validate(grid_side, tile_side)?;

    let tiles = (0..grid_side * grid_side)
        .map(|position| {
            let (row, col) = (position / grid_side, position % grid_side);
            let original = original_tile(grid_side, tile_side, row, col);
            let orientation = Orientation::ALL
                .get((position * 5 + 3) % Orientation::ALL.len())
                .copied()
                .unwrap_or(Orientation::Identity);
            let pixels = OrientedView::new(original.view(), orientation).to_array();
            Tile::new(scrambled_id(position), pixels)
        })
        .collect::<Result<Vec<_>>>()?;

    TileSet::new(tiles)
}

/// The border-stripped picture the scrambled tiles were cut from
pub fn expected_image(grid_side: usize, tile_side: usize) -> Array2<bool> {
    let size = grid_side * tile_side.saturating_sub(2);
    Array2::from_shape_fn((size, size), |(row, col)| interior_pixel(row, col))
}

fn validate(grid_side: usize, tile_side: usize) -> Result<()> {
    if grid_side == 0 {
        return Err(invalid_parameter(
            "grid_side",
            &grid_side,
            &"must be at least 1",
        ));
    }
    if tile_side < MIN_SYNTHETIC_TILE_SIDE {
        return Err(invalid_parameter(
            "tile_side",
            &tile_side,
            &format!("must be at least {MIN_SYNTHETIC_TILE_SIDE}"),
        ));
    }

    let seams = 2 * grid_side * (grid_side + 1);
    let counter_bits = u32::try_from(tile_side - 4).unwrap_or(u32::MAX);
    let capacity = 1usize.checked_shl(counter_bits).unwrap_or(usize::MAX);
    if seams > capacity {
        return Err(invalid_parameter(
            "tile_side",
            &tile_side,
            &format!("too small to give {seams} seams distinct patterns"),
        ));
    }
    Ok(())
}

fn scrambled_id(position: usize) -> TileId {
    SYNTHETIC_ID_BASE + ((position as u64 * 11) ^ 5)
}

// Horizontal seams are numbered first, then vertical ones
fn horizontal_seam(grid_side: usize, row: usize, col: usize) -> usize {
    row * grid_side + col
}

fn vertical_seam(grid_side: usize, row: usize, col: usize) -> usize {
    grid_side * (grid_side + 1) + row * (grid_side + 1) + col
}

fn seam_pixel(seam: usize, index: usize, tile_side: usize) -> bool {
    match index {
        0 => false,
        1 => true,
        i if i + 2 >= tile_side => false,
        i => {
            let shift = u32::try_from(i - 2).unwrap_or(u32::MAX);
            seam.checked_shr(shift).unwrap_or(0) & 1 == 1
        }
    }
}

fn interior_pixel(row: usize, col: usize) -> bool {
    (row * 7 + col * 3 + row * col) % 5 == 0
}

fn original_tile(grid_side: usize, tile_side: usize, row: usize, col: usize) -> Array2<bool> {
    let last = tile_side - 1;
    let inner = tile_side - 2;
    Array2::from_shape_fn((tile_side, tile_side), |(i, j)| {
        if i == 0 {
            seam_pixel(horizontal_seam(grid_side, row, col), j, tile_side)
        } else if i == last {
            seam_pixel(horizontal_seam(grid_side, row + 1, col), j, tile_side)
        } else if j == 0 {
            seam_pixel(vertical_seam(grid_side, row, col), i, tile_side)
        } else if j == last {
            seam_pixel(vertical_seam(grid_side, row, col + 1), i, tile_side)
        } else {
            interior_pixel(row * inner + i - 1, col * inner + j - 1)
        }
    })
}
