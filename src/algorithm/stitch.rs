//! Stitching placed tiles into one picture with tile borders removed

use ndarray::Array2;

use crate::io::error::{Result, integrity_violation};
use crate::io::parser::pixel_symbol;
use crate::spatial::grid::PlacedGrid;
use crate::spatial::tile::TileSet;

/// Concatenate the oriented tiles of `grid`, dropping each tile's outer ring
///
/// The result is square with side `grid.side() * (tile_side - 2)`.
///
/// # Errors
///
/// Returns `IntegrityViolation` if the grid names a tile missing from `tiles`
pub fn stitch(grid: &PlacedGrid, tiles: &TileSet) -> Result<Array2<bool>> {
    let inner = tiles.tile_side().saturating_sub(2);
    let size = grid.side() * inner;
    let mut image = Array2::from_elem((size, size), false);

    for ((row, col), placement) in grid.cells().indexed_iter() {
        let view = tiles
            .get(placement.tile_id)
            .map(|tile| tile.oriented(placement.orientation))
            .ok_or_else(|| {
                integrity_violation(&format!(
                    "placed tile {} at ({row}, {col}) is not in the tile set",
                    placement.tile_id
                ))
            })?;

        for r in 0..inner {
            for c in 0..inner {
                if let Some(pixel) = image.get_mut((row * inner + r, col * inner + c)) {
                    *pixel = view.get(r + 1, c + 1).unwrap_or(false);
                }
            }
        }
    }

    Ok(image)
}

/// Render pixels as text, one line per row, without a trailing newline
pub fn render(image: &Array2<bool>) -> String {
    image
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&pixel| pixel_symbol(pixel))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
