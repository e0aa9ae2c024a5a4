//! PNG export of stitched pictures

use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

use crate::io::configuration::{EMPTY_COLOR, FILLED_COLOR, HIGHLIGHT_COLOR};
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Export pixels as a PNG, one image pixel per picture pixel
///
/// Pixels set in `highlight` (same shape as `image`) are drawn in the
/// highlight colour, e.g. the cells covered by a pattern scan.
///
/// # Errors
///
/// Returns an error if:
/// - The picture is empty or larger than PNG dimensions allow
/// - `highlight` does not have the picture's shape
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: &Array2<bool>,
    highlight: Option<&Array2<bool>>,
    output_path: &Path,
) -> Result<()> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &"nothing to export",
        ));
    }
    if let Some(mask) = highlight {
        if mask.dim() != image.dim() {
            let (mask_rows, mask_cols) = mask.dim();
            return Err(invalid_parameter(
                "highlight",
                &format!("{mask_rows}x{mask_cols}"),
                &format!("must match the {rows}x{cols} picture"),
            ));
        }
    }

    let width = u32::try_from(cols).map_err(|e| invalid_parameter("image width", &cols, &e))?;
    let height = u32::try_from(rows).map_err(|e| invalid_parameter("image height", &rows, &e))?;

    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let position = (y as usize, x as usize);
        let highlighted = highlight
            .and_then(|mask| mask.get(position).copied())
            .unwrap_or(false);
        let color = match image.get(position).copied() {
            _ if highlighted => HIGHLIGHT_COLOR,
            Some(true) => FILLED_COLOR,
            _ => EMPTY_COLOR,
        };
        Rgba(color)
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
