//! Pattern search over the stitched picture
//!
//! The picture's true orientation is unknown after assembly, so the pattern is
//! looked for under each of the 8 orientations; the first orientation showing
//! at least one occurrence is taken as the right one. Pixels covered by any
//! occurrence are excluded from the roughness count.

use ndarray::Array2;

use crate::io::configuration::{FILLED_SYMBOL, SEA_MONSTER};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::orientation::{Orientation, OrientedView};

/// Footprint of filled pixels to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Read a pattern where `#` marks required filled pixels
    ///
    /// Every other character is "don't care"; whitespace counts towards the
    /// footprint, so lines must not be trimmed.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the pattern has no `#`
    pub fn parse(text: &str) -> Result<Self> {
        let offsets: Vec<(usize, usize)> = text
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, symbol)| symbol == FILLED_SYMBOL)
                    .map(move |(col, _)| (row, col))
            })
            .collect();

        if offsets.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &text,
                &"needs at least one filled pixel",
            ));
        }

        Ok(Self {
            height: text.lines().count(),
            width: text.lines().map(|line| line.chars().count()).max().unwrap_or(0),
            offsets,
        })
    }

    /// The sea monster hiding in assembled day-20 pictures
    ///
    /// # Errors
    ///
    /// Never fails for the built-in pattern; see [`Pattern::parse`]
    pub fn sea_monster() -> Result<Self> {
        Self::parse(SEA_MONSTER)
    }

    /// Rows spanned by the footprint
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the footprint
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of required filled pixels
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Test if the pattern has no required pixels
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Top-left positions of every occurrence in `view`, row-major
    pub fn occurrences(&self, view: &OrientedView<'_>) -> Vec<(usize, usize)> {
        let rows = (view.side() + 1).saturating_sub(self.height);
        let cols = (view.side() + 1).saturating_sub(self.width);

        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                self.offsets
                    .iter()
                    .all(|&(dr, dc)| view.get(row + dr, col + dc) == Some(true))
            })
            .collect()
    }
}

/// Outcome of scanning a picture for a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternScan {
    /// Orientation in which the occurrences were found
    pub orientation: Orientation,
    /// Top-left corners of occurrences, in the oriented picture's coordinates
    pub occurrences: Vec<(usize, usize)>,
    /// Pixels covered by an occurrence, in the original picture's coordinates
    pub covered: Array2<bool>,
    /// Filled pixels not covered by any occurrence
    pub roughness: usize,
}

/// Find `pattern` in the first orientation of `image` where it occurs
///
/// When no orientation shows the pattern the scan reports the identity
/// orientation, no occurrences and every filled pixel as rough.
///
/// # Errors
///
/// Returns an invalid parameter error if `image` is not square
pub fn scan(image: &Array2<bool>, pattern: &Pattern) -> Result<PatternScan> {
    let (rows, cols) = image.dim();
    if rows != cols {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &"pattern scan needs a square picture",
        ));
    }

    let filled = image.iter().filter(|&&pixel| pixel).count();
    let found = Orientation::ALL.into_iter().find_map(|orientation| {
        let view = OrientedView::new(image.view(), orientation);
        let occurrences = pattern.occurrences(&view);
        (!occurrences.is_empty()).then_some((orientation, occurrences))
    });

    let Some((orientation, occurrences)) = found else {
        return Ok(PatternScan {
            orientation: Orientation::Identity,
            occurrences: Vec::new(),
            covered: Array2::from_elem((rows, cols), false),
            roughness: filled,
        });
    };

    let mut covered = Array2::from_elem((rows, cols), false);
    for &(row, col) in &occurrences {
        for &(dr, dc) in &pattern.offsets {
            let source = orientation.source_position(row + dr, col + dc, rows);
            if let Some(pixel) = covered.get_mut(source) {
                *pixel = true;
            }
        }
    }
    let covered_count = covered.iter().filter(|&&pixel| pixel).count();

    Ok(PatternScan {
        orientation,
        occurrences,
        covered,
        roughness: filled.saturating_sub(covered_count),
    })
}

/// Filled pixels of `image` not part of any sea monster
///
/// # Errors
///
/// Returns an invalid parameter error if `image` is not square
pub fn water_roughness(image: &Array2<bool>) -> Result<usize> {
    Ok(scan(image, &Pattern::sea_monster()?)?.roughness)
}
