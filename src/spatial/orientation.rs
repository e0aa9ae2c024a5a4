//! Dihedral orientations of square pixel grids
//!
//! An [`Orientation`] is one of the 8 symmetries of a square: an optional
//! horizontal mirror followed by 0-3 clockwise quarter turns. Orientations
//! compose on the enum itself and are applied through [`OrientedView`], which
//! remaps indices into the borrowed pixels instead of copying them.

use ndarray::{Array2, ArrayView2};
use std::fmt;

use crate::spatial::edge::Edge;

/// One of the 8 symmetries of a square
///
/// Flipped variants mirror left-right first, then rotate clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Pixels as given
    Identity,
    /// Quarter turn clockwise
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turns clockwise
    Rotate270,
    /// Mirrored left-right
    Flip,
    /// Mirrored, then a quarter turn clockwise
    FlipRotate90,
    /// Mirrored, then a half turn
    FlipRotate180,
    /// Mirrored, then three quarter turns clockwise
    FlipRotate270,
}

impl Orientation {
    /// Every orientation, in search order
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Flip,
        Self::FlipRotate90,
        Self::FlipRotate180,
        Self::FlipRotate270,
    ];

    /// Orientation mirroring when `flipped`, then turning `quarter_turns` times clockwise
    pub const fn from_parts(flipped: bool, quarter_turns: u8) -> Self {
        match (flipped, quarter_turns % 4) {
            (false, 0) => Self::Identity,
            (false, 1) => Self::Rotate90,
            (false, 2) => Self::Rotate180,
            (false, _) => Self::Rotate270,
            (true, 0) => Self::Flip,
            (true, 1) => Self::FlipRotate90,
            (true, 2) => Self::FlipRotate180,
            (true, _) => Self::FlipRotate270,
        }
    }

    /// Whether the mirror is applied
    pub const fn is_flipped(self) -> bool {
        matches!(
            self,
            Self::Flip | Self::FlipRotate90 | Self::FlipRotate180 | Self::FlipRotate270
        )
    }

    /// Clockwise quarter turns applied after the optional mirror
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Identity | Self::Flip => 0,
            Self::Rotate90 | Self::FlipRotate90 => 1,
            Self::Rotate180 | Self::FlipRotate180 => 2,
            Self::Rotate270 | Self::FlipRotate270 => 3,
        }
    }

    /// This orientation followed by a clockwise quarter turn
    #[must_use]
    pub const fn rotate90(self) -> Self {
        Self::from_parts(self.is_flipped(), self.quarter_turns() + 1)
    }

    /// This orientation followed by a left-right mirror
    ///
    /// Mirroring after `k` turns equals mirroring first and turning `4 - k` times.
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        Self::from_parts(!self.is_flipped(), (4 - self.quarter_turns()) % 4)
    }

    /// Position in the source grid shown at (`row`, `col`) of the oriented grid
    ///
    /// `side` is the side length of the square grid; positions outside it are
    /// mapped arithmetically and must be bounds-checked by the caller.
    pub const fn source_position(self, row: usize, col: usize, side: usize) -> (usize, usize) {
        let last = side.saturating_sub(1);
        // Undo the rotation
        let (row, col) = match self.quarter_turns() {
            0 => (row, col),
            1 => (last.saturating_sub(col), row),
            2 => (last.saturating_sub(row), last.saturating_sub(col)),
            _ => (col, last.saturating_sub(row)),
        };
        // Then the mirror
        if self.is_flipped() {
            (row, last.saturating_sub(col))
        } else {
            (row, col)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_flipped() { "flip+" } else { "" };
        write!(f, "{prefix}rot{}", u16::from(self.quarter_turns()) * 90)
    }
}

/// A border of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row, read left-to-right
    Top,
    /// Last column, read top-to-bottom
    Right,
    /// Last row, read left-to-right
    Bottom,
    /// First column, read top-to-bottom
    Left,
}

impl Side {
    /// Every side, clockwise from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side facing this one across a shared border
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Square pixel grid seen under an orientation
///
/// Borrowed pixels are never copied; every lookup is remapped through
/// [`Orientation::source_position`].
#[derive(Debug, Clone, Copy)]
pub struct OrientedView<'a> {
    pixels: ArrayView2<'a, bool>,
    orientation: Orientation,
    side: usize,
}

impl<'a> OrientedView<'a> {
    /// View square `pixels` under `orientation`
    ///
    /// Non-square input is viewed through its leading square.
    pub fn new(pixels: ArrayView2<'a, bool>, orientation: Orientation) -> Self {
        let (rows, cols) = pixels.dim();
        Self {
            pixels,
            orientation,
            side: rows.min(cols),
        }
    }

    /// Orientation applied by this view
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Side length of the viewed square
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Pixel at (`row`, `col`) of the oriented grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.side || col >= self.side {
            return None;
        }
        let source = self.orientation.source_position(row, col, self.side);
        self.pixels.get(source).copied()
    }

    /// Border on `side`, read in its fixed direction
    pub fn edge(&self, side: Side) -> Edge {
        let last = self.side.saturating_sub(1);
        Edge::from_pixels((0..self.side).map(|i| {
            let (row, col) = match side {
                Side::Top => (0, i),
                Side::Right => (i, last),
                Side::Bottom => (last, i),
                Side::Left => (i, 0),
            };
            self.get(row, col).unwrap_or(false)
        }))
    }

    /// All four borders in [`Side::ALL`] order
    pub fn edges(&self) -> [Edge; 4] {
        Side::ALL.map(|side| self.edge(side))
    }

    /// Materialize the oriented pixels
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.side, self.side), |(row, col)| {
            self.get(row, col).unwrap_or(false)
        })
    }
}
