//! Tiles and the geometry of placing them
//!
//! This module contains:
//! - Tile pixels and tile collections
//! - Edges and the 8 orientations of a square
//! - The placed grid produced by assembly
//! - Synthetic puzzles for tests and benchmarks

/// Bit strings read along tile sides
pub mod edge;
/// Placed tiles arranged in a square grid
pub mod grid;
/// Rotations, reflections and oriented read-only views
pub mod orientation;
/// Generated puzzles with a known solution
pub mod synthetic;
/// Tile pixels and validated tile collections
pub mod tile;

pub use grid::{Placement, PlacedGrid};
pub use orientation::{Orientation, OrientedView, Side};
