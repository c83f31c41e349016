//! Canonical colored polyomino tiles for tiling and packing puzzles
//!
//! Tiles compare equal regardless of translation, enumerate their rotations and
//! reflections, and can be tested for placement on, or carved out of, a larger
//! board. These are the primitives a packing search is built from.

#![forbid(unsafe_code)]

/// Placement testing, subtraction and enumeration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Coordinates, colors, tiles and their symmetry variants
pub mod spatial;

pub use io::error::{Result, TileError};
pub use spatial::{Color, Position, Symmetry, Tile, Transform};
