//! Spatial data structures for colored shapes
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and color symbols
//! - Normalization of raw cell mappings
//! - The immutable tile type and its symmetry variants

/// Canonical form for raw cell mappings
pub mod normalize;
/// Cell coordinates and color symbols
pub mod position;
/// Immutable colored shape with structural identity
pub mod tile;
/// Rotations and reflections of tiles
pub mod transform;

pub use position::{Color, Position};
pub use tile::Tile;
pub use transform::{Symmetry, Transform};
