//! Canonical form for raw cell mappings
//!
//! Strips blank cells and, unless padding is requested, re-anchors the
//! remaining cells so the minimum column and minimum row are both zero.

use crate::spatial::position::{Color, Position};
use std::collections::BTreeMap;

/// Normalize a raw position to color mapping
///
/// Blank entries are dropped first. When `pad` is false every key is shifted by
/// the minimum column and row of what remains; when `pad` is true the caller's
/// coordinate frame is kept. Shifts are exact for coordinates within
/// `COORDINATE_LIMIT` and saturate beyond it. Among non-blank entries a later duplicate of a
/// position overwrites the earlier one.
pub fn normalize<I>(raw_squares: I, pad: bool) -> BTreeMap<Position, Color>
where
    I: IntoIterator<Item = (Position, Color)>,
{
    let squares: BTreeMap<Position, Color> = raw_squares
        .into_iter()
        .filter(|(_, color)| !color.is_blank())
        .collect();

    if pad {
        return squares;
    }

    let min_x = squares.keys().map(|pos| pos.x).min().unwrap_or(0);
    let min_y = squares.keys().map(|pos| pos.y).min().unwrap_or(0);
    if min_x == 0 && min_y == 0 {
        return squares;
    }

    squares
        .into_iter()
        .map(|(pos, color)| (pos.unoffset(min_x, min_y), color))
        .collect()
}

/// Check whether a mapping is anchored at the origin
///
/// Empty mappings count as anchored.
pub fn is_anchored(squares: &BTreeMap<Position, Color>) -> bool {
    let min_x = squares.keys().map(|pos| pos.x).min();
    let min_y = squares.keys().map(|pos| pos.y).min();
    matches!((min_x, min_y), (None, None) | (Some(0), Some(0)))
}
