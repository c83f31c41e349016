//! Cell coordinates and color symbols shared by every tile operation

use crate::io::configuration::COORDINATE_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate as (column, row)
///
/// Coordinates within `COORDINATE_LIMIT` of the origin combine exactly; beyond
/// that, arithmetic saturates at the `i32` bounds instead of wrapping. Negative
/// values only survive in padded tiles. Serialized as a two-element `[x, y]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// The origin cell
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a position from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a column and row offset, saturating at the `i32` bounds
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Shift back by a column and row offset, saturating at the `i32` bounds
    #[must_use]
    pub const fn unoffset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_sub(dx), self.y.saturating_sub(dy))
    }

    /// Shift by an offset, or `None` if either coordinate leaves `i32`
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Shift back by an offset, or `None` if either coordinate leaves `i32`
    pub const fn checked_unoffset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_sub(dx), self.y.checked_sub(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Check whether both coordinates lie within `COORDINATE_LIMIT`
    pub const fn in_range(self) -> bool {
        self.x.unsigned_abs() <= COORDINATE_LIMIT.unsigned_abs()
            && self.y.unsigned_abs() <= COORDINATE_LIMIT.unsigned_abs()
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.unoffset(rhs.x, rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single color symbol
///
/// `Color::BLANK` marks the absence of a cell and is never stored in a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub char);

impl Color {
    /// Reserved symbol meaning "no cell here"
    pub const BLANK: Self = Self(crate::io::configuration::BLANK_SYMBOL);

    /// Check whether this is the blank symbol
    pub const fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0
    }

    /// The underlying symbol
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Color {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
