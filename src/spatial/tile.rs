//! Immutable colored polyomino with structural identity
//!
//! A tile owns a normalized position to color mapping and the bounds derived
//! from it. Equality, hashing and ordering look only at the mapping, so two
//! tiles built from translated copies of the same shape are interchangeable.
//! Symmetry variants are memoized in a cache shared by clones of a tile.

use crate::io::error::{Result, TileError};
use crate::spatial::normalize::normalize;
use crate::spatial::position::{Color, Position};
use crate::spatial::transform::VariantCache;
use ndarray::Array2;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Immutable colored shape
#[derive(Clone)]
pub struct Tile {
    squares: BTreeMap<Position, Color>,
    width: i32,
    height: i32,
    pub(crate) cache: Arc<VariantCache>,
}

impl Tile {
    /// Build a tile anchored at the origin
    ///
    /// Blank cells are dropped and the remaining cells are shifted so the
    /// minimum column and row are zero.
    pub fn new<I>(raw_squares: I) -> Self
    where
        I: IntoIterator<Item = (Position, Color)>,
    {
        Self::from_squares(raw_squares, false)
    }

    /// Build a tile that keeps the caller's coordinate frame
    ///
    /// Used for boards and for subtraction results, where cells must stay
    /// comparable with absolute board coordinates.
    pub fn padded<I>(raw_squares: I) -> Self
    where
        I: IntoIterator<Item = (Position, Color)>,
    {
        Self::from_squares(raw_squares, true)
    }

    /// Build a tile, re-anchoring it unless `pad` is set
    pub fn from_squares<I>(raw_squares: I, pad: bool) -> Self
    where
        I: IntoIterator<Item = (Position, Color)>,
    {
        Self::from_normalized(normalize(raw_squares, pad))
    }

    /// Build a tile from `(x, y, symbol)` triples, anchored at the origin
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32, char)>,
    {
        Self::new(
            cells
                .into_iter()
                .map(|(x, y, symbol)| (Position::new(x, y), Color(symbol))),
        )
    }

    /// An empty tile
    pub fn empty() -> Self {
        Self::from_normalized(BTreeMap::new())
    }

    fn from_normalized(squares: BTreeMap<Position, Color>) -> Self {
        let width = squares
            .keys()
            .map(|pos| pos.x.saturating_add(1))
            .max()
            .unwrap_or(0);
        let height = squares
            .keys()
            .map(|pos| pos.y.saturating_add(1))
            .max()
            .unwrap_or(0);

        Self {
            squares,
            width,
            height,
            cache: Arc::default(),
        }
    }

    /// Equal tile with its own variant cache
    ///
    /// Variant sets store detached copies so a tile never holds its own cache.
    pub(crate) fn detached(&self) -> Self {
        Self {
            squares: self.squares.clone(),
            width: self.width,
            height: self.height,
            cache: Arc::default(),
        }
    }

    /// Copy of this tile re-anchored at the origin
    ///
    /// Turns a padded tile (such as a carved board) back into a canonical shape.
    #[must_use]
    pub fn anchored(&self) -> Self {
        Self::new(self.squares.iter().map(|(&pos, &color)| (pos, color)))
    }

    /// Non-blank cells keyed by position
    pub const fn squares(&self) -> &BTreeMap<Position, Color> {
        &self.squares
    }

    /// Iterate cells in structural order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.squares.iter().map(|(&pos, &color)| (pos, color))
    }

    /// Number of non-blank cells
    pub fn size(&self) -> usize {
        self.squares.len()
    }

    /// Check whether the tile has no cells
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// One past the largest column, or 0 when empty
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// One past the largest row, or 0 when empty
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`
    pub const fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Smallest and largest occupied column and row, or `None` when empty
    ///
    /// Unlike `dims`, the lower corner is not assumed to be the origin, so
    /// padded tiles with cells at negative coordinates report their true extent.
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let first = self.squares.keys().next()?;
        let (mut low, mut high) = (*first, *first);
        for pos in self.squares.keys() {
            low = Position::new(low.x.min(pos.x), low.y.min(pos.y));
            high = Position::new(high.x.max(pos.x), high.y.max(pos.y));
        }
        Some((low, high))
    }

    /// Color at a cell, or `None` when absent
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Color> {
        self.squares.get(&Position::new(x, y)).copied()
    }

    /// Color at a cell, with absent cells reported as blank
    pub fn color_at(&self, x: i32, y: i32) -> Color {
        self.cell_at(x, y).unwrap_or(Color::BLANK)
    }

    /// Distinct colors in sorted order
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.squares.values().copied().collect();
        colors.sort_unstable();
        colors.dedup();
        colors
    }

    /// Dense `(height, width)` grid of the tile's frame
    ///
    /// Cells at negative coordinates of padded tiles fall outside the frame.
    pub fn to_array(&self) -> Array2<Option<Color>> {
        let rows = self.height.max(0) as usize;
        let cols = self.width.max(0) as usize;
        let mut grid = Array2::from_elem((rows, cols), None);

        for (pos, color) in self.iter() {
            if pos.x < 0 || pos.y < 0 {
                continue;
            }
            if let Some(cell) = grid.get_mut([pos.y as usize, pos.x as usize]) {
                *cell = Some(color);
            }
        }

        grid
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.squares.hash(state);
    }
}

// Lexicographic over sorted (position, color) pairs
impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squares.cmp(&other.squares)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("dims", &self.dims())
            .field("squares", &self.squares)
            .finish()
    }
}

/// Row-major text grid with the blank symbol for absent cells
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.to_array();
        for (index, row) in grid.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or(Color::BLANK))?;
            }
        }
        Ok(())
    }
}

/// Parse the rendered text form back into an anchored tile
///
/// Each line is a row and each character a column; the blank symbol marks an
/// absent cell. Control characters such as tabs are rejected.
impl FromStr for Tile {
    type Err = TileError;

    fn from_str(text: &str) -> Result<Self> {
        let mut squares = Vec::new();

        for (row, line) in text.lines().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol.is_control() {
                    return Err(TileError::Parse {
                        line: row + 1,
                        column: col + 1,
                        reason: format!("control character {symbol:?} is not a color"),
                    });
                }
                squares.push((Position::new(col as i32, row as i32), Color(symbol)));
            }
        }

        Ok(Self::new(squares))
    }
}
