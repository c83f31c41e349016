//! Flat records for transport and the board viewer's data contract
//!
//! Both records list cells as `[[x, y], "c"]` pairs, the shape a JavaScript
//! `Map` constructor accepts directly.

use crate::io::configuration::COORDINATE_LIMIT;
use crate::io::error::{Result, invalid_shape};
use crate::spatial::position::{Color, Position};
use crate::spatial::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a tile's public attributes
///
/// Derived one-way from a tile; never used for identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableTile {
    /// Non-blank cells in structural order
    pub squares: Vec<(Position, Color)>,
    /// Number of cells
    pub size: usize,
    /// One past the largest column
    pub width: i32,
    /// One past the largest row
    pub height: i32,
    /// `(width, height)`
    pub dims: (i32, i32),
}

impl SerializableTile {
    /// Project a tile into a flat record
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            squares: tile.iter().collect(),
            size: tile.size(),
            width: tile.width(),
            height: tile.height(),
            dims: tile.dims(),
        }
    }

    /// Rebuild the tile, keeping the recorded coordinates
    ///
    /// Derived fields are ignored; use [`Self::into_tile_checked`] to reject
    /// records whose derived fields disagree with their cells.
    pub fn to_tile(&self) -> Tile {
        Tile::padded(self.squares.iter().copied())
    }

    /// Check the derived fields and cell list against each other
    pub fn is_consistent(&self) -> bool {
        self.validate().is_ok()
    }

    /// Rebuild the tile after validating the record
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if:
    /// - A cell is blank or a position is listed twice
    /// - A position lies outside `COORDINATE_LIMIT`
    /// - `size`, `width`, `height` or `dims` disagree with the cells
    pub fn into_tile_checked(self) -> Result<Tile> {
        self.validate()?;
        Ok(self.to_tile())
    }

    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for &(pos, color) in &self.squares {
            if color.is_blank() {
                return Err(invalid_shape(&format!("blank cell recorded at {pos}")));
            }
            if !pos.in_range() {
                return Err(invalid_shape(&format!(
                    "position {pos} is outside +/-{COORDINATE_LIMIT}"
                )));
            }
            if !seen.insert(pos) {
                return Err(invalid_shape(&format!("position {pos} listed twice")));
            }
        }

        let tile = self.to_tile();
        let expected = (tile.size(), tile.width(), tile.height(), tile.dims());
        let recorded = (self.size, self.width, self.height, self.dims);
        if expected != recorded {
            return Err(invalid_shape(&format!(
                "derived fields {recorded:?} do not match cells {expected:?}"
            )));
        }

        Ok(())
    }
}

impl From<&Tile> for SerializableTile {
    fn from(tile: &Tile) -> Self {
        Self::from_tile(tile)
    }
}

/// Board description consumed by the external viewer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Columns to draw
    pub width: i32,
    /// Rows to draw
    pub height: i32,
    /// Colored cells as `[[x, y], "c"]` pairs
    pub squares: Vec<(Position, String)>,
}

impl BoardView {
    /// Describe a tile as a viewer board of its own dimensions
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            width: tile.width(),
            height: tile.height(),
            squares: tile
                .iter()
                .map(|(pos, color)| (pos, color.to_string()))
                .collect(),
        }
    }
}

/// Encode records as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode one record or a list of records into tiles
///
/// # Errors
///
/// Returns an error if the text is not a record or record list, or if a
/// record fails validation
pub fn tiles_from_json(text: &str) -> Result<Vec<Tile>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Records {
        One(SerializableTile),
        Many(Vec<SerializableTile>),
    }

    let records = match serde_json::from_str::<Records>(text)? {
        Records::One(record) => vec![record],
        Records::Many(records) => records,
    };

    records
        .into_iter()
        .map(SerializableTile::into_tile_checked)
        .collect()
}
