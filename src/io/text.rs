//! Reading and writing tile files
//!
//! A `.json` file holds one record or a list of records; any other file is
//! read as a single rendered text grid.

use crate::io::configuration::RECORD_EXTENSION;
use crate::io::error::{Result, TileError};
use crate::io::record::{SerializableTile, tiles_from_json, to_json};
use crate::spatial::tile::Tile;
use std::path::Path;

fn is_record_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXTENSION)
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}

fn with_path(error: TileError, path: &Path) -> TileError {
    match error {
        TileError::Serialization { source, .. } => TileError::Serialization {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

/// Load every tile stored in a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents do not parse
pub fn read_tiles(path: &Path) -> Result<Vec<Tile>> {
    let text = read_to_string(path)?;

    if is_record_file(path) {
        let tiles = tiles_from_json(&text).map_err(|e| with_path(e, path))?;
        log::debug!("read {} tile record(s) from {}", tiles.len(), path.display());
        Ok(tiles)
    } else {
        Ok(vec![text.parse()?])
    }
}

/// Load exactly one tile from a file
///
/// Text grids are anchored at the origin; records keep their coordinates.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or holds a
/// number of tiles other than one
pub fn read_tile(path: &Path) -> Result<Tile> {
    let mut tiles = read_tiles(path)?;
    match tiles.len() {
        1 => Ok(tiles.remove(0)),
        count => Err(TileError::InvalidParameter {
            parameter: "path",
            value: path.display().to_string(),
            reason: format!("expected one tile, found {count}"),
        }),
    }
}

/// Write tiles as a JSON record list
///
/// # Errors
///
/// Returns an error if serialization or the file write fails
pub fn write_records(path: &Path, tiles: &[Tile]) -> Result<()> {
    let records: Vec<SerializableTile> = tiles.iter().map(SerializableTile::from_tile).collect();
    let json = to_json(&records).map_err(|e| with_path(e, path))?;
    write_string(path, &json)
}

/// Write a tile's rendered text grid
///
/// # Errors
///
/// Returns an error if the file write fails
pub fn write_text(path: &Path, tile: &Tile) -> Result<()> {
    write_string(path, &format!("{tile}\n"))
}

/// Write text, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    std::fs::write(path, contents).map_err(|source| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
