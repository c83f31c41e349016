//! PNG export of tiles with transparency for absent cells

use crate::io::configuration::{MAX_CELL_SCALE, PALETTE, TRANSPARENT};
use crate::io::error::{Result, TileError, invalid_parameter, invalid_shape};
use crate::spatial::position::Color;
use crate::spatial::tile::Tile;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Palette entry for a color, indexed by its rank among the tile's colors
fn palette_color(colors: &[Color], color: Color) -> [u8; 4] {
    colors
        .binary_search(&color)
        .ok()
        .and_then(|rank| PALETTE.get(rank % PALETTE.len()))
        .copied()
        .unwrap_or(TRANSPARENT)
}

/// Render a tile's frame into an RGBA buffer, `scale` pixels per cell
///
/// # Errors
///
/// Returns an error if:
/// - The tile has no cells inside its frame
/// - `scale` is zero or larger than the configured maximum
pub fn render_tile(tile: &Tile, scale: u32) -> Result<RgbaImage> {
    if scale == 0 || scale > MAX_CELL_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_CELL_SCALE}"),
        ));
    }

    let grid = tile.to_array();
    if grid.iter().all(Option::is_none) {
        return Err(invalid_shape(&"tile has no cells to draw"));
    }

    let colors = tile.colors();
    let (rows, cols) = grid.dim();
    let mut img = ImageBuffer::from_pixel(
        cols as u32 * scale,
        rows as u32 * scale,
        Rgba(TRANSPARENT),
    );

    for ((row, col), cell) in grid.indexed_iter() {
        let Some(color) = cell else {
            continue;
        };
        let pixel = Rgba(palette_color(&colors, *color));
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, pixel);
            }
        }
    }

    Ok(img)
}

/// Export a tile as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The tile cannot be rendered (see [`render_tile`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tile_as_png(tile: &Tile, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_tile(tile, scale)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| TileError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::debug!(
        "exported {}x{} tile to {}",
        tile.width(),
        tile.height(),
        output_path.display()
    );

    Ok(())
}
