//! Command-line interface for inspecting tiles, testing fits and exporting

use crate::algorithm::cache::PlacementCache;
use crate::io::configuration::DEFAULT_CELL_SCALE;
use crate::io::error::Result;
use crate::io::image::export_tile_as_png;
use crate::io::record::{BoardView, SerializableTile, to_json};
use crate::io::text::{read_tile, read_tiles, write_string};
use crate::spatial::tile::Tile;
use crate::spatial::transform::Symmetry;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polytile")]
#[command(
    author,
    version,
    about = "Inspect colored polyomino tiles and test placements on boards"
)]
/// Command-line arguments for the tile tool
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a tile and its distinct symmetry variants
    Show {
        /// Tile file (text grid or JSON record)
        tile: PathBuf,

        /// Variants to list: fixed, rotations, reflections or full
        #[arg(short, long, default_value_t = Symmetry::Full)]
        symmetry: Symmetry,
    },

    /// Test one piece at one board offset and show the remaining board
    Fit {
        /// Piece file
        piece: PathBuf,
        /// Board file
        board: PathBuf,
        /// Column offset
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Row offset
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// List every placement of each piece on a board
    Placements {
        /// Board file
        board: PathBuf,

        /// Piece files; JSON files may hold several pieces
        #[arg(required = true)]
        pieces: Vec<PathBuf>,

        /// Variants to try: fixed, rotations, reflections or full
        #[arg(short, long, default_value_t = Symmetry::Full)]
        symmetry: Symmetry,
    },

    /// Write a tile as a record, a viewer board or a PNG image
    Export {
        /// Tile file
        tile: PathBuf,

        /// Output path
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Record)]
        format: ExportFormat,

        /// Pixels per cell for PNG output
        #[arg(long, default_value_t = DEFAULT_CELL_SCALE)]
        scale: u32,
    },
}

/// Output formats for `export`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flat JSON tile record
    Record,
    /// JSON board for the external viewer
    Viewer,
    /// PNG image
    Png,
}

impl Cli {
    /// Default log filter for this invocation
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Execute the command, writing human-readable output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read or parsed, or an
    /// output cannot be written
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.command {
            Command::Show { tile, symmetry } => show(&read_tile(tile)?, *symmetry, out),
            Command::Fit { piece, board, x, y } => {
                fit(&read_tile(piece)?, &read_tile(board)?, *x, *y, out)
            }
            Command::Placements {
                board,
                pieces,
                symmetry,
            } => {
                let board = read_tile(board)?;
                let mut all_pieces = Vec::new();
                for path in pieces {
                    all_pieces.extend(read_tiles(path)?);
                }
                list_placements(&board, &all_pieces, *symmetry, out)
            }
            Command::Export {
                tile,
                output,
                format,
                scale,
            } => {
                let tile = read_tile(tile)?;
                match format {
                    ExportFormat::Record => {
                        write_string(output, &to_json(&SerializableTile::from_tile(&tile))?)?;
                    }
                    ExportFormat::Viewer => {
                        write_string(output, &to_json(&BoardView::from_tile(&tile))?)?;
                    }
                    ExportFormat::Png => export_tile_as_png(&tile, *scale, output)?,
                }
                info!("wrote {format:?} export to {}", output.display());
                writeln!(out, "{}", output.display())?;
                Ok(())
            }
        }
    }
}

fn show<W: Write>(tile: &Tile, symmetry: Symmetry, out: &mut W) -> Result<()> {
    let (width, height) = tile.dims();
    writeln!(out, "size {} ({width}x{height})", tile.size())?;
    writeln!(out, "{tile}")?;

    let variants = tile.variants(symmetry);
    info!("{} distinct variant(s) under {symmetry}", variants.len());

    for (index, variant) in variants.iter().enumerate() {
        let names: Vec<&str> = symmetry
            .members()
            .iter()
            .filter(|&&transform| tile.transform(transform) == variant)
            .map(|transform| transform.name())
            .collect();
        writeln!(out)?;
        writeln!(out, "variant {index}: {}", names.join(", "))?;
        writeln!(out, "{variant}")?;
    }

    Ok(())
}

fn fit<W: Write>(piece: &Tile, board: &Tile, x: i32, y: i32, out: &mut W) -> Result<()> {
    if piece.fit_at(board, x, y) {
        let remaining = board.without(piece, x, y);
        writeln!(
            out,
            "fits at ({x}, {y}); {} of {} cells remain",
            remaining.size(),
            board.size()
        )?;
        writeln!(out, "{remaining}")?;
    } else {
        writeln!(out, "does not fit at ({x}, {y})")?;
    }
    Ok(())
}

fn list_placements<W: Write>(
    board: &Tile,
    pieces: &[Tile],
    symmetry: Symmetry,
    out: &mut W,
) -> Result<()> {
    let mut cache = PlacementCache::new();

    for (index, piece) in pieces.iter().enumerate() {
        let found = cache.placements(piece, board, symmetry);
        writeln!(out, "piece {index}: {} placement(s)", found.len())?;
        for placement in found {
            writeln!(
                out,
                "  variant {} at {}",
                placement.variant_index, placement.offset
            )?;
        }
    }

    debug!(
        "placement cache: {} hit(s), {} miss(es)",
        cache.stats.hits, cache.stats.misses
    );

    Ok(())
}
