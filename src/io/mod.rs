//! Input/output operations and error handling

/// Command-line front end
pub mod cli;
/// Symbols, export settings and defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// PNG export of tiles
pub mod image;
/// Flat records and the viewer board contract
pub mod record;
/// Tile file reading and writing
pub mod text;
