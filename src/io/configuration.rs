//! Fixed symbols, export settings and command-line defaults

/// Symbol reserved for "no cell here"
pub const BLANK_SYMBOL: char = ' ';

/// Largest coordinate magnitude for which tile arithmetic is exact
///
/// Any two in-range coordinates differ by less than `i32::MAX`, so anchoring
/// and bounds never overflow. Out-of-range coordinates saturate.
pub const COORDINATE_LIMIT: i32 = (1 << 30) - 1;

/// Default edge length in pixels of one cell in exported images
pub const DEFAULT_CELL_SCALE: u32 = 16;

// Keeps a single export from allocating an enormous buffer
/// Maximum allowed edge length of one exported cell
pub const MAX_CELL_SCALE: u32 = 256;

/// File extension that marks JSON record files
pub const RECORD_EXTENSION: &str = "json";

/// Colors assigned to a tile's distinct symbols in sorted order
///
/// Tiles with more symbols than entries wrap around.
pub const PALETTE: [[u8; 4]; 12] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
    [250, 190, 212, 255],
    [0, 128, 128, 255],
    [170, 110, 40, 255],
];

/// Background for absent cells in exported images
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
