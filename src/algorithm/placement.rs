//! Placement primitives a packing search is built from
//!
//! `fit_at` tests whether a piece can be laid on a board at an offset, and
//! `without` carves a piece's footprint out of a board while keeping the
//! board's absolute coordinates. `placements` enumerates every fitting
//! variant and offset for one piece.

use crate::algorithm::bitset::Footprint;
use crate::spatial::position::Position;
use crate::spatial::tile::Tile;
use crate::spatial::transform::Symmetry;

impl Tile {
    /// Check whether this tile can be laid on `board` at offset `(x, y)`
    ///
    /// Every cell must land on a board cell of the same color. An empty tile
    /// fits anywhere. A cell whose board position would leave `i32` cannot
    /// land on anything.
    pub fn fit_at(&self, board: &Self, x: i32, y: i32) -> bool {
        self.iter().all(|(pos, color)| {
            pos.checked_offset(x, y)
                .and_then(|target| board.cell_at(target.x, target.y))
                == Some(color)
        })
    }

    /// Cells of this tile not covered by `other` placed at `(dx, dy)`
    ///
    /// The result is padded, so it stays in this tile's coordinate frame.
    #[must_use]
    pub fn without(&self, other: &Self, dx: i32, dy: i32) -> Self {
        Self::padded(self.iter().filter(|(pos, _)| {
            pos.checked_unoffset(dx, dy)
                .is_none_or(|local| !other.squares().contains_key(&local))
        }))
    }
}

/// One way to lay a piece on a board
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the variant within the piece's variant set
    pub variant_index: usize,
    /// Board offset of the variant's origin
    pub offset: Position,
    /// The placed variant
    pub tile: Tile,
}

impl Placement {
    /// Board remaining after this placement
    pub fn apply(&self, board: &Tile) -> Tile {
        board.without(&self.tile, self.offset.x, self.offset.y)
    }

    /// Absolute board positions this placement covers
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.tile.iter().map(|(pos, _)| pos + self.offset)
    }

    /// Covered board cells as a bitset over the board's frame
    pub fn footprint(&self, board: &Tile) -> Footprint {
        Footprint::from_positions(board.width(), board.height(), self.cells())
    }
}

/// Offsets, row by row, at which `variant` stays inside `board`'s occupied bounds
///
/// Both tiles may be padded, so the scan runs from the board's lowest cell to
/// its highest rather than from the origin.
fn candidate_offsets(variant: &Tile, board: &Tile) -> impl Iterator<Item = Position> {
    let ((x_lo, x_hi), (y_lo, y_hi)) = match (variant.bounds(), board.bounds()) {
        (Some((piece_low, piece_high)), Some((board_low, board_high))) => (
            (
                board_low.x.saturating_sub(piece_low.x),
                board_high.x.saturating_sub(piece_high.x),
            ),
            (
                board_low.y.saturating_sub(piece_low.y),
                board_high.y.saturating_sub(piece_high.y),
            ),
        ),
        _ => ((0, -1), (0, -1)),
    };

    (y_lo..=y_hi).flat_map(move |y| (x_lo..=x_hi).map(move |x| Position::new(x, y)))
}

/// Every fitting placement of `piece` on `board` under a symmetry setting
///
/// Variants are tried in listing order, offsets row by row across the board's
/// occupied bounds, including negative coordinates of padded boards. An empty piece
/// has nothing to place and yields no placements.
pub fn placements(piece: &Tile, board: &Tile, symmetry: Symmetry) -> Vec<Placement> {
    let mut found = Vec::new();
    if piece.is_empty() {
        return found;
    }

    for (variant_index, variant) in piece.variants(symmetry).iter().enumerate() {
        for offset in candidate_offsets(variant, board) {
            if variant.fit_at(board, offset.x, offset.y) {
                found.push(Placement {
                    variant_index,
                    offset,
                    tile: variant.clone(),
                });
            }
        }
    }

    log::debug!(
        "{} placement(s) of a {}-cell piece on a {}x{} board ({symmetry})",
        found.len(),
        piece.size(),
        board.width(),
        board.height()
    );

    found
}

/// Check whether any variant of `piece` fits anywhere on `board`
///
/// Agrees with `placements`: an empty piece cannot be placed.
pub fn can_place(piece: &Tile, board: &Tile, symmetry: Symmetry) -> bool {
    if piece.is_empty() {
        return false;
    }

    piece.variants(symmetry).iter().any(|variant| {
        candidate_offsets(variant, board).any(|offset| variant.fit_at(board, offset.x, offset.y))
    })
}
