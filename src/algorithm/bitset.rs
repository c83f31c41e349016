use crate::spatial::position::Position;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of covered cells on a board
///
/// Bits are laid out row-major over the board's `width * height` frame, which
/// makes a footprint one row of an exact-cover matrix. Positions outside the
/// frame are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    bits: BitVec,
    width: i32,
    height: i32,
}

impl Footprint {
    /// Create a footprint covering no cells
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            bits: bitvec![0; cells],
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Create a footprint covering the given positions
    pub fn from_positions<I>(width: i32, height: i32, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut footprint = Self::new(width, height);
        for pos in positions {
            footprint.insert(pos);
        }
        footprint
    }

    const fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            None
        } else {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        }
    }

    /// Mark a cell as covered
    pub fn insert(&mut self, pos: Position) {
        if let Some(index) = self.index(pos) {
            self.bits.set(index, true);
        }
    }

    /// Test whether a cell is covered
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test whether two footprints share a cell
    pub fn overlaps(&self, other: &Self) -> bool {
        self.bits
            .iter_ones()
            .any(|index| other.bits.get(index).as_deref() == Some(&true))
    }

    /// Add every cell of another footprint in-place
    pub fn union_with(&mut self, other: &Self) {
        for index in other.bits.iter_ones() {
            if index < self.bits.len() {
                self.bits.set(index, true);
            }
        }
    }

    /// Test if no cells are covered
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count covered cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Covered cells in row-major order
    pub fn positions(&self) -> Vec<Position> {
        let width = self.width.max(1) as usize;
        self.bits
            .iter_ones()
            .map(|index| Position::new((index % width) as i32, (index / width) as i32))
            .collect()
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Footprint({} cells: {:?})", self.count(), self.positions())
    }
}
