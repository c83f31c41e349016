//! The eight symmetries of a rectangle applied to tiles
//!
//! Three primitive remaps (left-right mirror, up-down mirror, transpose) are
//! applied directly to coordinates; the remaining four are compositions of
//! memoized primitives. Every result is re-anchored at the origin. Variant
//! sets are deduplicated by structural equality with the identity first.

use crate::io::error::{TileError, invalid_parameter};
use crate::spatial::position::Position;
use crate::spatial::tile::Tile;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// One element of the dihedral group of a rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transform {
    /// Leave the tile as given
    Identity,
    /// Mirror columns: `(x, y) -> (width - 1 - x, y)`
    ReflectLR,
    /// Mirror rows: `(x, y) -> (x, height - 1 - y)`
    ReflectUD,
    /// Transpose: `(x, y) -> (y, x)`
    ReflectPrim,
    /// Anti-transpose: half turn then transpose
    ReflectOff,
    /// Half turn: mirror columns then rows
    RotateAbout,
    /// Quarter turn: transpose then mirror rows
    RotateLeft,
    /// Quarter turn: transpose then mirror columns
    RotateRight,
}

impl Transform {
    /// All eight transforms in the order variant sets list them
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::ReflectLR,
        Self::ReflectUD,
        Self::ReflectPrim,
        Self::ReflectOff,
        Self::RotateAbout,
        Self::RotateLeft,
        Self::RotateRight,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in command-line output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::ReflectLR => "reflect-lr",
            Self::ReflectUD => "reflect-ud",
            Self::ReflectPrim => "reflect-prim",
            Self::ReflectOff => "reflect-off",
            Self::RotateAbout => "rotate-about",
            Self::RotateLeft => "rotate-left",
            Self::RotateRight => "rotate-right",
        }
    }

    /// The pair of transforms this one is composed of, applied left first
    pub const fn composition(self) -> Option<(Self, Self)> {
        match self {
            Self::RotateAbout => Some((Self::ReflectLR, Self::ReflectUD)),
            Self::ReflectOff => Some((Self::RotateAbout, Self::ReflectPrim)),
            Self::RotateLeft => Some((Self::ReflectPrim, Self::ReflectUD)),
            Self::RotateRight => Some((Self::ReflectPrim, Self::ReflectLR)),
            Self::Identity | Self::ReflectLR | Self::ReflectUD | Self::ReflectPrim => None,
        }
    }

    /// Remap one coordinate for a primitive transform
    ///
    /// Returns `None` for composite transforms, which have no single rule.
    pub const fn remap(self, pos: Position, width: i32, height: i32) -> Option<Position> {
        match self {
            Self::Identity => Some(pos),
            Self::ReflectLR => Some(Position::new(
                width.saturating_sub(1).saturating_sub(pos.x),
                pos.y,
            )),
            Self::ReflectUD => Some(Position::new(
                pos.x,
                height.saturating_sub(1).saturating_sub(pos.y),
            )),
            Self::ReflectPrim => Some(Position::new(pos.y, pos.x)),
            Self::ReflectOff | Self::RotateAbout | Self::RotateLeft | Self::RotateRight => None,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which variants of a piece a puzzle allows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Only the piece as given
    Fixed,
    /// Rotations without mirroring
    Rotations,
    /// The identity plus the four listed reflections
    Reflections,
    /// Every rotation and reflection
    #[default]
    Full,
}

impl Symmetry {
    /// Every symmetry setting
    pub const ALL: [Self; 4] = [Self::Fixed, Self::Rotations, Self::Reflections, Self::Full];

    /// Candidate transforms in listing order, identity first
    pub const fn members(self) -> &'static [Transform] {
        match self {
            Self::Fixed => &[Transform::Identity],
            Self::Rotations => &[
                Transform::Identity,
                Transform::RotateAbout,
                Transform::RotateLeft,
                Transform::RotateRight,
            ],
            Self::Reflections => &[
                Transform::Identity,
                Transform::ReflectLR,
                Transform::ReflectUD,
                Transform::ReflectPrim,
                Transform::ReflectOff,
            ],
            Self::Full => &Transform::ALL,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Rotations => "rotations",
            Self::Reflections => "reflections",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symmetry {
    type Err = TileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symmetry| symmetry.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                invalid_parameter(
                    "symmetry",
                    &value,
                    &"expected one of fixed, rotations, reflections, full",
                )
            })
    }
}

/// Lazily computed variants of one tile
///
/// Every slot is a pure function of the owning tile's cells, so whichever
/// thread initializes a slot first stores the same value any other would.
#[derive(Default)]
pub(crate) struct VariantCache {
    transforms: [OnceLock<Tile>; 8],
    sets: [OnceLock<Vec<Tile>>; 4],
}

impl Tile {
    /// Apply one transform, computing and caching it on first use
    pub fn transform(&self, transform: Transform) -> &Self {
        if transform == Transform::Identity {
            return self;
        }

        self.cache
            .transforms
            .get(transform.index())
            .map_or(self, |slot| slot.get_or_init(|| self.compute(transform)))
    }

    fn compute(&self, transform: Transform) -> Self {
        if let Some((first, second)) = transform.composition() {
            return self.transform(first).transform(second).detached();
        }

        Self::new(self.iter().map(|(pos, color)| {
            let remapped = transform
                .remap(pos, self.width(), self.height())
                .unwrap_or(pos);
            (remapped, color)
        }))
    }

    /// Mirror columns
    pub fn reflect_lr(&self) -> &Self {
        self.transform(Transform::ReflectLR)
    }

    /// Mirror rows
    pub fn reflect_ud(&self) -> &Self {
        self.transform(Transform::ReflectUD)
    }

    /// Transpose
    pub fn reflect_prim(&self) -> &Self {
        self.transform(Transform::ReflectPrim)
    }

    /// Anti-transpose
    pub fn reflect_off(&self) -> &Self {
        self.transform(Transform::ReflectOff)
    }

    /// Half turn
    pub fn rotate_about(&self) -> &Self {
        self.transform(Transform::RotateAbout)
    }

    /// Quarter turn, transpose then mirror rows
    pub fn rotate_left(&self) -> &Self {
        self.transform(Transform::RotateLeft)
    }

    /// Quarter turn, transpose then mirror columns
    pub fn rotate_right(&self) -> &Self {
        self.transform(Transform::RotateRight)
    }

    /// Distinct variants allowed by a symmetry setting, identity first
    pub fn variants(&self, symmetry: Symmetry) -> &[Self] {
        self.cache
            .sets
            .get(symmetry.index())
            .map_or(&[] as &[Self], |slot| {
                slot.get_or_init(|| self.distinct(symmetry.members()))
                    .as_slice()
            })
    }

    fn distinct(&self, transforms: &[Transform]) -> Vec<Self> {
        let mut unique: Vec<Self> = Vec::with_capacity(transforms.len());
        for &transform in transforms {
            let candidate = self.transform(transform);
            if !unique.contains(candidate) {
                unique.push(candidate.detached());
            }
        }
        unique
    }

    /// Distinct rotations
    pub fn rotations(&self) -> &[Self] {
        self.variants(Symmetry::Rotations)
    }

    /// Identity plus the distinct listed reflections
    pub fn reflections(&self) -> &[Self] {
        self.variants(Symmetry::Reflections)
    }

    /// The full deduplicated dihedral group
    pub fn transformations(&self) -> &[Self] {
        self.variants(Symmetry::Full)
    }

    /// Just this tile
    pub fn no_transform(&self) -> &[Self] {
        self.variants(Symmetry::Fixed)
    }
}
