/// Board-cell coverage bitsets for placements
pub mod bitset;
/// Caching system for placement enumeration
pub mod cache;
/// Fit testing, subtraction and placement enumeration
pub mod placement;
