//! Tests for `Footprint` coverage bitsets over a board frame

#[cfg(test)]
mod tests {
    use polytile::Position;
    use polytile::algorithm::bitset::Footprint;

    // Verifies a new footprint covers nothing
    // Verified by initializing the footprint with all bits set
    #[test]
    fn test_new_footprint() {
        let footprint = Footprint::new(4, 3);
        assert!(footprint.is_empty());
        assert_eq!(footprint.count(), 0);
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert
    #[test]
    fn test_insert_and_contains() {
        let mut footprint = Footprint::new(4, 3);
        footprint.insert(Position::new(3, 2));
        assert!(footprint.contains(Position::new(3, 2)));
        assert!(!footprint.contains(Position::new(2, 3)));
        assert_eq!(footprint.count(), 1);
    }

    // Tests positions outside the frame are ignored
    // Verified by dropping the bounds check in index
    #[test]
    fn test_out_of_frame_ignored() {
        let mut footprint = Footprint::new(2, 2);
        footprint.insert(Position::new(2, 0));
        footprint.insert(Position::new(-1, 1));
        footprint.insert(Position::new(0, 5));
        assert!(footprint.is_empty());
        assert!(!footprint.contains(Position::new(2, 0)));
    }

    // Tests overlap detection and union
    #[test]
    fn test_overlap_and_union() {
        let left = Footprint::from_positions(3, 1, [Position::new(0, 0), Position::new(1, 0)]);
        let right = Footprint::from_positions(3, 1, [Position::new(1, 0), Position::new(2, 0)]);
        let far = Footprint::from_positions(3, 1, [Position::new(2, 0)]);

        assert!(left.overlaps(&right));
        assert!(!left.overlaps(&far));

        let mut combined = left.clone();
        combined.union_with(&far);
        assert_eq!(combined.count(), 3);
    }

    // Tests covered positions come back in row-major order
    #[test]
    fn test_positions_row_major() {
        let footprint = Footprint::from_positions(
            3,
            2,
            [Position::new(0, 1), Position::new(2, 0), Position::new(1, 1)],
        );
        assert_eq!(
            footprint.positions(),
            vec![Position::new(2, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert!(footprint.to_string().contains("3 cells"));
    }
}
