//! Tests for fit testing, subtraction and placement enumeration

#[cfg(test)]
mod tests {
    use polytile::algorithm::placement::{can_place, placements};
    use polytile::{Color, Position, Symmetry, Tile};

    fn board(text: &str) -> Tile {
        Tile::padded(text.parse::<Tile>().unwrap().iter())
    }

    // Tests a tile fits on itself at the origin
    #[test]
    fn test_fit_reflexive() {
        for text in ["a", "ab\ncd", "x \nxx", "p  \nqrs"] {
            let tile: Tile = text.parse().unwrap();
            assert!(tile.fit_at(&tile, 0, 0));
        }
    }

    // Tests colors must match cell for cell
    // Verified by comparing only occupancy in fit_at
    #[test]
    fn test_fit_requires_matching_colors() {
        let board = board("ab\ncd");
        let piece: Tile = "ab".parse().unwrap();
        assert!(piece.fit_at(&board, 0, 0));
        assert!(!piece.fit_at(&board, 0, 1));

        let lower: Tile = "cd".parse().unwrap();
        assert!(lower.fit_at(&board, 0, 1));
    }

    // Tests a piece hanging off the board does not fit
    #[test]
    fn test_fit_out_of_bounds() {
        let board = board("xxx\nxxx");
        let domino: Tile = "xx".parse().unwrap();
        assert!(domino.fit_at(&board, 1, 1));
        assert!(!domino.fit_at(&board, 2, 1));
        assert!(!domino.fit_at(&board, -1, 0));
        assert!(!domino.fit_at(&board, 0, 2));
    }

    // Tests blank holes in a piece impose nothing on the board
    #[test]
    fn test_fit_ignores_piece_holes() {
        let board = board("a b");
        let piece: Tile = "a b".parse().unwrap();
        assert!(piece.fit_at(&board, 0, 0));

        let solid: Tile = "aab".parse().unwrap();
        assert!(!solid.fit_at(&board, 0, 0));
    }

    // Tests the empty tile fits anywhere
    #[test]
    fn test_empty_fits_anywhere() {
        let empty = Tile::empty();
        assert!(empty.fit_at(&board("x"), 100, -7));
        assert!(empty.fit_at(&Tile::empty(), 0, 0));
    }

    // Tests subtraction removes exactly the covered cells in the board frame
    // Verified by subtracting the offset with the wrong sign
    #[test]
    fn test_without_carves_footprint() {
        let board = board("xxx\nxxx");
        let domino: Tile = "xx".parse().unwrap();
        assert!(domino.fit_at(&board, 1, 1));

        let remaining = board.without(&domino, 1, 1);
        assert_eq!(remaining.size(), board.size() - domino.size());
        assert_eq!(remaining.cell_at(1, 1), None);
        assert_eq!(remaining.cell_at(2, 1), None);
        assert_eq!(remaining.cell_at(0, 1), Some(Color('x')));
        assert_eq!(remaining.dims(), (3, 2));
    }

    // Tests subtraction keeps absolute coordinates when the corner is removed
    #[test]
    fn test_without_is_padded() {
        let board = board("xx\nxx");
        let corner: Tile = "x".parse().unwrap();
        let remaining = board.without(&corner, 0, 0);
        assert_eq!(remaining.cell_at(0, 0), None);
        assert_eq!(remaining.cell_at(1, 0), Some(Color('x')));
        assert_eq!(remaining.cell_at(0, 1), Some(Color('x')));
        assert_eq!(remaining.to_string(), " x\nxx");
    }

    // Tests cells of the piece missing from the board remove nothing
    #[test]
    fn test_without_partial_overlap() {
        let board = board("xx");
        let domino: Tile = "xx".parse().unwrap();
        let remaining = board.without(&domino, 1, 0);
        assert_eq!(remaining.size(), 1);
        assert_eq!(remaining.squares().keys().next(), Some(&Position::new(0, 0)));
    }

    // Tests all orientations of a domino on a 3x2 board are found
    // Verified by limiting the offset range to one row
    #[test]
    fn test_placements_domino() {
        let board = board("xxx\nxxx");
        let domino: Tile = "xx".parse().unwrap();

        let found = placements(&domino, &board, Symmetry::Full);
        let horizontal = found.iter().filter(|p| p.variant_index == 0).count();
        let vertical = found.iter().filter(|p| p.variant_index == 1).count();
        assert_eq!(horizontal, 4);
        assert_eq!(vertical, 3);

        let fixed = placements(&domino, &board, Symmetry::Fixed);
        assert_eq!(fixed.len(), 4);
        assert_eq!(fixed[0].offset, Position::new(0, 0));
        assert_eq!(fixed[1].offset, Position::new(1, 0));
    }

    // Tests colored pieces only land where their colors line up
    #[test]
    fn test_placements_colored() {
        let board = board("ab\nba");
        let piece: Tile = "ab".parse().unwrap();

        let fixed = placements(&piece, &board, Symmetry::Fixed);
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed[0].offset, Position::new(0, 0));

        // The half turn reads "ba" and lands on the second row
        let rotated = placements(&piece, &board, Symmetry::Rotations);
        assert_eq!(rotated.len(), 4);
    }

    // Tests applying a placement matches subtraction and footprints cover it
    #[test]
    fn test_placement_apply_and_footprint() {
        let board = board("xxx\nxxx");
        let domino: Tile = "xx".parse().unwrap();
        let found = placements(&domino, &board, Symmetry::Full);

        for placement in &found {
            let remaining = placement.apply(&board);
            assert_eq!(remaining.size(), board.size() - domino.size());

            let footprint = placement.footprint(&board);
            assert_eq!(footprint.count(), domino.size());
            for cell in placement.cells() {
                assert!(footprint.contains(cell));
                assert_eq!(remaining.cell_at(cell.x, cell.y), None);
            }
        }
    }

    // Tests empty pieces and oversized pieces produce no placements
    #[test]
    fn test_placements_degenerate() {
        let board = board("xx");
        assert!(placements(&Tile::empty(), &board, Symmetry::Full).is_empty());

        let long: Tile = "xxx".parse().unwrap();
        assert!(placements(&long, &board, Symmetry::Full).is_empty());
        assert!(!can_place(&long, &board, Symmetry::Full));
    }

    // Tests the quick check agrees with enumeration
    #[test]
    fn test_can_place() {
        let board = board("x \nx ");
        let domino: Tile = "xx".parse().unwrap();
        assert!(!can_place(&domino, &board, Symmetry::Fixed));
        assert!(can_place(&domino, &board, Symmetry::Rotations));
        assert_eq!(
            placements(&domino, &board, Symmetry::Rotations).len(),
            1
        );
    }

    // Tests the quick check and enumeration agree that an empty piece has no placement
    // Verified by removing the empty-piece guard from can_place
    #[test]
    fn test_empty_piece_agreement() {
        for target in [board("x"), board("ab\nba"), Tile::empty()] {
            for symmetry in Symmetry::ALL {
                let empty = Tile::empty();
                assert!(!can_place(&empty, &target, symmetry));
                assert_eq!(
                    can_place(&empty, &target, symmetry),
                    !placements(&empty, &target, symmetry).is_empty()
                );
            }
        }
    }

    // Tests boards with cells at negative coordinates are fully scanned
    // Verified by starting the offset scan at the origin
    #[test]
    fn test_placements_on_negative_board() {
        let single = Tile::padded([(Position::new(-1, 0), Color('x'))]);
        let cell: Tile = "x".parse().unwrap();
        assert!(cell.fit_at(&single, -1, 0));

        let found = placements(&cell, &single, Symmetry::Fixed);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, Position::new(-1, 0));
        assert!(can_place(&cell, &single, Symmetry::Fixed));

        let strip = Tile::padded(
            (-3..0).flat_map(|x| (-2..0).map(move |y| (Position::new(x, y), Color('x')))),
        );
        let domino: Tile = "xx".parse().unwrap();
        let found = placements(&domino, &strip, Symmetry::Full);
        assert_eq!(found.len(), 7);
        assert_eq!(found[0].offset, Position::new(-3, -2));
        for placement in &found {
            assert_eq!(placement.apply(&strip).size(), strip.size() - 2);
        }
    }

    // Tests a padded piece is placed by its occupied cells, not its origin
    #[test]
    fn test_placements_padded_piece() {
        let board = board("xxx");
        let piece = Tile::padded([(Position::new(5, 0), Color('x'))]);
        let found = placements(&piece, &board, Symmetry::Fixed);
        let offsets: Vec<Position> = found.iter().map(|p| p.offset).collect();
        assert_eq!(
            offsets,
            vec![Position::new(-5, 0), Position::new(-4, 0), Position::new(-3, 0)]
        );
    }

    // Tests offsets at the i32 bounds never fit and never carve
    // Verified by adding offsets without overflow checks
    #[test]
    fn test_extreme_offsets() {
        let board = board("xx");
        let domino: Tile = "xx".parse().unwrap();
        assert!(!domino.fit_at(&board, i32::MAX, 0));
        assert!(!domino.fit_at(&board, 0, i32::MIN));
        assert_eq!(board.without(&domino, i32::MIN, 0), board);
        assert_eq!(board.without(&domino, 0, i32::MAX), board);
    }
}
