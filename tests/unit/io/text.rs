//! Tests for reading and writing tile files

#[cfg(test)]
mod tests {
    use polytile::io::text::{read_tile, read_tiles, write_records, write_string, write_text};
    use polytile::{Tile, TileError};
    use tempfile::TempDir;

    fn l_shape() -> Tile {
        "x \nxy".parse().unwrap()
    }

    // Tests a text grid survives a write and read
    // Verified by dropping the final newline handling in parsing
    #[test]
    fn test_text_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("piece.txt");

        write_text(&path, &l_shape()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x \nxy\n");
        assert_eq!(read_tile(&path).unwrap(), l_shape());
    }

    // Tests record lists survive a write and read
    #[test]
    fn test_records_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pieces.json");
        let tiles = vec![l_shape(), Tile::from_cells([(0, 0, 'q'), (0, 1, 'q')])];

        write_records(&path, &tiles).unwrap();
        assert_eq!(read_tiles(&path).unwrap(), tiles);
    }

    // Tests single-tile reads reject multi-tile files
    #[test]
    fn test_read_tile_requires_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pair.json");
        write_records(&path, &[l_shape(), l_shape()]).unwrap();

        assert!(matches!(
            read_tile(&path),
            Err(TileError::InvalidParameter {
                parameter: "path",
                ..
            })
        ));
    }

    // Tests missing files report the path and operation
    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        match read_tiles(&path) {
            Err(TileError::FileSystem {
                path: reported,
                operation,
                ..
            }) => {
                assert_eq!(reported, path);
                assert_eq!(operation, "read");
            }
            other => unreachable!("Expected file system error, got {other:?}"),
        }
    }

    // Tests malformed JSON errors carry the file path
    #[test]
    fn test_bad_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        write_string(&path, "{not json").unwrap();

        match read_tiles(&path) {
            Err(TileError::Serialization { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("Expected serialization error, got {other:?}"),
        }
    }

    // Tests writing creates missing parent directories
    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("piece.txt");
        write_text(&path, &l_shape()).unwrap();
        assert!(path.exists());
    }
}
