//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilestitch::io::error::{
        ErrorKind, PuzzleError, Result, WithPath, computation_error, integrity_violation,
        invalid_parameter, malformed_input,
    };

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::FileSystem {
            path: "/tmp/puzzle.txt".into(),
            operation: "read puzzle",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(integrity_violation(&"x").source().is_none());
    }

    // Tests malformed input messages carry the line when known
    #[test]
    fn test_malformed_input_message() {
        let with_line = malformed_input(Some(12), &"unexpected symbol 'x'");
        assert_eq!(
            with_line.to_string(),
            "Malformed input at line 12: unexpected symbol 'x'"
        );

        let without_line = malformed_input(None, &"input has no tiles");
        assert_eq!(without_line.to_string(), "Malformed input: input has no tiles");
    }

    // Tests arrangement errors name the cell and candidates
    // Verified by omitting candidates from the message
    #[test]
    fn test_arrangement_messages() {
        let ambiguous = PuzzleError::AmbiguousArrangement {
            cell: [1, 2],
            candidates: vec![1427, 2311],
        };
        let message = ambiguous.to_string();
        assert!(message.contains("(1, 2)"));
        assert!(message.contains("1427, 2311"));
        assert_eq!(ambiguous.kind(), ErrorKind::UnsolvableArrangement);

        let unsolvable = PuzzleError::UnsolvableArrangement {
            cell: [0, 3],
            reason: "no unplaced tile has edge #..#".to_string(),
        };
        assert!(unsolvable.to_string().contains("(0, 3)"));
        assert_eq!(unsolvable.kind(), ErrorKind::UnsolvableArrangement);
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_side", &3, &"must be at least 5");
        let message = error.to_string();

        assert!(message.contains("tile_side"));
        assert!(message.contains('3'));
        assert!(message.contains("must be at least 5"));
        assert_eq!(error.kind(), ErrorKind::Computation);
    }

    // Tests each helper maps to its kind
    #[test]
    fn test_helper_kinds() {
        assert_eq!(
            malformed_input(None, &"x").kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            integrity_violation(&"x").kind(),
            ErrorKind::IntegrityViolation
        );
        assert_eq!(
            computation_error("corner checksum", &"overflow").kind(),
            ErrorKind::Computation
        );
    }

    // Tests path context wraps errors and keeps their kind
    // Verified by dropping the path from the message
    #[test]
    fn test_with_path() {
        let failed: Result<()> = Err(integrity_violation(&"3 corners"));
        let wrapped = failed.with_path(Path::new("day20.txt"));

        let Err(error) = wrapped else {
            unreachable!("Expected an error");
        };
        assert_eq!(error.kind(), ErrorKind::IntegrityViolation);
        assert!(error.to_string().starts_with("day20.txt: "));
        assert!(error.source().is_some());
    }

    // Tests successful results pass through untouched
    #[test]
    fn test_with_path_ok() {
        let value: Result<u64> = Ok(7);
        assert_eq!(value.with_path(Path::new("day20.txt")).ok(), Some(7));
    }

    // Tests foreign errors convert through WithPath
    #[test]
    fn test_with_path_converts_io_error() {
        let failed: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk full"));
        let wrapped = failed.with_path(Path::new("out.png"));

        match wrapped {
            Err(PuzzleError::InFile { path, source }) => {
                assert_eq!(path, PathBuf::from("out.png"));
                assert_eq!(source.kind(), ErrorKind::Io);
            }
            other => unreachable!("Expected InFile error, got {other:?}"),
        }
    }
}
