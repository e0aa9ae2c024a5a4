//! Tests for command-line parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilestitch::io::cli::{Cli, FileProcessor};
    use tilestitch::io::error::{ErrorKind, PuzzleError};

    const SAMPLE: &str = include_str!("../../fixtures/sample.txt");

    fn run(args: &[&str]) -> (tilestitch::Result<()>, String) {
        let mut processor = FileProcessor::new(Cli::parse_from(args));
        let mut out = Vec::new();
        let result = processor.process(&mut out);
        (result, String::from_utf8(out).expect("Report should be UTF-8"))
    }

    fn write_sample(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, SAMPLE).expect("Failed to write sample");
        path
    }

    // Tests CLI parsing with only the required target
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "puzzle.txt"]);

        assert_eq!(cli.target, PathBuf::from("puzzle.txt"));
        assert!(cli.uses_default_queries());
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "puzzles", "-c", "-r", "-g", "-i", "-p", "-q", "-n",
        ]);

        assert!(cli.checksum && cli.roughness && cli.grid && cli.image && cli.png);
        assert!(!cli.uses_default_queries());
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests the default report answers both puzzle queries
    // Verified by dropping the roughness line from the defaults
    #[test]
    fn test_process_default_queries() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_sample(dir.path(), "sample.txt");
        let target = input.to_string_lossy().to_string();

        let (result, report) = run(&["program", &target, "-q"]);

        assert!(result.is_ok());
        assert_eq!(report, "checksum: 20899048083289\nroughness: 273\n");
    }

    // Tests grid and image output
    #[test]
    fn test_process_grid_and_image() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_sample(dir.path(), "sample.txt");
        let target = input.to_string_lossy().to_string();

        let (result, report) = run(&["program", &target, "-q", "--grid", "--image"]);

        assert!(result.is_ok());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first().copied(), Some("1171 2473 3079"));
        assert_eq!(lines.get(3).copied(), Some("#.##.##...#.##....###..#"));
        assert_eq!(lines.len(), 3 + 24);
        assert!(!report.contains("checksum"));
    }

    // Tests a directory is processed in name order with per-file headers
    #[test]
    fn test_process_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_sample(dir.path(), "b.txt");
        write_sample(dir.path(), "a.txt");
        fs::write(dir.path().join("notes.md"), "ignored").expect("Failed to write notes");

        let target = dir.path().to_string_lossy().to_string();
        let (result, report) = run(&["program", &target, "-q", "-c"]);

        assert!(result.is_ok());
        let headers: Vec<&str> = report.lines().filter(|l| l.starts_with("==")).collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].ends_with("a.txt =="));
        assert!(headers[1].ends_with("b.txt =="));
        assert_eq!(report.matches("checksum: 20899048083289").count(), 2);
    }

    // Tests PNG export writes next to the input and is skipped when present
    #[test]
    fn test_process_png_export() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_sample(dir.path(), "sample.txt");
        let target = input.to_string_lossy().to_string();
        let output = FileProcessor::get_output_path(&input);

        let (result, report) = run(&["program", &target, "-q", "-p"]);
        assert!(result.is_ok());
        assert!(report.is_empty());
        assert!(output.exists());

        let written = fs::metadata(&output).expect("Output should exist").len();
        let (again, _) = run(&["program", &target, "-q", "-p"]);
        assert!(again.is_ok());
        assert_eq!(fs::metadata(&output).map(|m| m.len()).ok(), Some(written));
    }

    // Tests errors are tagged with the failing file
    // Verified by returning the bare error
    #[test]
    fn test_process_error_names_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("broken.txt");
        fs::write(&input, "Tile 1:\n#?\n").expect("Failed to write input");
        let target = input.to_string_lossy().to_string();

        let (result, _) = run(&["program", &target, "-q"]);

        match result {
            Err(PuzzleError::InFile { path, source }) => {
                assert_eq!(path, input);
                assert_eq!(source.kind(), ErrorKind::MalformedInput);
            }
            other => unreachable!("Expected InFile error, got {other:?}"),
        }
    }

    // Tests a missing target is rejected
    #[test]
    fn test_process_missing_target() {
        let (result, _) = run(&["program", "/nonexistent/puzzle.txt", "-q"]);
        assert!(matches!(result, Err(PuzzleError::InvalidParameter { .. })));
    }

    // Tests output path naming
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("puzzles/day20.txt")),
            PathBuf::from("puzzles/day20_stitched.png")
        );
    }
}
