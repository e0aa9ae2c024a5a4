//! Guards the one-to-one mirror between `src/` and `tests/unit/`, the use of fixtures
//! and the package manifest

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";
    const FIXTURES_DIR: &str = "tests/fixtures";
    const BENCHES_DIR: &str = "benches";
    const MANIFEST: &str = "Cargo.toml";

    // Crate roots and module declarations only wire files together
    fn is_wiring(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Directories and `.rs` files below `dir`, relative to it
    fn rust_tree(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(dir, &mut |path| {
            if path.is_dir() || path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                if let Ok(relative) = path.strip_prefix(dir) {
                    found.insert(relative.to_string_lossy().to_string());
                }
            }
        })?;
        Ok(found)
    }

    fn walk(dir: &Path, visit: &mut dyn FnMut(&Path)) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            visit(&path);
            if path.is_dir() {
                walk(&path, visit)?;
            }
        }
        Ok(())
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        walk(dir, &mut |path| {
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path.to_path_buf());
            }
        })?;
        files.sort();
        Ok(files)
    }

    // Tests every source file and directory has a unit test counterpart
    // Verified by adding an untested source file
    #[test]
    fn test_every_source_has_unit_tests() {
        let sources = rust_tree(Path::new(SRC_DIR)).expect("Failed to read src");
        let units = rust_tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_wiring(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file and directory mirrors a source file
    // Verified by leaving a test for a deleted module
    #[test]
    fn test_every_unit_test_has_a_source() {
        let sources = rust_tree(Path::new(SRC_DIR)).expect("Failed to read src");
        let units = rust_tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_wiring(path) && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-wiring test file defines at least one test
    #[test]
    fn test_every_test_file_has_tests() {
        let files = rust_files(Path::new(TESTS_DIR)).expect("Failed to read tests");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
                !is_wiring(name)
            })
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    // Tests every fixture is referenced from a test or bench
    // Verified by adding an unreferenced fixture
    #[test]
    fn test_every_fixture_is_used() {
        let Ok(entries) = fs::read_dir(FIXTURES_DIR) else {
            return;
        };

        let mut sources = String::new();
        for dir in [TESTS_DIR, BENCHES_DIR] {
            for path in rust_files(Path::new(dir)).unwrap_or_default() {
                sources.push_str(&fs::read_to_string(path).unwrap_or_default());
            }
        }

        let unused: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| !sources.contains(&format!("fixtures/{name}")))
            .collect();

        assert!(
            unused.is_empty(),
            "Fixtures not referenced by any test or bench:\n{}",
            unused.join("\n")
        );
    }

    // Value of a top-level `key = "value"` line in the manifest's package table
    fn package_value(manifest: &str, key: &str) -> Option<String> {
        manifest
            .lines()
            .skip_while(|line| line.trim() != "[package]")
            .skip(1)
            .take_while(|line| !line.starts_with('['))
            .filter_map(|line| line.split_once('='))
            .find(|(name, _)| name.trim() == key)
            .map(|(_, value)| value.trim().trim_matches('"').to_string())
    }

    // Tests the manifest names a readme that exists and carries its own authors
    // Verified by removing the readme key
    #[test]
    fn test_manifest_metadata() {
        let manifest = fs::read_to_string(MANIFEST).expect("Failed to read manifest");

        let readme = package_value(&manifest, "readme").expect("Manifest should name a readme");
        assert!(Path::new(&readme).is_file(), "{readme} does not exist");

        let authors = package_value(&manifest, "authors").expect("Manifest should list authors");
        assert!(authors.contains("tilestitch"), "unexpected authors {authors}");

        for key in ["description", "license", "keywords", "categories"] {
            assert!(package_value(&manifest, key).is_some(), "missing {key}");
        }
    }

    // Tests no source file uses ndarray's slicing macro, which expands to an
    // `allow(unsafe_code)` that the crate's `forbid(unsafe_code)` rejects
    // Verified by reverting rotate90 to `slice(s![.., ..;-1])`
    #[test]
    fn test_no_slicing_macro_under_forbid() {
        let lib = fs::read_to_string(Path::new(SRC_DIR).join("lib.rs")).expect("Failed to read lib");
        if !lib.contains("#![forbid(unsafe_code)]") {
            return;
        }

        let offending: Vec<String> = rust_files(Path::new(SRC_DIR))
            .expect("Failed to read src")
            .into_iter()
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| content.contains("s![") || content.contains(", s}"))
                    .unwrap_or(false)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            offending.is_empty(),
            "Files using ndarray's s! macro under forbid(unsafe_code):\n{}",
            offending.join("\n")
        );
    }
}
