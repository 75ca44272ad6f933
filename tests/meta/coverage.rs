//! Keeps `tests/unit` an exact mirror of `src` and makes sure every mirrored
//! file is compiled into the unit test harness

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Harness roots and module glue carry no behaviour of their own
    fn is_glue(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn relative_rust_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let Ok(relative) = path.strip_prefix(base) else {
                    continue;
                };
                let relative = relative.to_string_lossy().replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn rust_files_under(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let src = relative_rust_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let unit = relative_rust_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!src.is_empty(), "src directory should not be empty");

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_glue(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source_counterpart() {
        let src = relative_rust_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let unit = relative_rust_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_unit_files_are_declared_as_modules() {
        let unit_dir = Path::new(UNIT_DIR);
        let files = rust_files_under(unit_dir).unwrap_or_default();
        let mut undeclared = Vec::new();

        for file in &files {
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == "mod" || stem == "main" {
                continue;
            }
            let Some(parent) = file.parent() else {
                continue;
            };

            let declaring_file = if parent == unit_dir {
                parent.join("main.rs")
            } else {
                parent.join("mod.rs")
            };
            let declarations = fs::read_to_string(&declaring_file).unwrap_or_default();
            let declared = declarations
                .lines()
                .map(str::trim)
                .any(|line| line == format!("mod {stem};") || line == format!("pub mod {stem};"));

            if !declared {
                undeclared.push(format!("  - {}", file.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files not reachable from the harness:\n{}",
            undeclared.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files_under(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "tests directory should not be empty");

        let without_tests: Vec<String> = files
            .iter()
            .filter(|file| {
                let name = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                name != "main.rs" && name != "mod.rs"
            })
            .filter(|file| {
                !fs::read_to_string(file)
                    .unwrap_or_default()
                    .contains("#[test]")
            })
            .map(|file| format!("  - {}", file.display()))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
