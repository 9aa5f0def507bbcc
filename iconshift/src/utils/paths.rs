//! Path utilities for iconshift.
//!
//! This module consolidates all path-related logic for:
//! - Cross-platform path normalization for display
//! - Folder exclusion matching
//! - Source file discovery with gitignore support

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use iconshift::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\lib\\main.dart")), "lib/main.dart");
/// assert_eq!(normalize_display_path(Path::new("./lib/app.dart")), "lib/app.dart");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Display form of `path` relative to `base` when it lives under it.
#[must_use]
pub fn display_relative(path: &Path, base: &Path) -> String {
    normalize_display_path(path.strip_prefix(base).unwrap_or(path))
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    for exclude in excludes {
        if let Some(suffix) = exclude.strip_prefix('*') {
            if suffix.starts_with('.') && name.ends_with(suffix) {
                return true;
            }
        } else if name == exclude {
            return true;
        }
    }
    false
}

/// Collects files with the given extension under `root`, sorted by path.
///
/// Uses the `ignore` crate to respect .gitignore, .git/info/exclude, and global gitignore
/// in addition to the default exclusions (`.dart_tool`, `build`, ...) and `exclude`.
/// The extension is matched without its leading dot.
///
/// Walk errors are skipped; with `verbose` they are printed to stderr.
#[must_use]
pub fn collect_source_files(
    root: &Path,
    extension: &str,
    exclude: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let extension = extension.trim_start_matches('.').to_owned();
    let mut all_excludes: Vec<String> = DEFAULT_EXCLUDE_FOLDERS()
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    all_excludes.extend(exclude.iter().cloned());

    let root_for_filter = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            // Only directories are filtered here; files are checked below.
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            !entry
                .file_name()
                .to_str()
                .is_some_and(|name| is_excluded(name, &all_excludes))
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == extension.as_str()) {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_source_files_exclusion() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();

        fs::write(root.join("main.dart"), "// main")?;
        fs::write(root.join("notes.txt"), "not dart")?;

        fs::create_dir_all(root.join(".dart_tool"))?;
        fs::write(root.join(".dart_tool/gen.dart"), "// generated")?;

        fs::create_dir_all(root.join("build"))?;
        fs::write(root.join("build/out.dart"), "// build")?;

        fs::create_dir_all(root.join("widgets"))?;
        fs::write(root.join("widgets/card.dart"), "// card")?;

        let files = collect_source_files(root, "dart", &[], false);
        let names: Vec<_> = files
            .iter()
            .map(|p| display_relative(p, root))
            .collect();

        assert_eq!(names, ["main.dart", "widgets/card.dart"]);
        Ok(())
    }

    #[test]
    fn test_collect_source_files_user_exclude_and_dot_extension() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("generated"))?;
        fs::write(root.join("generated/l10n.dart"), "// l10n")?;
        fs::write(root.join("app.dart"), "// app")?;

        let files = collect_source_files(root, ".dart", &["generated".to_owned()], false);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.dart"));
        Ok(())
    }

    #[test]
    fn test_is_excluded_wildcard() {
        let excludes = vec!["*.g".to_owned(), "gen".to_owned()];
        assert!(is_excluded("api.g", &excludes));
        assert!(is_excluded("gen", &excludes));
        assert!(!is_excluded("generated", &excludes));
    }
}
