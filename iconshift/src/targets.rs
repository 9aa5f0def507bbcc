//! File selection for a migration.

use crate::constants::DEFAULT_EXTENSION;
use crate::utils::{collect_source_files, display_relative, normalize_display_path};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Which files a migration runs against, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    /// Explicit paths. A path naming a directory is scanned with the
    /// default extension.
    Files(Vec<PathBuf>),
    /// Recursive scan of a directory for one extension.
    Scan {
        /// Directory to walk.
        dir: PathBuf,
        /// Extension without the leading dot.
        extension: String,
    },
}

impl Targets {
    /// Explicit list of project-relative paths.
    #[must_use]
    pub fn files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::Files(paths.into_iter().map(Into::into).collect())
    }

    /// Scan of `dir` for `.dart` files.
    #[must_use]
    pub fn scan(dir: impl Into<PathBuf>) -> Self {
        Self::Scan {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    /// Short description for listings.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Files(paths) if paths.len() == 1 => normalize_display_path(&paths[0]),
            Self::Files(paths) => format!("{} listed files", paths.len()),
            Self::Scan { dir, extension } => {
                format!("{}/**/*.{extension}", normalize_display_path(dir))
            }
        }
    }
}

/// One file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Path used for I/O.
    pub path: PathBuf,
    /// Path shown in reports.
    pub display: String,
}

/// Options that shape file discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Replaces the extension of scans when set.
    pub extension: Option<String>,
    /// Extra folder names to skip while scanning.
    pub exclude: Vec<String>,
    /// Print walk errors.
    pub verbose: bool,
}

/// Expands `targets` into concrete files under `base`.
///
/// Listed files are returned whether or not they exist so that missing ones
/// can be reported. A path is only returned once.
#[must_use]
pub fn resolve(targets: &Targets, base: &Path, options: &DiscoveryOptions) -> Vec<Target> {
    let mut seen = FxHashSet::default();
    let mut resolved = Vec::new();
    let mut push = |path: PathBuf, display: String| {
        if seen.insert(path.clone()) {
            resolved.push(Target { path, display });
        }
    };

    let scan = |dir: &Path, default_ext: &str| {
        let extension = options.extension.as_deref().unwrap_or(default_ext);
        collect_source_files(dir, extension, &options.exclude, options.verbose)
    };

    match targets {
        Targets::Files(paths) => {
            for listed in paths {
                let path = base.join(listed);
                if path.is_dir() {
                    for file in scan(&path, DEFAULT_EXTENSION) {
                        let display = display_relative(&file, base);
                        push(file, display);
                    }
                } else {
                    push(path, normalize_display_path(listed));
                }
            }
        }
        Targets::Scan { dir, extension } => {
            for file in scan(&base.join(dir), extension) {
                let display = display_relative(&file, base);
                push(file, display);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_listed_files_keep_missing_entries() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.dart"), "").unwrap();

        let targets = Targets::files(["a.dart", "missing.dart", "a.dart"]);
        let resolved = resolve(&targets, temp.path(), &DiscoveryOptions::default());

        let shown: Vec<_> = resolved.iter().map(|t| t.display.as_str()).collect();
        assert_eq!(shown, ["a.dart", "missing.dart"]);
    }

    #[test]
    fn test_scan_uses_extension_override() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("lib/ui")).unwrap();
        fs::write(temp.path().join("lib/ui/a.dart"), "").unwrap();
        fs::write(temp.path().join("lib/ui/b.tsx"), "").unwrap();

        let options = DiscoveryOptions {
            extension: Some("tsx".to_owned()),
            ..DiscoveryOptions::default()
        };
        let resolved = resolve(&Targets::scan("lib"), temp.path(), &options);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].display, "lib/ui/b.tsx");
    }

    #[test]
    fn test_listed_directory_is_scanned() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("lib/main.dart"), "").unwrap();

        let resolved = resolve(&Targets::files(["lib"]), temp.path(), &DiscoveryOptions::default());
        assert_eq!(resolved[0].display, "lib/main.dart");
    }

    #[test]
    fn test_describe() {
        assert_eq!(Targets::scan("lib").describe(), "lib/**/*.dart");
        assert_eq!(Targets::files(["a.dart", "b.dart"]).describe(), "2 listed files");
    }
}
