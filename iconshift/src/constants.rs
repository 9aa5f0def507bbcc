use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the configuration file looked up from the working directory upwards.
pub const CONFIG_FILENAME: &str = ".iconshift.toml";

/// Extension of the files scanned by default.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Directory scanned by migrations that walk the source tree.
pub const DEFAULT_SCAN_DIR: &str = "lib";

/// Import line added to files that use Lucide icons.
pub const DEFAULT_IMPORT_LINE: &str = "import 'package:lucide_icons/lucide_icons.dart';";

/// Text whose presence means a document uses Lucide icons.
pub const DEFAULT_USAGE_MARKER: &str = "LucideIcons.";

/// Styling property stripped by the icon migrations.
pub const SHADOW_PROPERTY: &str = "boxShadow";

/// Number of fired rules listed per file in verbose output.
pub const VERBOSE_RULE_PREVIEW: usize = 3;

/// Regex matching one import directive (`import '...'` with optional suffix).
///
/// The suffix (`as`, `show`, `hide`) may wrap onto following lines.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^[ \t]*import\s+(?:'[^'\n]*'|"[^"\n]*")[^;]*;"#)
            .expect("Invalid import regex pattern")
    })
}

/// Regex matching the head of a file that must stay first: leading
/// comments followed by an optional `library` directive.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_preamble_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\A(?:\s*(?://[^\n]*|/\*(?s:.)*?\*/))*(?:\s*library\b[^;]*;)?")
            .expect("Invalid preamble regex pattern")
    })
}

/// Folders never descended into when scanning a project.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert(".git");
        s.insert(".dart_tool");
        s.insert(".fvm");
        s.insert(".idea");
        s.insert(".pub-cache");
        s.insert("build");
        s.insert("node_modules");
        s.insert("Pods");
        s
    })
}

pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_import_re as IMPORT_RE;
pub use get_preamble_re as PREAMBLE_RE;
