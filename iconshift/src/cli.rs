use crate::catalog::MigrationKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.iconshift.toml):
  Looked up from the current directory upwards.

  [iconshift]
  extension = \"dart\"                 # Extension of scanned files
  exclude_folders = [\"generated\"]    # Skipped while scanning
  import_line = \"import 'package:lucide_icons/lucide_icons.dart';\"

  # Extra rules, run after the built-in tables
  [[iconshift.rules]]
  pattern = 'Icons\\.pets\\b'
  replacement = \"LucideIcons.dog\"
  # literal = true                   # Match pattern verbatim
";

/// Which files to run against.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Files or directories to process instead of the migration's own targets.
    pub paths: Vec<PathBuf>,

    /// Project root that migration targets are relative to.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Extension of scanned files, without the dot (overrides config).
    #[arg(long)]
    pub ext: Option<String>,

    /// Folders to skip while scanning.
    #[arg(long = "exclude-folder", alias = "exclude-folders")]
    pub exclude_folders: Vec<String>,
}

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output the run summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// List the rules that fired for each modified file.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Apply a migration to the source tree
    Run {
        /// Migration to apply.
        #[arg(value_enum)]
        migration: MigrationKind,

        /// File selection.
        #[command(flatten)]
        targets: TargetArgs,

        /// Report what would change without writing files.
        #[arg(long)]
        dry_run: bool,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
    /// List built-in migrations
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Exit with code 1 if a migration would change any file
    Check {
        /// Migration to check.
        #[arg(value_enum)]
        migration: MigrationKind,

        /// File selection.
        #[command(flatten)]
        targets: TargetArgs,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    name = "iconshift",
    version,
    about = "iconshift - Regex-driven icon migrations for Flutter source trees",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,
}
