use crate::catalog::{Migration, MigrationKind};
use crate::cli::{Cli, Commands, OutputOptions, TargetArgs};
use crate::commands::{run_list, run_migration, MigrateOptions};
use crate::config::Config;
use crate::constants::DEFAULT_USAGE_MARKER;
use crate::output::print_warning;
use crate::rewrite::DeclarationInjector;
use crate::targets::{DiscoveryOptions, Targets};
use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Run iconshift with the given arguments.
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run iconshift with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if writing output fails or a built-in rule does not compile.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["iconshift".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(2);
                }
            }
        }
    };

    match cli_var.command {
        Commands::List { json } => {
            run_list(json, &mut *writer)?;
            Ok(0)
        }
        Commands::Run {
            migration,
            targets,
            dry_run,
            output,
        } => {
            run_command(migration, &targets, dry_run, &output, writer)?;
            Ok(0)
        }
        Commands::Check {
            migration,
            targets,
            output,
        } => {
            let modified = run_command(migration, &targets, true, &output, writer)?;
            Ok(i32::from(modified > 0))
        }
    }
}

/// Builds, configures and runs one migration. Returns the modified count.
fn run_command<W: std::io::Write>(
    kind: MigrationKind,
    args: &TargetArgs,
    dry_run: bool,
    output: &OutputOptions,
    writer: &mut W,
) -> Result<usize> {
    let base = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load_from_path(&base);
    let settings = &config.iconshift;

    let mut exclude = settings.exclude_folders.clone().unwrap_or_default();
    exclude.extend(args.exclude_folders.iter().cloned());
    let discovery = DiscoveryOptions {
        extension: args.ext.clone().or_else(|| settings.extension.clone()),
        exclude,
        verbose: output.verbose,
    };

    if output.verbose && !output.json {
        eprintln!("[VERBOSE] iconshift v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Root: {}", base.display());
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
            None => eprintln!("[VERBOSE] Config: none"),
        }
        eprintln!("[VERBOSE] Excludes: {:?}", discovery.exclude);
        eprintln!();
    }

    let migration = configure(kind, &config, &args.paths, &base, output, writer)?;

    let options = MigrateOptions {
        dry_run,
        verbose: output.verbose,
        json: output.json,
        progress: !output.verbose && std::io::stderr().is_terminal(),
    };
    let summary = run_migration(&migration, &base, &discovery, &options, &mut *writer)?;
    Ok(summary.modified)
}

/// Applies config and CLI overrides to a built-in migration.
fn configure<W: std::io::Write>(
    kind: MigrationKind,
    config: &Config,
    paths: &[PathBuf],
    base: &Path,
    output: &OutputOptions,
    writer: &mut W,
) -> Result<Migration> {
    let mut migration = kind.build()?;

    if !paths.is_empty() {
        // Listed paths are relative to the root; absolute ones under it are shortened.
        let relative: Vec<PathBuf> = paths
            .iter()
            .map(|p| p.strip_prefix(base).unwrap_or(p).to_path_buf())
            .collect();
        migration = migration.retarget(Targets::Files(relative));
    }

    if let Some(line) = &config.iconshift.import_line {
        migration.set_injector(&DeclarationInjector::for_import(line, DEFAULT_USAGE_MARKER));
    }

    let (custom, errors) = config.iconshift.custom_rules();
    for error in errors {
        if output.json {
            eprintln!("Warning: skipping custom rule: {error}");
        } else {
            print_warning(writer, &format!("skipping custom rule: {error}"))?;
        }
    }
    if !custom.is_empty() {
        migration.extend_rules(&custom);
    }

    Ok(migration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_exits_zero() {
        let mut out = Vec::new();
        let code = run_with_args_to(vec!["--help".into()], &mut out).unwrap();
        assert_eq!(code, 0);
        assert!(String::from_utf8(out).unwrap().contains(".iconshift.toml"));
    }

    #[test]
    fn test_bad_arguments_exit_two() {
        let mut out = Vec::new();
        let code = run_with_args_to(vec!["run".into(), "bogus".into()], &mut out).unwrap();
        assert_eq!(code, 2);
    }
}
