//! Migration run command.

use crate::catalog::Migration;
use crate::output::{
    create_progress_bar, print_file_report, print_run_footer, print_run_header,
};
use crate::rewrite::Pipeline;
use crate::summary::{FileReport, FileStatus, RunSummary};
use crate::targets::{resolve, DiscoveryOptions, Target};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options for a migration run
#[derive(Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct MigrateOptions {
    /// Compute and report without writing
    pub dry_run: bool,
    /// List fired rules per modified file
    pub verbose: bool,
    /// Print the summary as JSON instead of the transcript
    pub json: bool,
    /// Show a progress bar on stderr
    pub progress: bool,
}

/// Rewrites one file with `pipeline`.
///
/// The file is written only when the rewritten text differs from what was
/// read. Errors are captured in the report rather than returned.
#[must_use]
pub fn process_file(target: &Target, pipeline: &Pipeline, dry_run: bool) -> FileReport {
    if !target.path.exists() {
        return FileReport::new(&target.display, FileStatus::NotFound);
    }

    let original = match fs::read_to_string(&target.path) {
        Ok(text) => text,
        Err(e) => return FileReport::new(&target.display, FileStatus::Failed(e.to_string())),
    };

    let rewrite = pipeline.apply(&original);
    if rewrite.text == original {
        return FileReport::new(&target.display, FileStatus::Unchanged);
    }

    if !dry_run {
        if let Err(e) = fs::write(&target.path, &rewrite.text) {
            return FileReport::new(&target.display, FileStatus::Failed(e.to_string()));
        }
    }

    FileReport {
        path: target.display.clone(),
        status: FileStatus::Modified,
        hits: rewrite.hits,
    }
}

/// Runs every plan of `migration` against files under `base`.
///
/// Files are processed one at a time, in plan order. Per-file failures are
/// reported and never stop the run.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn run_migration<W: Write>(
    migration: &Migration,
    base: &Path,
    discovery: &DiscoveryOptions,
    options: &MigrateOptions,
    mut writer: W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::new(migration.kind, options.dry_run);

    let batches: Vec<(Vec<Target>, &Pipeline)> = migration
        .plans
        .iter()
        .map(|plan| (resolve(&plan.targets, base, discovery), &plan.pipeline))
        .collect();
    let total: usize = batches.iter().map(|(targets, _)| targets.len()).sum();

    if options.verbose {
        eprintln!(
            "[VERBOSE] {}: {} plan(s), {} rule(s), {} file(s)",
            migration.kind.name(),
            migration.plans.len(),
            migration.rule_count(),
            total
        );
    }

    if !options.json {
        print_run_header(&mut writer, migration.kind, options.dry_run)?;
    }

    let progress = if options.progress && !options.json {
        Some(create_progress_bar(total as u64))
    } else {
        None
    };

    for (targets, pipeline) in batches {
        for target in &targets {
            let report = process_file(target, pipeline, options.dry_run);
            if !options.json {
                match &progress {
                    Some(pb) => {
                        pb.suspend(|| print_file_report(&mut writer, &report, options.verbose))?;
                        pb.inc(1);
                    }
                    None => print_file_report(&mut writer, &report, options.verbose)?,
                }
            }
            summary.record(report);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        print_run_footer(&mut writer, &summary)?;
    }

    Ok(summary)
}
