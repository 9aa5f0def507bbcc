use crate::catalog::MigrationKind;
use crate::constants::VERBOSE_RULE_PREVIEW;
use crate::summary::{FileReport, FileStatus, RunSummary};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Create a progress bar with file count.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the line announcing a migration.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_run_header(
    writer: &mut impl Write,
    migration: MigrationKind,
    dry_run: bool,
) -> std::io::Result<()> {
    let title = format!("Running {}", migration.name()).cyan().bold();
    if dry_run {
        writeln!(writer, "{title} {}", "[DRY-RUN]".yellow())
    } else {
        writeln!(writer, "{title}")
    }
}

/// Print the outcome of one file.
///
/// Unchanged files print nothing. With `verbose`, modified files list the
/// first few rules that fired.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_report(
    writer: &mut impl Write,
    report: &FileReport,
    verbose: bool,
) -> std::io::Result<()> {
    match &report.status {
        FileStatus::Modified => {
            writeln!(writer, "{} {}", "✓".green(), report.path)?;
            if verbose {
                print_rule_hits(writer, report)?;
            }
        }
        FileStatus::Unchanged => {}
        FileStatus::NotFound => {
            writeln!(writer, "{} File not found: {}", "✗".red(), report.path)?;
        }
        FileStatus::Failed(message) => {
            writeln!(
                writer,
                "{} {}: {}",
                "Error processing".red().bold(),
                report.path,
                message
            )?;
        }
    }
    Ok(())
}

fn print_rule_hits(writer: &mut impl Write, report: &FileReport) -> std::io::Result<()> {
    for hit in report.hits.iter().take(VERBOSE_RULE_PREVIEW) {
        writeln!(
            writer,
            "    {} {} {}",
            "-".dimmed(),
            hit.rule,
            format!("({})", hit.matches).dimmed()
        )?;
    }
    let rest = report.hits.len().saturating_sub(VERBOSE_RULE_PREVIEW);
    if rest > 0 {
        writeln!(writer, "    {}", format!("... and {rest} more").dimmed())?;
    }
    Ok(())
}

/// Print the closing count line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_run_footer(writer: &mut impl Write, summary: &RunSummary) -> std::io::Result<()> {
    writeln!(writer)?;
    let verb = if summary.dry_run {
        "Would modify"
    } else {
        "Modified"
    };
    writeln!(
        writer,
        "{}",
        format!("{verb} {} files", summary.modified).green().bold()
    )?;
    if summary.not_found > 0 || summary.failed > 0 {
        writeln!(
            writer,
            "{}",
            format!(
                "{} not found, {} failed",
                summary.not_found, summary.failed
            )
            .yellow()
        )?;
    }
    Ok(())
}

/// One row of the migration listing.
pub struct MigrationRow {
    /// Migration name.
    pub name: &'static str,
    /// What it does.
    pub description: &'static str,
    /// Default targets, described.
    pub targets: String,
    /// Rule count across plans.
    pub rules: usize,
}

/// Print the built-in migrations as a table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_migration_table(
    writer: &mut impl Write,
    rows: &[MigrationRow],
) -> std::io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Migration", "Description", "Targets", "Rules"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.name).add_attribute(Attribute::Bold),
            Cell::new(row.description),
            Cell::new(&row.targets).add_attribute(Attribute::Dim),
            Cell::new(row.rules),
        ]);
    }

    writeln!(writer, "{table}")
}

/// Print a configuration warning.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_warning(writer: &mut impl Write, message: &str) -> std::io::Result<()> {
    writeln!(writer, "{} {message}", "Warning:".yellow().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RuleHit;

    fn render(report: &FileReport, verbose: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_file_report(&mut out, report, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            render(&FileReport::new("lib/a.dart", FileStatus::Modified), false),
            "✓ lib/a.dart\n"
        );
        assert_eq!(
            render(&FileReport::new("lib/b.dart", FileStatus::NotFound), false),
            "✗ File not found: lib/b.dart\n"
        );
        assert_eq!(
            render(
                &FileReport::new("lib/c.dart", FileStatus::Failed("denied".into())),
                false
            ),
            "Error processing lib/c.dart: denied\n"
        );
        assert_eq!(
            render(&FileReport::new("lib/d.dart", FileStatus::Unchanged), true),
            ""
        );
    }

    #[test]
    fn test_verbose_preview_is_truncated() {
        let mut report = FileReport::new("lib/a.dart", FileStatus::Modified);
        report.hits = (0..5)
            .map(|i| RuleHit {
                rule_set: "material".into(),
                rule: format!("rule {i}"),
                matches: 1,
            })
            .collect();

        let text = render(&report, true);
        assert!(text.contains("- rule 2 (1)"));
        assert!(!text.contains("rule 3"));
        assert!(text.contains("... and 2 more"));
    }
}
