//! Migration listing command.

use crate::catalog::{MigrationKind, Plan};
use crate::output::{print_migration_table, MigrationRow};

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ListedMigration {
    name: &'static str,
    description: &'static str,
    targets: Vec<String>,
    rules: usize,
}

/// Lists the built-in migrations, as a table or as JSON.
///
/// # Errors
///
/// Returns an error if a migration fails to build or writing fails.
pub fn run_list<W: Write>(json: bool, mut writer: W) -> Result<()> {
    let mut listed = Vec::with_capacity(MigrationKind::ALL.len());
    for kind in MigrationKind::ALL {
        let migration = kind.build()?;
        listed.push(ListedMigration {
            name: kind.name(),
            description: kind.description(),
            targets: migration
                .plans
                .iter()
                .map(|plan: &Plan| plan.targets.describe())
                .collect(),
            rules: migration.rule_count(),
        });
    }

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&listed)?)?;
        return Ok(());
    }

    let rows: Vec<MigrationRow> = listed
        .into_iter()
        .map(|m| MigrationRow {
            name: m.name,
            description: m.description,
            targets: m.targets.join(", "),
            rules: m.rules,
        })
        .collect();
    print_migration_table(&mut writer, &rows)?;
    Ok(())
}
