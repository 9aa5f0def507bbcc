//! Commands module - CLI subcommand implementations.

mod list;
mod migrate;

pub use list::run_list;
pub use migrate::{process_file, run_migration, MigrateOptions};
