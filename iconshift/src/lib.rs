//! Core library for the iconshift migration tool.
//!
//! This library rewrites Flutter source files with ordered regex rules,
//! strips obsolete styling properties, and adds the Lucide import where
//! the rewritten code needs it.

#![allow(clippy::similar_names, clippy::items_after_statements)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the rewrite engine.
/// This includes rules, rule sets, structural cleanup, and the import injector.
pub mod rewrite;

/// Module containing the built-in migrations and their rule tables.
pub mod catalog;

/// Module resolving which files a migration runs against.
pub mod targets;

/// Module defining per-file outcomes and run totals.
pub mod summary;

/// Module for loading configuration.
pub mod config;

/// Module containing utility functions.
/// This includes path display and source file discovery.
pub mod utils;

/// Module defining the entry point logic shared by both binaries.
pub mod entry_point;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module for CLI output formatting with colored text, tables and progress bars.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;
