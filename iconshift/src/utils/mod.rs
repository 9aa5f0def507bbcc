//! Utilities module for iconshift.
//!
//! This module provides various utility functions used across the codebase.

mod paths;

pub use paths::{collect_source_files, display_relative, is_excluded, normalize_display_path};
