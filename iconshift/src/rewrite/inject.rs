//! Conditional insertion of an import declaration.

use super::rewriter::{ByteRangeRewriter, Edit};
use super::rules::{Rewrite, RuleHit};
use crate::constants::{DEFAULT_IMPORT_LINE, DEFAULT_USAGE_MARKER, IMPORT_RE, PREAMBLE_RE};

const RULE_SET: &str = "inject";

/// Inserts a declaration line after the last import of the document.
///
/// The line is only added when the document uses the symbol it provides
/// (`usage_marker` is present) and does not already declare it (`marker`
/// is absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationInjector {
    declaration: String,
    marker: String,
    usage_marker: String,
}

impl Default for DeclarationInjector {
    fn default() -> Self {
        Self::for_import(DEFAULT_IMPORT_LINE, DEFAULT_USAGE_MARKER)
    }
}

impl DeclarationInjector {
    /// Creates an injector with an explicit canonical marker.
    #[must_use]
    pub fn new(
        declaration: impl Into<String>,
        marker: impl Into<String>,
        usage_marker: impl Into<String>,
    ) -> Self {
        Self {
            declaration: declaration.into(),
            marker: marker.into(),
            usage_marker: usage_marker.into(),
        }
    }

    /// Creates an injector for an `import '...';` line.
    ///
    /// The quoted URI becomes the canonical marker, so an existing import
    /// of the same URI with a different suffix (`as`, `show`) still counts.
    #[must_use]
    pub fn for_import(line: &str, usage_marker: &str) -> Self {
        let line = line.trim();
        let marker = quoted_uri(line).unwrap_or(line);
        Self::new(line, marker, usage_marker)
    }

    /// Whether `text` needs the declaration.
    #[must_use]
    pub fn needs_declaration(&self, text: &str) -> bool {
        text.contains(&self.usage_marker) && !text.contains(&self.marker)
    }

    /// Byte offset where the declaration goes, and whether it follows
    /// existing content on its line.
    ///
    /// Without any import the declaration goes below leading comments and
    /// the `library` directive, or to the very top when there are none.
    #[must_use]
    pub fn insertion_point(text: &str) -> (usize, bool) {
        if let Some(last) = IMPORT_RE().find_iter(text).last() {
            return (last.end(), true);
        }
        let head = PREAMBLE_RE().find(text).map_or(0, |m| m.end());
        (head, head > 0)
    }

    /// Returns `text` with the declaration inserted, or `None` if it is not
    /// needed.
    #[must_use]
    pub fn inject(&self, text: &str) -> Option<String> {
        if !self.needs_declaration(text) {
            return None;
        }
        let (position, after_content) = Self::insertion_point(text);
        let content = if after_content {
            format!("\n{}", self.declaration)
        } else {
            format!("{}\n", self.declaration)
        };
        let mut rewriter = ByteRangeRewriter::new(text);
        rewriter.add_edit(Edit::insert(position, content));
        rewriter.apply().ok()
    }

    /// Injects into an in-progress rewrite and records the hit.
    pub fn apply_to(&self, rewrite: &mut Rewrite) {
        if let Some(text) = self.inject(&rewrite.text) {
            rewrite.text = text;
            rewrite.hits.push(RuleHit {
                rule_set: RULE_SET.to_owned(),
                rule: format!("add {}", self.declaration),
                matches: 1,
            });
        }
    }
}

fn quoted_uri(line: &str) -> Option<&str> {
    let start = line.find(['\'', '"'])?;
    let quote = line[start..].chars().next()?;
    let rest = &line[start + 1..];
    let end = rest.find(quote)?;
    Some(&rest[..end])
}
