//! Structural cleanup after rule substitution.
//!
//! Properties are removed with regexes rather than a parser, so removing one
//! can leave separator residue behind. The steps here remove the property and
//! then repair the residue. Bracketed values with more than one level of
//! nesting are not matched and are left in place.

use super::rules::{Rewrite, Rule, RuleError};

const RULE_SET: &str = "cleanup";

/// Builds the pattern that removes `name: [ ... ]` together with the
/// separator in front of it.
///
/// The value may be prefixed with `const`, may span lines, and may contain
/// one level of nested `[...]` or `{...}`. A trailing separator directly
/// before a closing bracket is consumed too; the bracket is captured as `$1`
/// so the replacement can put it back.
#[must_use]
pub fn property_pattern(name: &str) -> String {
    format!(
        r",?\s*\b{}\s*:\s*(?:const\s+)?\[(?:[^\[\]{{}}]|\[[^\[\]]*\]|\{{[^{{}}]*\}})*\](?:,\s*([)\]]))?",
        regex::escape(name)
    )
}

/// Cleanup steps applied after the substitution rules.
#[derive(Debug, Clone)]
pub struct Cleanup {
    removals: Vec<Rule>,
    repairs: Vec<Rule>,
    aggressive: bool,
}

impl Cleanup {
    /// Removes the given properties and only repairs what a removal can leave
    /// at the start of an argument list.
    ///
    /// # Errors
    ///
    /// Returns an error if a property name produces an invalid pattern.
    pub fn removing<'a>(properties: impl IntoIterator<Item = &'a str>) -> Result<Self, RuleError> {
        let removals = properties
            .into_iter()
            .map(|name| {
                Rule::new(&property_pattern(name), "$1")
                    .map(|rule| rule.with_label(format!("remove {name}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            removals,
            repairs: vec![leading_separator()?],
            aggressive: false,
        })
    }

    /// Like [`Cleanup::removing`], and additionally collapses repeated
    /// separators and strips separators before closing brackets everywhere
    /// in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if a property name produces an invalid pattern.
    pub fn aggressive<'a>(
        properties: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, RuleError> {
        let mut cleanup = Self::removing(properties)?;
        cleanup.repairs = vec![
            Rule::new(r",(?:\s*,)+", ",")?.with_label("collapse separators"),
            Rule::new(r",\s*\)", ")")?.with_label("trailing separator before )"),
            Rule::new(r",\s*\]", "]")?.with_label("trailing separator before ]"),
            leading_separator()?,
        ];
        cleanup.aggressive = true;
        Ok(cleanup)
    }

    /// Total number of cleanup rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.removals.len() + self.repairs.len()
    }

    /// Whether there is nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs the removals, then the repairs.
    ///
    /// Repairs only run when something was removed, or when the cleanup is
    /// aggressive; a plain removal pass never touches unrelated code.
    pub fn apply_to(&self, rewrite: &mut Rewrite) {
        let before = rewrite.hits.len();
        for rule in &self.removals {
            rewrite.run(RULE_SET, rule);
        }
        let removed = rewrite.hits.len() > before;
        if removed || self.aggressive {
            for rule in &self.repairs {
                rewrite.run(RULE_SET, rule);
            }
        }
    }
}

/// `(,` left behind when the first argument was removed, with the spaces
/// after it.
fn leading_separator() -> Result<Rule, RuleError> {
    Ok(Rule::new(r"([(\[])(\s*),[ \t]*", "$1$2")?.with_label("separator after opening bracket"))
}
