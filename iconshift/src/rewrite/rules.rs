//! Ordered regex substitution rules.

use super::rewriter::{ByteRangeRewriter, Edit};
use regex::Regex;
use serde::Serialize;

/// Errors raised while building rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The match pattern does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// A single compiled `(pattern, replacement)` pair.
///
/// The replacement may reference capture groups as `$1` or `${name}`.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
    label: String,
}

impl Rule {
    /// Compiles a rule. The label defaults to `pattern -> replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, RuleError> {
        let replacement = replacement.into();
        let compiled = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            label: format!("{pattern} -> {replacement}"),
            pattern: compiled,
            replacement,
        })
    }

    /// Builds a rule matching `needle` literally, with a literal replacement.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] only if the escaped needle
    /// exceeds the regex size limit.
    pub fn literal(needle: &str, replacement: &str) -> Result<Self, RuleError> {
        Ok(Self::new(&regex::escape(needle), replacement.replace('$', "$$"))?
            .with_label(format!("{needle} -> {replacement}")))
    }

    /// Overrides the label shown in reports.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces every non-overlapping match in `text`.
    ///
    /// Returns the rewritten text and the number of matches replaced.
    #[must_use]
    pub fn apply(&self, text: &str) -> (String, usize) {
        let edits: Vec<Edit> = self
            .pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let mut expanded = String::new();
                caps.expand(&self.replacement, &mut expanded);
                Some(Edit::new(whole.start(), whole.end(), expanded))
            })
            .collect();

        if edits.is_empty() {
            return (text.to_owned(), 0);
        }

        let count = edits.len();
        let mut rewriter = ByteRangeRewriter::new(text);
        rewriter.add_edits(edits);
        match rewriter.apply() {
            Ok(rewritten) => (rewritten, count),
            // Matches from one regex pass never overlap; keep the text untouched otherwise.
            Err(_) => (text.to_owned(), 0),
        }
    }
}

/// One rule that fired while rewriting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    /// Name of the rule set the rule belongs to.
    pub rule_set: String,
    /// Label of the rule.
    pub rule: String,
    /// Number of matches replaced.
    pub matches: usize,
}

/// Result of running rules over a document.
#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    /// The rewritten text.
    pub text: String,
    /// Rules that replaced at least one match, in application order.
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    /// Starts a rewrite from unchanged text.
    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hits: Vec::new(),
        }
    }

    /// Runs `rule` over the current text and records a hit when it fires.
    pub fn run(&mut self, rule_set: &str, rule: &Rule) {
        let (text, matches) = rule.apply(&self.text);
        if matches > 0 {
            self.text = text;
            self.hits.push(RuleHit {
                rule_set: rule_set.to_owned(),
                rule: rule.label().to_owned(),
                matches,
            });
        }
    }
}

/// A named, ordered list of rules.
///
/// Each rule sees the text produced by the rules before it.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Builds a rule set from `(pattern, replacement)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn from_pairs<'a>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, RuleError> {
        let mut set = Self::new(name);
        for (pattern, replacement) in pairs {
            set.push(Rule::new(pattern, replacement)?);
        }
        Ok(set)
    }

    /// Appends a rule at the end.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder-style [`RuleSet::push`].
    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// Name used in reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> Rewrite {
        let mut rewrite = Rewrite::unchanged(text);
        self.apply_to(&mut rewrite);
        rewrite
    }

    /// Applies every rule in order to an in-progress rewrite.
    pub fn apply_to(&self, rewrite: &mut Rewrite) {
        for rule in &self.rules {
            rewrite.run(&self.name, rule);
        }
    }
}
