//! Substitution, cleanup and injection chained over one document.

use super::cleanup::Cleanup;
use super::inject::DeclarationInjector;
use super::rules::{Rewrite, RuleSet};

/// The full rewrite applied to each file of a migration.
///
/// Stages always run in the same order: every rule set, then the cleanup,
/// then the declaration injector.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rule_sets: Vec<RuleSet>,
    cleanup: Option<Cleanup>,
    injector: Option<DeclarationInjector>,
}

impl Pipeline {
    /// Creates an empty pipeline, which leaves every document untouched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule set.
    #[must_use]
    pub fn rules(mut self, rule_set: RuleSet) -> Self {
        self.rule_sets.push(rule_set);
        self
    }

    /// Sets the cleanup stage.
    #[must_use]
    pub fn cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Sets the declaration injector.
    #[must_use]
    pub fn inject(mut self, injector: DeclarationInjector) -> Self {
        self.injector = Some(injector);
        self
    }

    /// Replaces the injector if the pipeline has one.
    pub fn replace_injector(&mut self, injector: &DeclarationInjector) {
        if self.injector.is_some() {
            self.injector = Some(injector.clone());
        }
    }

    /// Appends a rule set after the existing ones.
    pub fn push_rules(&mut self, rule_set: RuleSet) {
        self.rule_sets.push(rule_set);
    }

    /// Rule sets in application order.
    #[must_use]
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// Number of rules across every stage.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rule_sets.iter().map(RuleSet::len).sum::<usize>()
            + self.cleanup.as_ref().map_or(0, Cleanup::len)
            + usize::from(self.injector.is_some())
    }

    /// Runs every stage over `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> Rewrite {
        let mut rewrite = Rewrite::unchanged(text);
        for rule_set in &self.rule_sets {
            rule_set.apply_to(&mut rewrite);
        }
        if let Some(cleanup) = &self.cleanup {
            cleanup.apply_to(&mut rewrite);
        }
        if let Some(injector) = &self.injector {
            injector.apply_to(&mut rewrite);
        }
        rewrite
    }
}
