//! Built-in migrations.
//!
//! Each migration is a list of [`Plan`]s; a plan pairs a [`Pipeline`] with
//! the files it applies to. Most migrations have a single plan, the targeted
//! cleanup has one per file.

mod lucide;
mod material;
mod targeted;

pub use lucide::{CONST_REMOVALS, DUPLICATE_PREFIX, LUCIDE_NAME_FIXES};
pub use material::{MATERIAL_ICONS, REMAINING_ICONS};
pub use targeted::{TargetedFix, CLEANUP_FILES, TARGETED_FIXES};

use crate::constants::{DEFAULT_SCAN_DIR, SHADOW_PROPERTY};
use crate::rewrite::{Cleanup, DeclarationInjector, Pipeline, Rule, RuleError, RuleSet};
use crate::targets::Targets;
use clap::ValueEnum;
use serde::Serialize;

/// Names of the built-in migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MigrationKind {
    /// Material icons to Lucide, strip shadows, add the import.
    ReplaceIcons,
    /// Second pass over the files the first one left unfinished.
    CleanupRemaining,
    /// Repair invalid Lucide references.
    FixLucide,
    /// One-off replacements in specific files.
    FinalCleanup,
    /// Every rule, in order, over the whole source tree.
    All,
}

impl MigrationKind {
    /// Every migration, in the order they were meant to be run.
    pub const ALL: [Self; 5] = [
        Self::ReplaceIcons,
        Self::CleanupRemaining,
        Self::FixLucide,
        Self::FinalCleanup,
        Self::All,
    ];

    /// CLI name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ReplaceIcons => "replace-icons",
            Self::CleanupRemaining => "cleanup-remaining",
            Self::FixLucide => "fix-lucide",
            Self::FinalCleanup => "final-cleanup",
            Self::All => "all",
        }
    }

    /// One-line description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ReplaceIcons => {
                "Replace Material icons with Lucide icons, remove boxShadow, add the Lucide import"
            }
            Self::CleanupRemaining => {
                "Remove remaining boxShadow blocks and replace the icons the first pass missed"
            }
            Self::FixLucide => {
                "Fix LucideLucideIcons typos, invalid Lucide names and const Lucide icons"
            }
            Self::FinalCleanup => "Replace icons used by a few specific screens",
            Self::All => "Run every rule table, cleanup and import injection over lib/",
        }
    }

    /// Compiles the migration.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn build(self) -> Result<Migration, RuleError> {
        let plans = match self {
            Self::ReplaceIcons => vec![Plan::new(
                Targets::scan(DEFAULT_SCAN_DIR),
                Pipeline::new()
                    .rules(material_rules()?)
                    .cleanup(Cleanup::removing([SHADOW_PROPERTY])?)
                    .inject(DeclarationInjector::default()),
            )],
            Self::CleanupRemaining => vec![Plan::new(
                Targets::files(CLEANUP_FILES.iter().copied()),
                Pipeline::new()
                    .rules(remaining_rules()?)
                    .cleanup(Cleanup::aggressive([SHADOW_PROPERTY])?)
                    .inject(DeclarationInjector::default()),
            )],
            Self::FixLucide => vec![Plan::new(
                Targets::scan(DEFAULT_SCAN_DIR),
                Pipeline::new().rules(lucide_fix_rules()?),
            )],
            Self::FinalCleanup => TARGETED_FIXES
                .iter()
                .map(|fix| {
                    Ok(Plan::new(
                        Targets::files([fix.file]),
                        Pipeline::new().rules(targeted_rules(fix)?),
                    ))
                })
                .collect::<Result<_, RuleError>>()?,
            Self::All => {
                let mut targeted = RuleSet::new("targeted");
                for fix in TARGETED_FIXES {
                    for rule in targeted_rules(fix)?.rules() {
                        targeted.push(rule.clone());
                    }
                }
                vec![Plan::new(
                    Targets::scan(DEFAULT_SCAN_DIR),
                    Pipeline::new()
                        .rules(material_rules()?)
                        .rules(remaining_rules()?)
                        .rules(targeted)
                        .rules(lucide_fix_rules()?)
                        .cleanup(Cleanup::aggressive([SHADOW_PROPERTY])?)
                        .inject(DeclarationInjector::default()),
                )]
            }
        };
        Ok(Migration { kind: self, plans })
    }
}

/// A pipeline and the files it runs on.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Files to rewrite.
    pub targets: Targets,
    /// Rewrite applied to each file.
    pub pipeline: Pipeline,
}

impl Plan {
    /// Pairs targets with a pipeline.
    #[must_use]
    pub fn new(targets: Targets, pipeline: Pipeline) -> Self {
        Self { targets, pipeline }
    }
}

/// A compiled migration.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Which built-in migration this is.
    pub kind: MigrationKind,
    /// Plans in execution order.
    pub plans: Vec<Plan>,
}

impl Migration {
    /// Total number of rules across plans.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.plans.iter().map(|p| p.pipeline.rule_count()).sum()
    }

    /// Points every plan at `targets` instead of its built-in files.
    ///
    /// Plans are merged into one pipeline first so each file sees every
    /// rule exactly once.
    #[must_use]
    pub fn retarget(mut self, targets: Targets) -> Self {
        if self.plans.len() == 1 {
            self.plans[0].targets = targets;
            return self;
        }
        let mut merged = Pipeline::new();
        for plan in &self.plans {
            for rule_set in plan.pipeline.rule_sets() {
                merged.push_rules(rule_set.clone());
            }
        }
        self.plans = vec![Plan::new(targets, merged)];
        self
    }

    /// Adds `rule_set` to the end of every plan's substitution stage.
    pub fn extend_rules(&mut self, rule_set: &RuleSet) {
        for plan in &mut self.plans {
            plan.pipeline.push_rules(rule_set.clone());
        }
    }

    /// Swaps the declaration used by plans that inject one.
    pub fn set_injector(&mut self, injector: &DeclarationInjector) {
        for plan in &mut self.plans {
            plan.pipeline.replace_injector(injector);
        }
    }
}

/// Wraps an icon pattern in word boundaries.
///
/// The leading boundary keeps `Icons.` from matching inside `LucideIcons.`,
/// the trailing one keeps `Icons.map` from matching `Icons.map_outlined`.
#[must_use]
pub fn anchored(pattern: &str) -> String {
    format!(r"\b{pattern}\b")
}

/// Rule set from an unanchored icon table.
///
/// # Errors
///
/// Returns the first pattern that fails to compile.
pub fn icon_rules(name: &str, table: &[(&str, &str)]) -> Result<RuleSet, RuleError> {
    let mut set = RuleSet::new(name);
    for (pattern, replacement) in table {
        let label = format!("{} -> {replacement}", pattern.replace(r"\.", "."));
        set.push(Rule::new(&anchored(pattern), *replacement)?.with_label(label));
    }
    Ok(set)
}

/// First-pass Material to Lucide rules.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn material_rules() -> Result<RuleSet, RuleError> {
    icon_rules("material", MATERIAL_ICONS)
}

/// Second-pass Material to Lucide rules.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn remaining_rules() -> Result<RuleSet, RuleError> {
    icon_rules("remaining", REMAINING_ICONS)
}

/// Repairs of Lucide references: prefix typo, invalid names, `const`.
///
/// The prefix fix runs first so the name fixes see `LucideIcons.`.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn lucide_fix_rules() -> Result<RuleSet, RuleError> {
    let mut set = RuleSet::new("lucide-fixes");
    let (pattern, replacement) = DUPLICATE_PREFIX;
    set.push(Rule::new(pattern, replacement)?.with_label("LucideLucideIcons -> LucideIcons"));
    for (wrong, right) in LUCIDE_NAME_FIXES {
        let pattern = anchored(&format!(r"LucideIcons\.{}", regex::escape(wrong)));
        set.push(
            Rule::new(&pattern, format!("LucideIcons.{right}"))?
                .with_label(format!("LucideIcons.{wrong} -> LucideIcons.{right}")),
        );
    }
    for (pattern, replacement) in CONST_REMOVALS {
        set.push(Rule::new(pattern, *replacement)?);
    }
    Ok(set)
}

/// Rules of one targeted fix: its icons, then its typo fixes.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn targeted_rules(fix: &TargetedFix) -> Result<RuleSet, RuleError> {
    let mut set = icon_rules("targeted", fix.icons)?;
    for (pattern, replacement) in fix.typos {
        set.push(Rule::new(pattern, *replacement)?);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_migration_builds() {
        for kind in MigrationKind::ALL {
            let migration = kind.build().unwrap();
            assert!(migration.rule_count() > 0, "{} has no rules", kind.name());
        }
    }

    #[test]
    fn test_names_match_value_enum() {
        for kind in MigrationKind::ALL {
            assert_eq!(MigrationKind::from_str(kind.name(), false).unwrap(), kind);
        }
    }

    #[test]
    fn test_final_cleanup_has_plan_per_file() {
        let migration = MigrationKind::FinalCleanup.build().unwrap();
        assert_eq!(migration.plans.len(), TARGETED_FIXES.len());
    }

    #[test]
    fn test_retarget_merges_plans() {
        let migration = MigrationKind::FinalCleanup
            .build()
            .unwrap()
            .retarget(Targets::files(["x.dart"]));
        assert_eq!(migration.plans.len(), 1);
        let rewrite = migration.plans[0].pipeline.apply("Icons.pool Icons.tune");
        assert_eq!(rewrite.text, "LucideIcons.waves LucideIcons.sliders");
    }

    #[test]
    fn test_anchoring_skips_lucide_and_longer_names() {
        let set = material_rules().unwrap();
        let text = "LucideIcons.map Icons.map_outlined CupertinoIcons.map";
        assert_eq!(set.apply(text).text, text);
    }
}
