use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;
use crate::rewrite::{Rule, RuleError, RuleSet};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[iconshift]` section.
    pub iconshift: IconShiftConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for iconshift.
pub struct IconShiftConfig {
    /// Extension scanned by migrations that walk a directory.
    pub extension: Option<String>,
    /// Extra folder names to skip while scanning.
    pub exclude_folders: Option<Vec<String>>,
    /// Import line added by migrations that inject one.
    pub import_line: Option<String>,
    /// Project-specific rules run after the built-in tables.
    #[serde(default)]
    pub rules: Vec<CustomRule>,
}

/// A user-defined substitution.
#[derive(Debug, Deserialize, Clone)]
pub struct CustomRule {
    /// Regex, or plain text when `literal` is set.
    pub pattern: String,
    /// Replacement; may reference capture groups unless `literal` is set.
    pub replacement: String,
    /// Shown in verbose output instead of the pattern.
    pub label: Option<String>,
    /// Match `pattern` verbatim.
    #[serde(default)]
    pub literal: bool,
}

impl CustomRule {
    /// Compiles the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regex.
    pub fn compile(&self) -> Result<Rule, RuleError> {
        let rule = if self.literal {
            Rule::literal(&self.pattern, &self.replacement)?
        } else {
            Rule::new(&self.pattern, self.replacement.as_str())?
        };
        Ok(match &self.label {
            Some(label) => rule.with_label(label.as_str()),
            None => rule,
        })
    }
}

impl IconShiftConfig {
    /// Compiles the custom rules into one rule set.
    ///
    /// Rules that fail to compile are returned alongside instead of failing
    /// the whole set.
    #[must_use]
    pub fn custom_rules(&self) -> (RuleSet, Vec<RuleError>) {
        let mut set = RuleSet::new("custom");
        let mut errors = Vec::new();
        for custom in &self.rules {
            match custom.compile() {
                Ok(rule) => set.push(rule),
                Err(e) => errors.push(e),
            }
        }
        (set, errors)
    }
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A file that cannot be read or parsed is skipped and the search
    /// continues in the parent directory.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
