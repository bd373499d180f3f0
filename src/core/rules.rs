//! Replacement rule configuration.
//!
//! Rules are plain literal pairs loaded from a JSON rules file. Two ordered
//! sets exist, "model" rules and "relation" rules; they carry no differing
//! runtime semantics, but application order is significant: model rules run
//! first, then relation rules, each set in its declared order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// One replacement: every occurrence of `search` becomes `replace`.
///
/// Both sides are exact literals, never patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub search: String,
    pub replace: String,
}

/// The ordered rule sets from a rules file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleFile {
    pub model_rules: Vec<Rule>,
    pub relation_rules: Vec<Rule>,
}

impl RuleFile {
    /// Load and validate a rules file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = io::read_file(path, "read rules file")?;
        let rules: RuleFile = serde_json::from_str(&raw)
            .map_err(|e| {
                Error::config_invalid_json(path.to_string_lossy(), e)
                    .with_hint("See rules.example.json for the expected shape")
            })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Iterate every rule in application order: model rules, then relation rules.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.model_rules.iter().chain(self.relation_rules.iter())
    }

    pub fn len(&self) -> usize {
        self.model_rules.len() + self.relation_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model_rules.is_empty() && self.relation_rules.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::config_invalid_value(
                "rules",
                None,
                "Rules file contains no rules",
            ));
        }

        for rule in self.iter() {
            if rule.search.is_empty() {
                return Err(Error::config_invalid_value(
                    "search",
                    Some(rule.replace.clone()),
                    "Empty search literal",
                ));
            }
        }

        Ok(())
    }
}
