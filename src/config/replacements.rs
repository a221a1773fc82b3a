use crate::error::{PomError, Result};
use serde::Deserialize;

/// A single literal substitution: every occurrence of `search` becomes `replace`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Replacement {
    pub search: String,
    pub replace: String,
}

impl Replacement {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// Ordered list of replacements. Each pair sees the output of the pairs before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    /// Builds a table, rejecting an empty list or an empty search literal.
    pub fn new(entries: Vec<Replacement>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PomError::Config(
                "replacement table must contain at least one entry".to_string(),
            ));
        }

        if let Some(index) = entries.iter().position(|r| r.search.is_empty()) {
            return Err(PomError::Config(format!(
                "replacement #{} has an empty search literal",
                index + 1
            )));
        }

        Ok(Self { entries })
    }

    /// Builds a table from flat `search, replace, search, replace, ...` values.
    pub fn from_pairs(values: &[String]) -> Result<Self> {
        if values.len() % 2 != 0 {
            return Err(PomError::Config(
                "each --replace needs a search and a replacement value".to_string(),
            ));
        }

        let entries = values
            .chunks_exact(2)
            .map(|pair| Replacement::new(pair[0].as_str(), pair[1].as_str()))
            .collect();

        Self::new(entries)
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Applies every pair in order, replacing all non-overlapping occurrences.
    pub fn apply(&self, content: &str) -> String {
        self.entries
            .iter()
            .fold(content.to_string(), |acc, r| acc.replace(&r.search, &r.replace))
    }
}

impl Default for ReplacementTable {
    /// Retargets the YCSB fork: `site.ycsb` group and the 0.18.0 snapshot version.
    fn default() -> Self {
        Self {
            entries: vec![
                Replacement::new(
                    "<groupId>site.ycsb</groupId>",
                    "<groupId>in.shvm.ycsb</groupId>",
                ),
                // Only the project's own snapshot version, not arbitrary dependency versions
                Replacement::new(
                    "<version>0.18.0-SNAPSHOT</version>",
                    "<version>0.18.0-shivam-SNAPSHOT</version>",
                ),
            ],
        }
    }
}
