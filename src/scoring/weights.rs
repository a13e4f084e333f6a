//! The signal-name → weight table driving the scorer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::issues::Issue;

/// One canonical checklist entry: a scored signal, its default weight and the
/// issue reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistEntry {
    pub signal: &'static str,
    pub default_weight: u32,
    pub issue: Issue,
}

/// The ten canonical weighted signals, in canonical (reporting) order.
/// Default weights sum to 100 so default scores read as percentages directly.
pub const CHECKLIST: [ChecklistEntry; 10] = [
    ChecklistEntry {
        signal: "title_contains_keyword",
        default_weight: 15,
        issue: Issue::MissingKeywordInTitle,
    },
    ChecklistEntry {
        signal: "h1_present",
        default_weight: 10,
        issue: Issue::MissingH1,
    },
    ChecklistEntry {
        signal: "h1_contains_keyword",
        default_weight: 10,
        issue: Issue::MissingKeywordInH1,
    },
    ChecklistEntry {
        signal: "h2_contains_keyword",
        default_weight: 5,
        issue: Issue::MissingKeywordInH2,
    },
    ChecklistEntry {
        signal: "keyword_density_ok",
        default_weight: 10,
        issue: Issue::KeywordDensityIssue,
    },
    ChecklistEntry {
        signal: "images_have_alt",
        default_weight: 10,
        issue: Issue::MissingAltTags,
    },
    ChecklistEntry {
        signal: "word_count_adequate",
        default_weight: 10,
        issue: Issue::LowWordCount,
    },
    ChecklistEntry {
        signal: "has_internal_links",
        default_weight: 10,
        issue: Issue::NoInternalLinks,
    },
    ChecklistEntry {
        signal: "has_external_links",
        default_weight: 5,
        issue: Issue::NoExternalLinks,
    },
    ChecklistEntry {
        signal: "meta_description",
        default_weight: 15,
        issue: Issue::MissingMetaDescription,
    },
];

/// Signal name → positive integer weight.
///
/// Immutable after construction: the scorer only reads it, and replacement
/// (after a successful training run) is wholesale. Weights must be positive —
/// callers validating external input should use [`WeightTable::validate`]
/// before constructing a scorer from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    entries: BTreeMap<String, u32>,
}

impl Default for WeightTable {
    /// The canonical ten-entry table.
    fn default() -> Self {
        Self {
            entries: CHECKLIST
                .iter()
                .map(|e| (e.signal.to_string(), e.default_weight))
                .collect(),
        }
    }
}

impl WeightTable {
    /// An empty table (scores everything to 0). Mostly useful in tests and
    /// for callers building a table entry by entry.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from explicit entries, e.g. a learned table.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The default table with per-key overrides merged on top (override wins).
    ///
    /// This is how workspace-specific weight tuning reaches the scorer:
    /// untouched canonical entries keep their defaults, and overrides may
    /// introduce additional signal names.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut table = Self::default();
        for (name, weight) in overrides {
            table.entries.insert(name, weight);
        }
        table
    }

    /// Weight for `name`, if present.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    /// Sum of all active weights.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|&w| w as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in reporting order: canonical checklist signals first (in
    /// canonical order), then any extra names alphabetically.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&str, u32)> {
        let canonical = CHECKLIST
            .iter()
            .filter_map(|e| self.get(e.signal).map(|w| (e.signal, w)));
        let extra = self
            .entries
            .iter()
            .filter(|(name, _)| !CHECKLIST.iter().any(|e| e.signal == name.as_str()))
            .map(|(name, &w)| (name.as_str(), w));
        canonical.chain(extra)
    }

    /// Rejects non-positive weights. The scorer assumes a validated table;
    /// run this on any externally supplied one.
    pub fn validate(&self) -> Result<(), InvalidWeight> {
        for (name, &weight) in &self.entries {
            if weight == 0 {
                return Err(InvalidWeight { name: name.clone() });
            }
        }
        Ok(())
    }
}

/// A weight table entry that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("weight for '{name}' must be a positive integer")]
pub struct InvalidWeight {
    pub name: String,
}
