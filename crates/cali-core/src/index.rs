//! Case-insensitive name index
//!
//! Maps lowercased canonical names and aliases to shared records. Built
//! once at startup and read-only afterwards, so it can be shared across
//! request handlers without locking.
//!
//! ## Collision policy
//!
//! 1. Canonical names are inserted first and are never overwritten.
//! 2. Aliases are inserted in table order; the first alias to claim a key
//!    keeps it.
//! 3. Aliases whose canonical target is not in the index are skipped.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::debug;

use crate::dataset::Dataset;
use crate::metric::CountryRecord;
use crate::names::ALIASES;

/// Normalize a name or query into an index key
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lookup table from normalized names to records
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: HashMap<String, Arc<CountryRecord>>,
    aliases_resolved: usize,
    aliases_dropped: usize,
}

impl NameIndex {
    /// Build an index over `records` using the built-in alias table
    pub fn build(records: &[Arc<CountryRecord>]) -> Self {
        Self::build_with_aliases(records, ALIASES)
    }

    /// Build an index over a dataset's countries
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::build(dataset.countries())
    }

    /// Build an index with a custom alias table
    pub fn build_with_aliases(records: &[Arc<CountryRecord>], aliases: &[(&str, &str)]) -> Self {
        let mut index = Self::default();

        for record in records {
            match index.entries.entry(normalize_key(&record.name)) {
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(record));
                }
                Entry::Occupied(slot) => {
                    debug!(key = %slot.key(), "Duplicate canonical name, keeping first");
                }
            }
        }

        for (alias, canonical) in aliases {
            let Some(target) = index.entries.get(&normalize_key(canonical)).cloned() else {
                debug!(alias, canonical, "Alias target not in dataset");
                index.aliases_dropped += 1;
                continue;
            };

            match index.entries.entry(normalize_key(alias)) {
                Entry::Vacant(slot) => {
                    slot.insert(target);
                    index.aliases_resolved += 1;
                }
                Entry::Occupied(slot) => {
                    debug!(
                        alias,
                        existing = %slot.get().name,
                        "Alias collides with an existing key, keeping existing"
                    );
                    index.aliases_dropped += 1;
                }
            }
        }

        debug!(
            keys = index.entries.len(),
            aliases = index.aliases_resolved,
            dropped = index.aliases_dropped,
            "Built name index"
        );

        index
    }

    /// Find a record by canonical name or alias
    ///
    /// The query is trimmed and lowercased; only exact matches hit.
    pub fn lookup(&self, query: &str) -> Option<&Arc<CountryRecord>> {
        self.entries.get(&normalize_key(query))
    }

    /// Total number of keys, canonical and alias
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of aliases that resolved to a record
    pub fn aliases_resolved(&self) -> usize {
        self.aliases_resolved
    }

    /// Number of aliases skipped (missing target or key collision)
    pub fn aliases_dropped(&self) -> usize {
        self.aliases_dropped
    }
}
