//! Brawler → type lookup, normalized at load time.

use std::collections::{BTreeSet, HashMap};

use crate::models::{BrawlerKey, BrawlerType, BrawlerTypeEntry};

/// Case-insensitive mapping from brawler name to type.
///
/// Keys and values are normalized once when the index is built, so a
/// lookup is a single hash probe regardless of how the caller spells the
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeIndex {
    by_brawler: HashMap<BrawlerKey, BrawlerType>,
}

impl TypeIndex {
    /// Fold type entries into an index.
    ///
    /// Among spellings of the same name, the first one seen owns the key.
    /// A later entry with exactly that spelling replaces its type; entries
    /// with any other spelling are ignored.
    pub fn from_entries(entries: &[BrawlerTypeEntry]) -> Self {
        let mut owner: HashMap<BrawlerKey, &str> = HashMap::new();
        let mut by_brawler = HashMap::new();

        for entry in entries {
            let key = entry.key();
            match owner.get(&key).copied() {
                Some(raw) if raw != entry.brawler => continue,
                Some(_) => {}
                None => {
                    owner.insert(key.clone(), entry.brawler.as_str());
                }
            }
            by_brawler.insert(key, entry.normalized_type());
        }

        Self { by_brawler }
    }

    /// Type of `brawler`, in any casing.
    pub fn get(&self, brawler: &str) -> Option<&BrawlerType> {
        self.by_brawler.get(&BrawlerKey::new(brawler))
    }

    /// Distinct types, sorted.
    pub fn all_types(&self) -> Vec<BrawlerType> {
        self.by_brawler
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_brawler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_brawler.is_empty()
    }
}
