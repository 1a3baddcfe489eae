//! Inventory index: normalized-name lookup over an inventory snapshot.

use std::collections::HashMap;

use crate::types::InventoryItem;

/// Normalize a name for matching: trim surrounding whitespace, lowercase.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lookup from normalized item name to quantity on hand.
///
/// Built once per menu-generation call. Later inventory entries overwrite
/// earlier ones with the same normalized name (last write wins), matching
/// the snapshot being treated as a map keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    entries: HashMap<String, f64>,
}

impl InventoryIndex {
    pub fn build(inventory: &[InventoryItem]) -> Self {
        let mut entries = HashMap::with_capacity(inventory.len());
        for item in inventory {
            entries.insert(normalize_name(&item.name), item.qty);
        }
        InventoryIndex { entries }
    }

    /// Whether an item with this (unnormalized) name is on hand.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// Quantity on hand for this (unnormalized) name, if present.
    pub fn qty(&self, name: &str) -> Option<f64> {
        self.entries.get(&normalize_name(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
