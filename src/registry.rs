use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::config::ConfigEntry;

/// In-memory model of the host's configuration-entry store.
///
/// The host owns real persistence; this captures the part the integration
/// relies on, keyed by unique id so re-adding an endpoint collides instead
/// of duplicating.
#[derive(Debug, Default)]
pub struct EntryRegistry {
    entries: DashMap<String, ConfigEntry>,
}

impl EntryRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn is_configured(&self, unique_id: &str) -> bool {
        self.entries.contains_key(unique_id)
    }

    /// Register an entry. Returns false without overwriting when the unique
    /// id is already configured.
    pub fn insert(&self, entry: ConfigEntry) -> bool {
        match self.entries.entry(entry.unique_id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, unique_id: &str) -> Option<ConfigEntry> {
        self.entries.get(unique_id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(unique_id: &str) -> ConfigEntry {
        ConfigEntry {
            base_url: "https://host.example:5003".to_string(),
            unique_id: unique_id.to_string(),
        }
    }

    #[test]
    fn insert_refuses_duplicate_unique_id() {
        let registry = EntryRegistry::new();
        assert!(registry.insert(entry("host.example_5003")));
        assert!(!registry.insert(entry("host.example_5003")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_returns_stored_entry() {
        let registry = EntryRegistry::new();
        assert!(registry.is_empty());
        registry.insert(entry("host.example_5003"));
        let stored = registry.get("host.example_5003").unwrap();
        assert_eq!(stored.base_url, "https://host.example:5003");
        assert!(registry.is_configured("host.example_5003"));
        assert!(!registry.is_configured("other.example_80"));
    }
}
