use crate::error::StoreError;
use std::collections::HashMap;

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Used off the browser and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut store = MemoryStore::with_entry("theme", "light");
        store.save("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark"));
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }
}
