//! Ordered presence flags
//!
//! A small name -> bool map that keeps insertion order, so reports list
//! slots and health variants the way they are declared rather than
//! alphabetically.

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceMap {
    entries: Vec<(String, bool)>,
}

impl PresenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`; a new key goes to the end, an existing one keeps its place
    pub fn insert(&mut self, key: impl Into<String>, present: bool) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = present,
            None => self.entries.push((key, present)),
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, present)| *present)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), *p))
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.entries.iter().map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for PresenceMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, present) in iter {
            map.insert(key, present);
        }
        map
    }
}

impl<'k> Index<&'k str> for PresenceMap {
    type Output = bool;

    fn index(&self, key: &'k str) -> &bool {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, present)| present)
            .unwrap_or_else(|| panic!("no presence entry for {key}"))
    }
}

impl Serialize for PresenceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, present) in &self.entries {
            map.serialize_entry(key, present)?;
        }
        map.end()
    }
}
