//! Existing asset set
//!
//! Model files found in a directory at scan time, indexed by lower-cased
//! stem so lookups ignore case while copies still use the on-disk name.
//! The raw entries are kept as well: on a case-sensitive file system
//! `oak.glb` and `OAK.glb` are one asset but two files.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::value_objects::{AssetName, ModelFormat};

#[derive(Debug, Clone, Default)]
pub struct ExistingAssets {
    format: ModelFormat,
    by_key: BTreeMap<String, String>,
    files: BTreeSet<String>,
}

impl ExistingAssets {
    /// Build from raw directory entry names; entries without the format's
    /// extension are ignored.
    pub fn from_file_names<I, S>(names: I, format: ModelFormat) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_key = BTreeMap::new();
        let mut files = BTreeSet::new();
        for n in names {
            let file_name = n.as_ref();
            if let Some(asset) = AssetName::from_file_name(file_name, format) {
                by_key
                    .entry(asset.key())
                    .or_insert_with(|| file_name.to_string());
                files.insert(file_name.to_string());
            }
        }
        Self {
            format,
            by_key,
            files,
        }
    }

    pub fn format(&self) -> ModelFormat {
        self.format
    }

    pub fn contains(&self, name: &AssetName) -> bool {
        self.by_key.contains_key(&name.key())
    }

    /// On-disk file name for `name`, if present
    pub fn file_name_of(&self, name: &AssetName) -> Option<&str> {
        self.by_key.get(&name.key()).map(String::as_str)
    }

    /// Every matching directory entry, including names that differ only in case
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Number of model files (not distinct assets)
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
