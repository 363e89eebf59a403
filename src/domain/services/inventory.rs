//! Inventory check
//!
//! Crosses the expected catalog against the existing asset set. Pure: the
//! caller supplies the directory listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{ExistingAssets, ExpectedCatalog};
use crate::domain::value_objects::{ModelSlot, PresenceMap, Species};

/// Presence of each slot for one species, keyed `generic`, `seed`, ...
pub type SlotPresence = PresenceMap;

/// Snapshot of which expected models exist.
///
/// Serializes to the inventory JSON snapshot (`results`, `missing_files`,
/// `complete_tree_types`, `health_models`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryReport {
    pub results: BTreeMap<Species, SlotPresence>,
    pub missing_files: Vec<String>,
    pub complete_tree_types: Vec<Species>,
    pub health_models: PresenceMap,
    #[serde(skip)]
    pub scanned: usize,
}

impl InventoryReport {
    pub fn is_present(&self, species: Species, slot: ModelSlot) -> bool {
        self.results
            .get(&species)
            .and_then(|r| r.get(slot.key()))
            .unwrap_or(false)
    }

    pub fn is_complete(&self, species: Species) -> bool {
        self.complete_tree_types.contains(&species)
    }

    /// Share of complete species, in percent
    pub fn complete_percentage(&self) -> f64 {
        self.complete_tree_types.len() as f64 / Species::ALL.len() as f64 * 100.0
    }
}

/// Check `existing` against every expected name
pub fn check_inventory(catalog: &ExpectedCatalog, existing: &ExistingAssets) -> InventoryReport {
    let format = existing.format();
    let mut report = InventoryReport {
        scanned: existing.len(),
        ..Default::default()
    };

    let mut incomplete = Vec::new();
    for model in catalog.species_models() {
        let present = existing.contains(&model.name);
        report
            .results
            .entry(model.species)
            .or_default()
            .insert(model.slot.key(), present);
        if !present {
            report.missing_files.push(model.name.file_name(format));
            if !incomplete.contains(&model.species) {
                incomplete.push(model.species);
            }
        }
    }

    report.complete_tree_types = Species::ALL
        .into_iter()
        .filter(|s| !incomplete.contains(s))
        .collect();

    for name in catalog.health_models() {
        let present = existing.contains(&name);
        if !present {
            report.missing_files.push(name.file_name(format));
        }
        report.health_models.insert(name.as_str(), present);
    }

    report
}
