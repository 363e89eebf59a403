//! Expected model catalog
//!
//! Everything a complete export directory should contain, derived purely
//! from the fixed species, stage and health-variant enumerations.

use crate::domain::value_objects::{AssetName, GrowthStage, ModelSlot, Species, HEALTH_VARIANTS};

/// One expected species model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedModel {
    pub species: Species,
    pub slot: ModelSlot,
    pub name: AssetName,
}

/// The full set of expected model names
#[derive(Debug, Clone, Default)]
pub struct ExpectedCatalog;

impl ExpectedCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Species models in report order: per species, generic then stages
    pub fn species_models(&self) -> Vec<ExpectedModel> {
        Species::ALL
            .into_iter()
            .flat_map(|species| {
                ModelSlot::ALL.into_iter().map(move |slot| ExpectedModel {
                    species,
                    slot,
                    name: AssetName::for_slot(species, slot),
                })
            })
            .collect()
    }

    /// Stage models only (the set the gap filler works on)
    pub fn stage_models(&self) -> Vec<(Species, GrowthStage, AssetName)> {
        Species::ALL
            .into_iter()
            .flat_map(|species| {
                GrowthStage::ALL
                    .into_iter()
                    .map(move |stage| (species, stage, AssetName::stage(species, stage)))
            })
            .collect()
    }

    pub fn health_models(&self) -> Vec<AssetName> {
        HEALTH_VARIANTS.iter().map(|n| AssetName::new(*n)).collect()
    }

    /// Every expected name: species models followed by health variants
    pub fn all_names(&self) -> Vec<AssetName> {
        self.species_models()
            .into_iter()
            .map(|m| m.name)
            .chain(self.health_models())
            .collect()
    }
}
