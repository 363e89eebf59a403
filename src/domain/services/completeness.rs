//! Completeness report written after a fill run

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::ExistingAssets;
use crate::domain::value_objects::{AssetName, GrowthStage, PresenceMap, Species};

/// File name of the report inside the export directory
pub const REPORT_FILE_NAME: &str = "model_report.json";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCompleteness {
    pub generic_model: bool,
    pub stages: PresenceMap,
}

/// Counts of present and missing stage models, per species
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub total_models: usize,
    pub missing_models: usize,
    pub tree_types: BTreeMap<Species, SpeciesCompleteness>,
    pub timestamp: String,
}

pub fn build_completeness(existing: &ExistingAssets, timestamp: impl Into<String>) -> CompletenessReport {
    let mut missing_models = 0;
    let tree_types = Species::ALL
        .into_iter()
        .map(|species| {
            let stages = GrowthStage::ALL
                .into_iter()
                .map(|stage| {
                    let present = existing.contains(&AssetName::stage(species, stage));
                    if !present {
                        missing_models += 1;
                    }
                    (stage.report_key(), present)
                })
                .collect();
            let info = SpeciesCompleteness {
                generic_model: existing.contains(&AssetName::generic(species)),
                stages,
            };
            (species, info)
        })
        .collect();

    CompletenessReport {
        total_models: existing.len(),
        missing_models,
        tree_types,
        timestamp: timestamp.into(),
    }
}
