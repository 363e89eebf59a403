//! Gap planning
//!
//! Decides, without touching the disk, which missing stage models can be
//! synthesized and from which source.

use crate::domain::entities::{ExistingAssets, ExpectedCatalog};
use crate::domain::policies::select_source;
use crate::domain::value_objects::{AssetName, GrowthStage, Species};

/// A missing stage model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub species: Species,
    pub stage: GrowthStage,
    pub target: AssetName,
}

/// Outcome of planning one gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapPlan {
    /// Copy `source_file` (on-disk name) to `target_file`
    Copy {
        gap: Gap,
        source: AssetName,
        source_file: String,
        target_file: String,
    },
    /// No candidate exists; the gap stays open
    Unresolved { gap: Gap },
}

impl GapPlan {
    pub fn gap(&self) -> &Gap {
        match self {
            GapPlan::Copy { gap, .. } | GapPlan::Unresolved { gap } => gap,
        }
    }
}

/// Every (species, stage) model absent from `existing`, in catalog order
pub fn missing_stage_models(catalog: &ExpectedCatalog, existing: &ExistingAssets) -> Vec<Gap> {
    catalog
        .stage_models()
        .into_iter()
        .filter(|(_, _, name)| !existing.contains(name))
        .map(|(species, stage, target)| Gap {
            species,
            stage,
            target,
        })
        .collect()
}

/// Plan fills for `gaps`.
///
/// Only species whose generic model exists are eligible; gaps of other
/// species are left out of the plan entirely (neither copied nor reported
/// as unresolved). Sources are looked up in the initial `existing` set.
pub fn plan_gaps(gaps: &[Gap], existing: &ExistingAssets) -> Vec<GapPlan> {
    let format = existing.format();
    gaps.iter()
        .filter(|gap| existing.contains(&AssetName::generic(gap.species)))
        .map(|gap| match select_source(gap.species, gap.stage, existing) {
            Some(source) => {
                let source_file = existing
                    .file_name_of(&source)
                    .map(str::to_string)
                    .unwrap_or_else(|| source.file_name(format));
                GapPlan::Copy {
                    gap: gap.clone(),
                    target_file: gap.target.file_name(format),
                    source,
                    source_file,
                }
            }
            None => GapPlan::Unresolved { gap: gap.clone() },
        })
        .collect()
}
