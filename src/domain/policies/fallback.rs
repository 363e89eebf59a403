//! Fallback source policy
//!
//! When a stage model is missing, the gap filler copies the best available
//! model under the missing name. The priority order is a table keyed by the
//! target stage; each entry generates one candidate name.

use crate::domain::entities::ExistingAssets;
use crate::domain::value_objects::{AssetName, GrowthStage, ModelSlot, Species};

/// One candidate in a fallback list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// The given slot of the species being filled
    SameSpecies(ModelSlot),
    /// A fixed model of another (or the same) species
    Fixed(Species, GrowthStage),
}

impl Candidate {
    pub fn resolve(&self, species: Species) -> AssetName {
        match *self {
            Candidate::SameSpecies(slot) => AssetName::for_slot(species, slot),
            Candidate::Fixed(other, stage) => AssetName::stage(other, stage),
        }
    }
}

use Candidate::{Fixed, SameSpecies};
use GrowthStage::{Growing, Mature, Sapling, Seed};
use ModelSlot::{Generic, Stage};

const SEED_FALLBACKS: &[Candidate] = &[
    SameSpecies(Stage(Seed)),
    SameSpecies(Stage(Sapling)),
    SameSpecies(Generic),
    Fixed(Species::Oak, Seed),
    Fixed(Species::Pine, Seed),
    Fixed(Species::Apple, Seed),
];

const SAPLING_FALLBACKS: &[Candidate] = &[
    SameSpecies(Stage(Sapling)),
    SameSpecies(Stage(Growing)),
    SameSpecies(Generic),
    Fixed(Species::Oak, Sapling),
    Fixed(Species::Palm, Sapling),
    Fixed(Species::Apple, Sapling),
];

// The trailing mature entry repeats the second one and can never match.
const GROWING_FALLBACKS: &[Candidate] = &[
    SameSpecies(Stage(Growing)),
    SameSpecies(Stage(Mature)),
    SameSpecies(Generic),
    Fixed(Species::Oak, Growing),
    SameSpecies(Stage(Sapling)),
    SameSpecies(Stage(Mature)),
];

const MATURE_FALLBACKS: &[Candidate] = &[
    SameSpecies(Stage(Mature)),
    SameSpecies(Generic),
    SameSpecies(Stage(Growing)),
    Fixed(Species::Oak, Mature),
    Fixed(Species::Pine, Mature),
    Fixed(Species::Maple, Mature),
];

/// Ordered candidate list for a target stage
pub fn fallback_candidates(stage: GrowthStage) -> &'static [Candidate] {
    match stage {
        Seed => SEED_FALLBACKS,
        Sapling => SAPLING_FALLBACKS,
        Growing => GROWING_FALLBACKS,
        Mature => MATURE_FALLBACKS,
    }
}

/// Pick the first candidate for (`species`, `stage`) present in `existing`.
///
/// Returns the candidate's name as it appears in `existing`.
pub fn select_source(
    species: Species,
    stage: GrowthStage,
    existing: &ExistingAssets,
) -> Option<AssetName> {
    fallback_candidates(stage)
        .iter()
        .map(|c| c.resolve(species))
        .find(|name| existing.contains(name))
}
