//! Asset name value object
//!
//! An asset name is a file stem such as `oak_mature`. Names are compared
//! case-insensitively, the way model files are matched on disk.

use std::fmt;

use super::{GrowthStage, ModelFormat, Species};

/// The four health-variant models, independent of species and stage
pub const HEALTH_VARIANTS: [&str; 4] = [
    "healthy_tree",
    "slightly_wilted_tree",
    "moderately_wilted_tree",
    "severely_wilted_tree",
];

/// Slot of a species' model family: the generic model or one growth stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    Generic,
    Stage(GrowthStage),
}

impl ModelSlot {
    /// Generic first, then every stage in growth order
    pub const ALL: [ModelSlot; 5] = [
        ModelSlot::Generic,
        ModelSlot::Stage(GrowthStage::Seed),
        ModelSlot::Stage(GrowthStage::Sapling),
        ModelSlot::Stage(GrowthStage::Growing),
        ModelSlot::Stage(GrowthStage::Mature),
    ];

    /// Key used in the inventory snapshot
    pub fn key(&self) -> &'static str {
        match self {
            ModelSlot::Generic => "generic",
            ModelSlot::Stage(stage) => stage.as_str(),
        }
    }
}

/// File stem of a model asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    pub fn new(stem: impl Into<String>) -> Self {
        Self(stem.into())
    }

    /// The bare `<species>` model
    pub fn generic(species: Species) -> Self {
        Self(species.as_str().to_string())
    }

    /// The stage model of `species`
    pub fn stage(species: Species, stage: GrowthStage) -> Self {
        Self(stage.file_stem(species))
    }

    pub fn for_slot(species: Species, slot: ModelSlot) -> Self {
        match slot {
            ModelSlot::Generic => Self::generic(species),
            ModelSlot::Stage(stage) => Self::stage(species, stage),
        }
    }

    /// Parse a file name (`Oak_Mature.GLB`) into a stem if it carries the
    /// extension of `format`
    pub fn from_file_name(file_name: &str, format: ModelFormat) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || !ext.eq_ignore_ascii_case(format.extension()) {
            return None;
        }
        Some(Self(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased stem used for membership checks
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// `<stem>.<ext>`
    pub fn file_name(&self, format: ModelFormat) -> String {
        format!("{}.{}", self.0, format.extension())
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
