//! Growth stage value object and its file-name templates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Species;

/// Growth stage of a tree model
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seed,
    Sapling,
    Growing,
    Mature,
}

impl GrowthStage {
    /// All stages in growth order
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Seed,
        GrowthStage::Sapling,
        GrowthStage::Growing,
        GrowthStage::Mature,
    ];

    /// Stage name as used in scene object names and the inventory snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "seed",
            GrowthStage::Sapling => "sapling",
            GrowthStage::Growing => "growing",
            GrowthStage::Mature => "mature",
        }
    }

    /// Key used in the completeness report (`seedstage` for seeds)
    pub fn report_key(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "seedstage",
            other => other.as_str(),
        }
    }

    /// File stem for this stage of `species`.
    ///
    /// Seeds are `seedstage_<species>`, every other stage is
    /// `<species>_<stage>`.
    pub fn file_stem(&self, species: Species) -> String {
        match self {
            GrowthStage::Seed => format!("seedstage_{}", species),
            other => format!("{}_{}", species, other.as_str()),
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" | "seedstage" => Ok(GrowthStage::Seed),
            "sapling" => Ok(GrowthStage::Sapling),
            "growing" => Ok(GrowthStage::Growing),
            "mature" => Ok(GrowthStage::Mature),
            _ => Err(format!("unknown growth stage '{}'", s)),
        }
    }
}
