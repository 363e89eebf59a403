//! Species value object - the fixed set of tree types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A tree species with its own family of model files
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Oak,
    Pine,
    Cherry,
    Apple,
    Maple,
    Willow,
    Palm,
}

impl Species {
    /// All species in canonical order
    pub const ALL: [Species; 7] = [
        Species::Oak,
        Species::Pine,
        Species::Cherry,
        Species::Apple,
        Species::Maple,
        Species::Willow,
        Species::Palm,
    ];

    /// Lower-case name used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Oak => "oak",
            Species::Pine => "pine",
            Species::Cherry => "cherry",
            Species::Apple => "apple",
            Species::Maple => "maple",
            Species::Willow => "willow",
            Species::Palm => "palm",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Species::ALL
            .into_iter()
            .find(|sp| sp.as_str() == lower)
            .ok_or_else(|| format!("unknown species '{}'", s))
    }
}
