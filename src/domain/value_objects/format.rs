//! Model file format

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format of an exported model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Single binary file with embedded resources
    #[default]
    Glb,
    /// JSON file with separate buffers and textures
    Gltf,
}

impl ModelFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ModelFormat::Glb => "glb",
            ModelFormat::Gltf => "gltf",
        }
    }

    /// Value of the exporter's `export_format` option
    pub fn exporter_format(&self) -> &'static str {
        match self {
            ModelFormat::Glb => "GLB",
            ModelFormat::Gltf => "GLTF_SEPARATE",
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gltf_exports_separate_files() {
        assert_eq!(ModelFormat::Gltf.exporter_format(), "GLTF_SEPARATE");
        assert_eq!(ModelFormat::Glb.exporter_format(), "GLB");
    }
}
