//! Export options: which objects go into which file, and how

use std::fmt;
use std::path::PathBuf;

use crate::domain::ports::{ExportFlags, SceneObject};
use crate::domain::services::PreviewSettings;
use crate::domain::value_objects::{AssetName, GrowthStage, ModelFormat, Species};

/// Which scene objects an export job takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every object in the scene
    All,
    /// The scene's current selection
    Selected,
    /// Objects whose name contains the pattern, ignoring case
    NamePattern(String),
}

impl Selection {
    pub fn matches(&self, object: &SceneObject) -> bool {
        match self {
            Selection::All => true,
            Selection::Selected => object.selected,
            Selection::NamePattern(pattern) => object
                .name
                .to_lowercase()
                .contains(&pattern.to_lowercase()),
        }
    }

    /// Objects of `objects` picked by this selection, in scene order
    pub fn resolve<'a>(&self, objects: &'a [SceneObject]) -> Vec<&'a SceneObject> {
        objects.iter().filter(|o| self.matches(o)).collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all objects"),
            Selection::Selected => f.write_str("selected objects"),
            Selection::NamePattern(p) => write!(f, "objects matching '{}'", p),
        }
    }
}

/// One output file (per format) built from one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub selection: Selection,
    /// File stem of the output
    pub output_name: String,
}

impl ExportJob {
    pub fn new(selection: Selection, output_name: impl Into<String>) -> Self {
        Self {
            selection,
            output_name: output_name.into(),
        }
    }

    /// One job per species and stage of a collection scene.
    ///
    /// Objects are matched by `<species>_<stage>` and exported under the
    /// stage's file name (`seedstage_oak`, `oak_sapling`, ...).
    pub fn collection() -> Vec<ExportJob> {
        Species::ALL
            .into_iter()
            .flat_map(|species| {
                GrowthStage::ALL.into_iter().map(move |stage| {
                    ExportJob::new(
                        Selection::NamePattern(format!("{}_{}", species, stage)),
                        AssetName::stage(species, stage).as_str(),
                    )
                })
            })
            .collect()
    }
}

/// Options for the export command
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Each job is exported once per format
    pub formats: Vec<ModelFormat>,
    pub flags: ExportFlags,
    /// Uniform scale; 1.0 leaves objects untouched
    pub scale: f64,
    pub bake_transforms: bool,
    /// Render a preview next to each exported job
    pub preview: Option<PreviewSettings>,
    pub jobs: Vec<ExportJob>,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            formats: vec![ModelFormat::Glb],
            flags: ExportFlags::default(),
            scale: 1.0,
            bake_transforms: true,
            preview: None,
            jobs: Vec::new(),
        }
    }

    pub fn with_formats(mut self, formats: Vec<ModelFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_flags(mut self, flags: ExportFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bake_transforms(mut self, bake: bool) -> Self {
        self.bake_transforms = bake;
        self
    }

    pub fn with_preview(mut self, preview: Option<PreviewSettings>) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_jobs(mut self, jobs: Vec<ExportJob>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Scale to request from the host, `None` when unchanged
    pub fn requested_scale(&self) -> Option<f64> {
        (self.scale != 1.0).then_some(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ObjectKind;

    fn object(name: &str, selected: bool) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            kind: ObjectKind::Mesh,
            selected,
            bounds: None,
            origin: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    #[test]
    fn pattern_ignores_case() {
        let objects = vec![object("Oak_Mature_Trunk", false), object("Pine_Mature", false)];

        let picked = Selection::NamePattern("oak_mature".into()).resolve(&objects);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "Oak_Mature_Trunk");
    }

    #[test]
    fn selected_takes_scene_selection() {
        let objects = vec![object("a", true), object("b", false)];

        assert_eq!(Selection::Selected.resolve(&objects).len(), 1);
        assert_eq!(Selection::All.resolve(&objects).len(), 2);
    }

    #[test]
    fn collection_covers_every_species_and_stage() {
        let jobs = ExportJob::collection();

        assert_eq!(jobs.len(), 28);
        assert_eq!(
            jobs[0],
            ExportJob::new(Selection::NamePattern("oak_seed".into()), "seedstage_oak")
        );
        assert_eq!(
            jobs[1],
            ExportJob::new(Selection::NamePattern("oak_sapling".into()), "oak_sapling")
        );
    }

    #[test]
    fn unit_scale_is_not_requested() {
        let options = ExportOptions::new("out");
        assert_eq!(options.requested_scale(), None);
        assert_eq!(options.with_scale(0.01).requested_scale(), Some(0.01));
    }
}
