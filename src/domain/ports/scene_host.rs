//! SceneHost port - the 3D tool that owns the scene
//!
//! Export and rendering are host operations. The driver decides which
//! objects to export, with which flags, and where the preview camera goes;
//! the host carries it out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::camera::{Bounds, CameraPlacement, Vec3};
use crate::domain::value_objects::ModelFormat;
use crate::error::GroveResult;

/// Kind of a scene object, as far as export cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    Armature,
    Camera,
    Light,
    Empty,
    #[serde(other)]
    Other,
}

impl ObjectKind {
    /// Objects that receive the uniform export scale
    pub fn is_scalable(&self) -> bool {
        matches!(self, ObjectKind::Mesh | ObjectKind::Armature)
    }
}

/// One object of the probed scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub selected: bool,
    /// World-space bounds (meshes only)
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub origin: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    [1.0, 1.0, 1.0]
}

/// What the host reports about a scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    pub objects: Vec<SceneObject>,
}

/// Exporter toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFlags {
    pub animations: bool,
    pub materials: bool,
    pub textures: bool,
    pub normals: bool,
    pub tangents: bool,
    pub texcoords: bool,
    pub colors: bool,
    pub lights: bool,
    pub cameras: bool,
    pub skins: bool,
    pub extras: bool,
    pub y_up: bool,
    pub apply_modifiers: bool,
}

impl Default for ExportFlags {
    fn default() -> Self {
        Self {
            animations: true,
            materials: true,
            textures: true,
            normals: true,
            tangents: false,
            texcoords: true,
            colors: true,
            lights: true,
            cameras: true,
            skins: true,
            extras: true,
            y_up: true,
            apply_modifiers: false,
        }
    }
}

/// One export call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRequest {
    /// Objects to select and export
    pub objects: Vec<String>,
    pub output: PathBuf,
    pub format: ModelFormat,
    pub flags: ExportFlags,
    /// Uniform scale set on scalable objects before export
    pub scale: Option<f64>,
    /// Apply location/rotation/scale of meshes before export
    pub bake_transforms: bool,
}

/// One preview render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRequest {
    /// Objects visible in the render
    pub objects: Vec<String>,
    pub output: PathBuf,
    pub camera: CameraPlacement,
    pub resolution: u32,
    pub scale: Option<f64>,
}

/// The 3D content tool executing exports and renders
pub trait SceneHost {
    /// Short name for messages ("blender")
    fn name(&self) -> &str;

    /// List the objects of `scene`
    fn probe(&mut self, scene: &Path) -> GroveResult<SceneInfo>;

    /// Run one export; returns the written path
    fn export(&mut self, scene: &Path, request: &ExportRequest) -> GroveResult<PathBuf>;

    /// Render a still preview; returns the written path
    fn render_preview(&mut self, scene: &Path, request: &PreviewRequest) -> GroveResult<PathBuf>;
}
