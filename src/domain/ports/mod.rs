//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod scene_host;

pub use file_system::{FileSystem, FsError, FsResult};
pub use scene_host::{
    ExportFlags, ExportRequest, ObjectKind, PreviewRequest, SceneHost, SceneInfo, SceneObject,
};
