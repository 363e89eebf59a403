//! Blender Scene Host
//!
//! Runs headless Blender with an embedded driver script to probe scenes,
//! export glTF models, and render previews.

mod host;
pub mod locate;

pub use host::BlenderHost;
