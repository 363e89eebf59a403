//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `fs/` - Local disk (and an in-memory double for tests)
//! - `blender/` - Headless Blender as the scene host

pub mod blender;
pub mod fs;

pub use blender::BlenderHost;
pub use fs::LocalFs;
