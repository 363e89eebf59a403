//! Property tests for Grove.
//!
//! Randomized inputs guard the naming, inventory and gap-planning
//! invariants plus the preview camera geometry.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/camera.rs"]
mod camera;

#[path = "properties/gap_planning.rs"]
mod gap_planning;

#[path = "properties/inventory.rs"]
mod inventory;
