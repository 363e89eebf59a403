//! Common test utilities for Grove CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a runner for the
//!   `grove` binary
//! - Fixtures: model file sets and a fake Blender executable

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
