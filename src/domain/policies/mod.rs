//! Domain Policies
//!
//! Business rules that are data rather than algorithms.

pub mod fallback;

pub use fallback::{fallback_candidates, select_source, Candidate};
