//! Fill Use Case
//!
//! Closes gaps in the export directory and publishes it to the client.
//!
//! This module handles:
//! - Scanning the export directory for missing stage models
//! - Copying the best available substitute under each missing name
//! - Mirroring the export directory into the client directory
//! - Writing the completeness report

mod options;
mod result;
mod use_case;

pub use options::FillOptions;
pub use result::{CreatedModel, FillResult};
pub use use_case::FillUseCase;
