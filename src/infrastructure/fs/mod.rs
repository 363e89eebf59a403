//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
#[cfg(test)]
mod memory;

pub use home::expand_home;
pub use local::LocalFs;
#[cfg(test)]
pub use memory::MemoryFs;
