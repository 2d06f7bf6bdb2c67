//! Domain model for INI data.
//!
//! Nothing in here touches the file system or the path resolver; the types
//! can be built and tested entirely in memory.  Parsing and rendering live in
//! [`crate::codec`], persistence in [`crate::backend`].

/// Sections, keys and the store that owns them.
pub mod store;

pub use store::{ConfigStore, Key, Section};
