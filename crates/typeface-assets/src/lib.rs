// this_file: crates/typeface-assets/src/lib.rs

//! Where font bytes come from, and how they become typefaces
//!
//! Two asset stores and one loader:
//!
//! - [`DirAssets`] - Assets rooted at a directory on disk
//! - [`MemoryAssets`] - Assets held in memory, for embedded fonts and tests
//! - [`OpenTypeLoader`] - Validates TrueType/OpenType bytes with `read-fonts`
//!   and reads the style the font declares for itself

pub mod dir;
pub mod memory;
pub mod opentype;

pub use dir::DirAssets;
pub use memory::MemoryAssets;
pub use opentype::OpenTypeLoader;
