// this_file: crates/typeface-cache/src/lib.rs

//! One typeface cache for every widget
//!
//! Ask for a family by name, get back a styled typeface. The first request
//! finds the asset (trying the bare name, then `.ttf`, then `.otf`), loads it
//! and applies the style its suffix asks for; every later request for the same
//! name is a cache hit with no I/O at all.
//!
//! ```
//! use typeface_cache::{CacheConfig, MemoryAssets, OpenTypeLoader, TypefaceCache};
//!
//! let cache = TypefaceCache::new(CacheConfig::default(), OpenTypeLoader::new());
//! let assets = MemoryAssets::new();
//!
//! // Nothing bundled yet, so the caller picks a fallback
//! let err = cache.load_typeface(&assets, "Roboto-Bold").unwrap_err();
//! assert!(err.is_not_found());
//! assert!(cache.is_empty());
//! ```
//!
//! The cache holds 12 entries by default and evicts the least recently used
//! one when full. Failed lookups are not remembered unless
//! [`CacheConfig::cache_failures`] is set.

pub mod cache;
pub mod probe;

pub use cache::{CacheStats, TypefaceCache};
pub use probe::{probe_asset_path, read_asset, ProbeMiss};

pub use typeface_assets::{DirAssets, MemoryAssets, OpenTypeLoader};
pub use typeface_core::{
    AssetSource, CacheConfig, FontLoadError, Result, Style, Typeface, TypefaceError,
    TypefaceLoader,
};
