// this_file: crates/typeface-core/src/lib.rs

//! Typeface Core: the vocabulary shared by every loader and cache
//!
//! A font family name goes in, a styled typeface handle comes out. This crate
//! defines the pieces that journey is made of, without doing any of the work:
//!
//! - [`Style`] - Normal, bold, italic, or both, plus the suffix convention
//!   that picks one from a family name
//! - [`Typeface`] - The loaded, immutable handle callers hold on to
//! - [`AssetSource`] - Where font bytes come from
//! - [`TypefaceLoader`] - How font bytes become a [`Typeface`]
//! - [`CacheConfig`] - How big the cache is and whether failures are remembered
//!
//! Concrete asset stores and the OpenType loader live in `typeface-assets`;
//! the memoizing cache lives in `typeface-cache`.

pub mod cache_config;
pub mod error;
pub mod style;
pub mod traits;
pub mod typeface;

pub use cache_config::CacheConfig;
pub use error::{FontLoadError, Result, TypefaceError};
pub use style::Style;
pub use traits::{AssetSource, TypefaceLoader};
pub use typeface::{Typeface, MAX_FONT_SIZE};
