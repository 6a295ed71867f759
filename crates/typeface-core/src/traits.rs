// this_file: crates/typeface-core/src/traits.rs

//! The two seams the cache is built around
//!
//! - [`AssetSource`] - Opens named assets, the way an application bundle does
//! - [`TypefaceLoader`] - Turns asset bytes into a [`Typeface`]
//!
//! Both are injected, so tests can count I/O and hosts can plug in their own
//! font machinery.

use std::io::{self, Read};
use std::sync::Arc;

use crate::error::FontLoadError;
use crate::typeface::Typeface;

/// A store of named, readable assets
///
/// ```ignore
/// struct Bundle;
///
/// impl AssetSource for Bundle {
///     fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + Send + '_>> {
///         Err(std::io::ErrorKind::NotFound.into())
///     }
/// }
/// ```
pub trait AssetSource: Send + Sync {
    /// Open the asset called `name` for reading
    ///
    /// A missing asset is an `Err`, usually with [`io::ErrorKind::NotFound`].
    /// The returned stream is released when dropped.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        (**self).open(name)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        (**self).open(name)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        (**self).open(name)
    }
}

/// Builds typefaces from the bytes of a font asset
pub trait TypefaceLoader: Send + Sync {
    /// Who are you? Used for logging
    fn name(&self) -> &'static str;

    /// Parse `data`, read from `asset_path`, into a typeface in its native style
    fn load(&self, asset_path: &str, data: Vec<u8>) -> Result<Typeface, FontLoadError>;
}

impl<T: TypefaceLoader + ?Sized> TypefaceLoader for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn load(&self, asset_path: &str, data: Vec<u8>) -> Result<Typeface, FontLoadError> {
        (**self).load(asset_path, data)
    }
}
