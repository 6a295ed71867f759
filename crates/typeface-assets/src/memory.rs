// this_file: crates/typeface-assets/src/memory.rs

//! In-memory asset store

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use typeface_core::AssetSource;

/// Named byte blobs served as assets
///
/// Cloning is cheap; clones share the bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: HashMap<String, Arc<[u8]>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryAssets::insert`]
    pub fn with_asset(mut self, name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        self.insert(name, data);
        self
    }

    /// Add or replace the asset called `name`
    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Arc<[u8]>>) {
        self.assets.insert(name.into(), data.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        match self.assets.get(name) {
            Some(data) => Ok(Box::new(Cursor::new(Arc::clone(data)))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such asset: {}", name),
            )),
        }
    }
}
