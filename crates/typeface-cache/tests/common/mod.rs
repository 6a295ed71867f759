// this_file: crates/typeface-cache/tests/common/mod.rs

#![allow(dead_code)]

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use typeface_cache::{
    AssetSource, CacheConfig, FontLoadError, MemoryAssets, Style, Typeface, TypefaceCache,
    TypefaceLoader,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Memory assets that count and record every open
#[derive(Default)]
pub struct CountingAssets {
    inner: MemoryAssets,
    opens: AtomicUsize,
    opened: Mutex<Vec<String>>,
}

impl CountingAssets {
    pub fn new(names: &[&str]) -> Self {
        let mut inner = MemoryAssets::new();
        for name in names {
            inner.insert(*name, name.as_bytes().to_vec());
        }
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn with_bytes(mut self, name: &str, data: &[u8]) -> Self {
        self.inner.insert(name, data.to_vec());
        self
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl AssetSource for CountingAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.opened.lock().push(name.to_string());
        self.inner.open(name)
    }
}

/// Accepts any bytes; `italic:` prefixed data loads as a natively italic font,
/// `corrupt` is rejected
#[derive(Default)]
pub struct FakeLoader {
    pub loads: Arc<AtomicUsize>,
}

impl TypefaceLoader for FakeLoader {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn load(&self, asset_path: &str, data: Vec<u8>) -> Result<Typeface, FontLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if data == b"corrupt" {
            return Err(FontLoadError::InvalidData("corrupt".into()));
        }
        let native = if data.starts_with(b"italic:") {
            Style::Italic
        } else {
            Style::Normal
        };
        Ok(Typeface::new(asset_path, data, native))
    }
}

pub fn fake_cache(config: CacheConfig) -> TypefaceCache {
    TypefaceCache::new(config, FakeLoader::default())
}

pub fn counted_cache(config: CacheConfig) -> (TypefaceCache, Arc<AtomicUsize>) {
    let loader = FakeLoader::default();
    let loads = Arc::clone(&loader.loads);
    (TypefaceCache::new(config, loader), loads)
}

/// Assemble a bare sfnt from `(tag, table)` pairs, tags already sorted
pub fn build_font(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    out.extend_from_slice(&[0u8; 6]);

    let mut offset = 12 + 16 * tables.len();
    for (tag, table) in tables {
        out.extend_from_slice(&tag[..]);
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        out.extend_from_slice(&(table.len() as u32).to_be_bytes());
        offset += (table.len() + 3) & !3;
    }
    for (_, table) in tables {
        out.extend_from_slice(table);
        while out.len() % 4 != 0 {
            out.push(0);
        }
    }
    out
}

/// A 54-byte `head` table with the given grid and macStyle bits
pub fn head_table(units_per_em: u16, mac_style: u16) -> Vec<u8> {
    let mut head = vec![0u8; 54];
    head[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    head[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    head[18..20].copy_from_slice(&units_per_em.to_be_bytes());
    head[44..46].copy_from_slice(&mac_style.to_be_bytes());
    head
}
