// this_file: crates/typeface-cache/src/cache.rs

//! The typeface cache.
//!
//! A bounded LRU map from family name to styled typeface, guarded by a single
//! mutex. The lock covers lookups and inserts only: probing, reading and
//! parsing happen outside it, so unrelated loads never wait on each other.
//! Two threads missing on the same family may both load it; the later
//! insert wins and both callers get an equivalent handle.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use lru::LruCache;
use parking_lot::Mutex;
use typeface_assets::OpenTypeLoader;
use typeface_core::{
    AssetSource, CacheConfig, Result, Style, Typeface, TypefaceError, TypefaceLoader,
};

use crate::probe::{probe_asset_path, read_asset};

/// Cache key: the family as requested, plus an explicit style if one was given
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    family: String,
    style: Option<Style>,
}

impl CacheKey {
    fn inferred(family: &str) -> Self {
        Self {
            family: family.to_string(),
            style: None,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Some(style) => write!(f, "{} ({})", self.family, style),
            None => f.write_str(&self.family),
        }
    }
}

#[derive(Clone)]
enum Entry {
    Loaded(Arc<Typeface>),
    /// Remembered failure, only stored when failure caching is on
    Missing(String),
}

/// Font cache statistics for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Maximum number of cached entries.
    pub capacity: usize,
    /// Currently cached entries, remembered failures included.
    pub entries: usize,
    /// Lookups answered without I/O.
    pub hits: u64,
    /// Lookups that had to probe.
    pub misses: u64,
    /// Typefaces successfully loaded.
    pub loads: u64,
    /// Loads that ended in `FontNotFound`.
    pub failures: u64,
    /// Entries pushed out by the LRU policy.
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    loads: AtomicU64,
    failures: AtomicU64,
    evictions: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Memoizing typeface loader with LRU eviction
///
/// Build one per composition root with [`TypefaceCache::new`], or use the
/// lazily created [`TypefaceCache::shared`] instance.
pub struct TypefaceCache {
    entries: Mutex<LruCache<CacheKey, Entry>>,
    loader: Arc<dyn TypefaceLoader>,
    config: CacheConfig,
    counters: Counters,
}

impl TypefaceCache {
    /// Create a cache that builds typefaces with `loader`
    ///
    /// # Examples
    /// ```
    /// use typeface_cache::{CacheConfig, OpenTypeLoader, TypefaceCache};
    ///
    /// let cache = TypefaceCache::new(CacheConfig::default().with_capacity(4), OpenTypeLoader::new());
    /// assert_eq!(cache.capacity(), 4);
    /// ```
    pub fn new(config: CacheConfig, loader: impl TypefaceLoader + 'static) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            loader: Arc::new(loader),
            config: CacheConfig {
                capacity: capacity.get(),
                ..config
            },
            counters: Counters::default(),
        }
    }

    /// The process-wide cache, created on first use
    ///
    /// Configured from the environment (see [`CacheConfig::from_env`]) and
    /// backed by the [`OpenTypeLoader`].
    pub fn shared() -> &'static TypefaceCache {
        static SHARED: OnceLock<TypefaceCache> = OnceLock::new();
        SHARED.get_or_init(|| {
            let config = CacheConfig::from_env();
            log::debug!(
                "Creating shared typeface cache (capacity {}, cache failures: {})",
                config.capacity,
                config.cache_failures
            );
            TypefaceCache::new(config, OpenTypeLoader::new())
        })
    }

    /// Load a typeface, styled by the suffix of its family name
    ///
    /// Returns the cached handle if available (no I/O), otherwise probes
    /// `family`, `family.ttf` and `family.otf` in `assets`, loads the first
    /// that opens and applies the style named by a `-bold`, `-regular`,
    /// `-italic` or `-bolditalic` suffix (case-insensitive). Without a suffix
    /// the font keeps its own style.
    ///
    /// # Errors
    /// - [`TypefaceError::InvalidArgument`] if `family` is missing or blank
    /// - [`TypefaceError::FontNotFound`] if no candidate opens, or the asset
    ///   cannot be read or parsed
    ///
    /// # Examples
    /// ```ignore
    /// let assets = DirAssets::new("assets/fonts");
    /// let bold = cache.load_typeface(&assets, "Roboto-Bold")?;
    /// assert_eq!(bold.style(), Style::Bold);
    /// ```
    pub fn load_typeface<'a>(
        &self,
        assets: &dyn AssetSource,
        family: impl Into<Option<&'a str>>,
    ) -> Result<Arc<Typeface>> {
        let family = validate_family(family.into())?;
        self.load_keyed(assets, CacheKey::inferred(family))
    }

    /// Load a typeface and apply `style`, whatever its name says
    ///
    /// Cached separately from [`TypefaceCache::load_typeface`] so the two
    /// never hand out each other's styling.
    pub fn load_typeface_with_style<'a>(
        &self,
        assets: &dyn AssetSource,
        family: impl Into<Option<&'a str>>,
        style: Style,
    ) -> Result<Arc<Typeface>> {
        let family = validate_family(family.into())?;
        self.load_keyed(
            assets,
            CacheKey {
                family: family.to_string(),
                style: Some(style),
            },
        )
    }

    /// Whether `family` has an entry, without touching its recency
    ///
    /// Remembered failures count as entries; use [`TypefaceCache::is_loaded`]
    /// to ask about loaded typefaces only.
    pub fn contains(&self, family: &str) -> bool {
        self.entries.lock().contains(&CacheKey::inferred(family))
    }

    /// Whether `family` is cached as a loaded typeface, without touching its recency
    pub fn is_loaded(&self, family: &str) -> bool {
        matches!(
            self.entries.lock().peek(&CacheKey::inferred(family)),
            Some(Entry::Loaded(_))
        )
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Return current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.len();
        CacheStats {
            capacity: self.config.capacity,
            entries,
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            loads: self.counters.loads.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
            evictions: self.counters.evictions.load(Ordering::Relaxed),
        }
    }

    fn load_keyed(&self, assets: &dyn AssetSource, key: CacheKey) -> Result<Arc<Typeface>> {
        // Fast path: the lock is held for the lookup only
        let cached = self.entries.lock().get(&key).cloned();
        if let Some(entry) = cached {
            Counters::bump(&self.counters.hits);
            return match entry {
                Entry::Loaded(typeface) => Ok(typeface),
                Entry::Missing(reason) => Err(TypefaceError::not_found(key.family, reason)),
            };
        }

        // Slow path: probe and load without holding the lock
        Counters::bump(&self.counters.misses);
        match self.load_uncached(assets, &key) {
            Ok(typeface) => {
                Counters::bump(&self.counters.loads);
                let typeface = Arc::new(typeface);
                self.store(key, Entry::Loaded(Arc::clone(&typeface)));
                Ok(typeface)
            }
            Err(err) => {
                Counters::bump(&self.counters.failures);
                if self.config.cache_failures {
                    if let TypefaceError::FontNotFound { reason, .. } = &err {
                        self.store(key, Entry::Missing(reason.clone()));
                    }
                }
                Err(err)
            }
        }
    }

    fn load_uncached(&self, assets: &dyn AssetSource, key: &CacheKey) -> Result<Typeface> {
        let family = key.family.as_str();
        log::debug!("Loading font: {}", key);

        let path = probe_asset_path(assets, family)
            .map_err(|miss| TypefaceError::not_found(family, miss.to_string()))?;

        let data = read_asset(assets, &path).map_err(|e| {
            log::warn!("Failed to read font asset {} for {}: {}", path, family, e);
            TypefaceError::not_found(family, format!("{}: {}", path, e))
        })?;

        let typeface = self.loader.load(&path, data).map_err(|e| {
            log::warn!(
                "{} loader rejected {} for {}: {}",
                self.loader.name(),
                path,
                family,
                e
            );
            TypefaceError::not_found(family, format!("{}: {}", path, e))
        })?;

        let style = key.style.or_else(|| Style::from_family_suffix(family));
        Ok(match style {
            Some(style) => typeface.with_style(style),
            None => typeface,
        })
    }

    fn store(&self, key: CacheKey, entry: Entry) {
        let mut entries = self.entries.lock();
        // A failure never replaces a typeface another caller managed to load
        if matches!(entry, Entry::Missing(_))
            && matches!(entries.peek(&key), Some(Entry::Loaded(_)))
        {
            log::debug!("Keeping loaded font over failed reload: {}", key);
            return;
        }
        let replacing = entries.contains(&key);
        if let Some((evicted, _)) = entries.push(key, entry) {
            if !replacing {
                Counters::bump(&self.counters.evictions);
                log::debug!("Evicted font: {}", evicted);
            }
        }
    }
}

impl fmt::Debug for TypefaceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypefaceCache")
            .field("loader", &self.loader.name())
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

fn validate_family(family: Option<&str>) -> Result<&str> {
    match family {
        None => Err(TypefaceError::InvalidArgument(
            "font family is missing".to_string(),
        )),
        Some(name) if name.trim().is_empty() => Err(TypefaceError::InvalidArgument(
            "font family is blank".to_string(),
        )),
        Some(name) => Ok(name),
    }
}
