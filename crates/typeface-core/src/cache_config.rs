// this_file: crates/typeface-core/src/cache_config.rs

//! Cache configuration
//!
//! The cache holds 12 typefaces and forgets failed lookups unless told
//! otherwise. Both knobs can be set in code or, for the shared cache, through
//! the environment:
//!
//! ```bash
//! TYPEFACE_CACHE_CAPACITY=32 TYPEFACE_CACHE_NEGATIVE=1 ./my_app
//! ```
//!
//! # Example
//!
//! ```
//! use typeface_core::CacheConfig;
//!
//! let config = CacheConfig::default().with_capacity(32).with_cache_failures(true);
//! assert_eq!(config.capacity, 32);
//! assert!(config.cache_failures);
//! ```

/// Number of typefaces kept when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 12;

/// Environment variable overriding [`CacheConfig::capacity`]
pub const CAPACITY_ENV: &str = "TYPEFACE_CACHE_CAPACITY";

/// Environment variable overriding [`CacheConfig::cache_failures`]
pub const NEGATIVE_ENV: &str = "TYPEFACE_CACHE_NEGATIVE";

/// How a typeface cache should behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries (minimum 1)
    pub capacity: usize,
    /// Remember keys that failed to load so they are not probed again
    pub cache_failures: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            cache_failures: false,
        }
    }
}

impl CacheConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_cache_failures(mut self, cache_failures: bool) -> Self {
        self.cache_failures = cache_failures;
        self
    }

    /// Defaults, overridden by `TYPEFACE_CACHE_CAPACITY` and `TYPEFACE_CACHE_NEGATIVE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the two variables
    ///
    /// Malformed values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => {
                    config.capacity = capacity;
                    log::info!("Typeface cache capacity set to {} via {}", capacity, CAPACITY_ENV);
                }
                _ => log::warn!("Ignoring {}={:?}: expected a positive integer", CAPACITY_ENV, raw),
            }
        }

        if let Some(raw) = lookup(NEGATIVE_ENV) {
            match parse_flag(&raw) {
                Some(enabled) => {
                    config.cache_failures = enabled;
                    log::info!(
                        "Typeface cache failure caching {} via {}",
                        if enabled { "enabled" } else { "disabled" },
                        NEGATIVE_ENV
                    );
                }
                None => log::warn!("Ignoring {}={:?}: expected a boolean", NEGATIVE_ENV, raw),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
