// this_file: crates/typeface-cache/tests/probing.rs

mod common;

use common::{fake_cache, init_logging, CountingAssets};
use typeface_cache::{CacheConfig, TypefaceError};

#[test]
fn test_bare_name_loads_without_extension() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::new(&["Roboto"]);

    let tf = cache.load_typeface(&assets, "Roboto").expect("bare asset loads");

    assert_eq!(tf.asset_path(), "Roboto");
    // One probe open, one read open
    assert_eq!(assets.opened(), vec!["Roboto", "Roboto"]);
}

#[test]
fn test_ttf_is_probed_before_otf() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::new(&["Roboto.otf", "Roboto.ttf"]);

    let tf = cache.load_typeface(&assets, "Roboto").expect("ttf asset loads");

    assert_eq!(tf.asset_path(), "Roboto.ttf");
    assert_eq!(
        assets.opened(),
        vec!["Roboto", "Roboto.ttf", "Roboto.ttf"]
    );
}

#[test]
fn test_otf_is_the_last_resort() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::new(&["Lato.otf"]);

    let tf = cache.load_typeface(&assets, "Lato").expect("otf asset loads");

    assert_eq!(tf.asset_path(), "Lato.otf");
    assert_eq!(
        assets.opened(),
        vec!["Lato", "Lato.ttf", "Lato.otf", "Lato.otf"]
    );
}

#[test]
fn test_full_filename_is_used_verbatim() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::new(&["Roboto-Bold.ttf"]);

    let tf = cache
        .load_typeface(&assets, "Roboto-Bold.ttf")
        .expect("filename loads");

    assert_eq!(tf.asset_path(), "Roboto-Bold.ttf");
    assert_eq!(assets.opened(), vec!["Roboto-Bold.ttf", "Roboto-Bold.ttf"]);
}

#[test]
fn test_absent_name_fails_without_insertion() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::new(&["Other.ttf"]);

    let err = cache.load_typeface(&assets, "Missing").unwrap_err();

    match err {
        TypefaceError::FontNotFound { family, reason } => {
            assert_eq!(family, "Missing");
            assert!(reason.contains("Missing.otf"), "{}", reason);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(assets.opens(), 3);
    assert!(!cache.contains("Missing"));
    assert!(cache.is_empty());
}

#[test]
fn test_loader_rejection_surfaces_as_not_found() {
    init_logging();
    let cache = fake_cache(CacheConfig::default());
    let assets = CountingAssets::default().with_bytes("Broken.ttf", b"corrupt");

    let err = cache.load_typeface(&assets, "Broken").unwrap_err();

    assert!(err.is_not_found());
    assert!(cache.is_empty());
    assert_eq!(cache.stats().failures, 1);
}
