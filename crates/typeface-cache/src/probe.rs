// this_file: crates/typeface-cache/src/probe.rs

//! Asset path probing
//!
//! Lets callers name a font without its extension. The family is tried as
//! given, then with `.ttf`, then with `.otf`; the first name that opens wins.

use std::io::Read;

use thiserror::Error;
use typeface_core::{AssetSource, FontLoadError, MAX_FONT_SIZE};

/// Extensions appended, in order, when the bare name does not open
pub const PROBE_EXTENSIONS: [&str; 2] = [".ttf", ".otf"];

/// None of the candidate names opened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no asset matched (tried {})", .tried.join(", "))]
pub struct ProbeMiss {
    pub family: String,
    pub tried: Vec<String>,
}

/// Candidate asset names for `family`, in probing order
pub fn candidates(family: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(family.to_string())
        .chain(PROBE_EXTENSIONS.iter().map(move |ext| format!("{}{}", family, ext)))
}

/// Find the asset name `family` refers to
///
/// Each probe stream is dropped as soon as the open succeeds; the bytes are
/// read separately by [`read_asset`].
pub fn probe_asset_path(assets: &dyn AssetSource, family: &str) -> Result<String, ProbeMiss> {
    let mut tried = Vec::with_capacity(1 + PROBE_EXTENSIONS.len());
    for candidate in candidates(family) {
        match assets.open(&candidate) {
            Ok(stream) => {
                drop(stream);
                return Ok(candidate);
            }
            Err(e) => {
                log::trace!("Probe miss for {}: {}", candidate, e);
                tried.push(candidate);
            }
        }
    }
    Err(ProbeMiss {
        family: family.to_string(),
        tried,
    })
}

/// Read the whole asset called `name`, refusing anything over [`MAX_FONT_SIZE`]
pub fn read_asset(assets: &dyn AssetSource, name: &str) -> Result<Vec<u8>, FontLoadError> {
    let stream = assets.open(name)?;
    let mut data = Vec::new();
    stream.take(MAX_FONT_SIZE + 1).read_to_end(&mut data)?;

    let size = data.len() as u64;
    if size > MAX_FONT_SIZE {
        return Err(FontLoadError::TooLarge {
            size,
            max: MAX_FONT_SIZE,
        });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeface_assets::MemoryAssets;

    #[test]
    fn test_candidates_order() {
        let names: Vec<String> = candidates("Roboto").collect();
        assert_eq!(names, vec!["Roboto", "Roboto.ttf", "Roboto.otf"]);
    }

    #[test]
    fn test_bare_name_wins() {
        let assets = MemoryAssets::new()
            .with_asset("Roboto", vec![1u8])
            .with_asset("Roboto.ttf", vec![2u8]);
        assert_eq!(probe_asset_path(&assets, "Roboto").as_deref(), Ok("Roboto"));
    }

    #[test]
    fn test_ttf_before_otf() {
        let assets = MemoryAssets::new()
            .with_asset("Roboto.otf", vec![1u8])
            .with_asset("Roboto.ttf", vec![2u8]);
        assert_eq!(
            probe_asset_path(&assets, "Roboto").as_deref(),
            Ok("Roboto.ttf")
        );
    }

    #[test]
    fn test_miss_lists_every_candidate() {
        let miss = probe_asset_path(&MemoryAssets::new(), "Nope").unwrap_err();
        assert_eq!(miss.family, "Nope");
        assert_eq!(miss.tried, vec!["Nope", "Nope.ttf", "Nope.otf"]);
        assert_eq!(
            miss.to_string(),
            "no asset matched (tried Nope, Nope.ttf, Nope.otf)"
        );
    }

    #[test]
    fn test_read_asset_returns_bytes() {
        let assets = MemoryAssets::new().with_asset("a.ttf", vec![7u8; 32]);
        assert_eq!(read_asset(&assets, "a.ttf").unwrap(), vec![7u8; 32]);
        assert!(matches!(
            read_asset(&assets, "b.ttf"),
            Err(FontLoadError::Io(_))
        ));
    }
}
