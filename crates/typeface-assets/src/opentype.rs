// this_file: crates/typeface-assets/src/opentype.rs

//! OpenType loader backed by `read-fonts`
//!
//! Validates the bytes, reads units-per-em and works out the style the font
//! declares for itself. `OS/2.fsSelection` is authoritative when present;
//! fonts without an OS/2 table fall back to `head.macStyle`.

use read_fonts::{FontRef, TableProvider};
use typeface_core::{FontLoadError, Style, Typeface, TypefaceLoader, MAX_FONT_SIZE};

const FS_SELECTION_ITALIC: u16 = 1 << 0;
const FS_SELECTION_BOLD: u16 = 1 << 5;
const MAC_STYLE_BOLD: u16 = 1 << 0;
const MAC_STYLE_ITALIC: u16 = 1 << 1;

/// Loads TrueType, OpenType and collection files (first face)
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTypeLoader;

impl OpenTypeLoader {
    pub fn new() -> Self {
        Self
    }

    /// Style bits as declared by the font, `Normal` when neither table says otherwise
    fn native_style(font: &FontRef<'_>) -> Style {
        if let Ok(os2) = font.os2() {
            let bits = os2.fs_selection().bits();
            return Style::from_flags(
                bits & FS_SELECTION_BOLD != 0,
                bits & FS_SELECTION_ITALIC != 0,
            );
        }
        font.head()
            .map(|head| {
                let bits = head.mac_style().bits();
                Style::from_flags(bits & MAC_STYLE_BOLD != 0, bits & MAC_STYLE_ITALIC != 0)
            })
            .unwrap_or_default()
    }
}

impl TypefaceLoader for OpenTypeLoader {
    fn name(&self) -> &'static str {
        "opentype"
    }

    fn load(&self, asset_path: &str, data: Vec<u8>) -> Result<Typeface, FontLoadError> {
        let size = data.len() as u64;
        if size > MAX_FONT_SIZE {
            return Err(FontLoadError::TooLarge {
                size,
                max: MAX_FONT_SIZE,
            });
        }

        let (units_per_em, native_style) = {
            let font = FontRef::from_index(&data, 0)
                .map_err(|e| FontLoadError::InvalidData(format!("{}: {}", asset_path, e)))?;

            // Fonts without a head table still shape; assume the usual grid
            let units_per_em = font
                .head()
                .map(|head| head.units_per_em())
                .unwrap_or(1000);

            (units_per_em, Self::native_style(&font))
        };

        log::trace!(
            "Parsed {} ({} bytes, {} upem, {})",
            asset_path,
            size,
            units_per_em,
            native_style
        );

        Ok(Typeface::new(asset_path, data, native_style).with_units_per_em(units_per_em))
    }
}
