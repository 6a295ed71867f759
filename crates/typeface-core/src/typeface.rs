// this_file: crates/typeface-core/src/typeface.rs

//! The loaded typeface handle

use std::fmt;
use std::sync::Arc;

use crate::style::Style;

/// Maximum font asset size (50MB) to prevent resource exhaustion.
pub const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// A font that's been read from an asset and is ready to draw with
///
/// Bytes are shared, so applying a style is cheap: the restyled handle points
/// at the same data as the one it came from.
#[derive(Clone)]
pub struct Typeface {
    data: Arc<[u8]>,
    asset_path: String,
    units_per_em: u16,
    native_style: Style,
    style: Style,
}

impl Typeface {
    /// Wrap font bytes read from `asset_path`
    ///
    /// The applied style starts out as the font's own style.
    pub fn new(
        asset_path: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
        native_style: Style,
    ) -> Self {
        Self {
            data: data.into(),
            asset_path: asset_path.into(),
            units_per_em: 1000,
            native_style,
            style: native_style,
        }
    }

    pub fn with_units_per_em(mut self, units_per_em: u16) -> Self {
        self.units_per_em = units_per_em;
        self
    }

    /// Returns a handle over the same bytes carrying `style`
    pub fn with_style(&self, style: Style) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Raw font bytes as they live in the asset
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The asset name the bytes were read from, extension included
    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// The style the font file declares for itself
    pub fn native_style(&self) -> Style {
        self.native_style
    }

    /// The style this handle renders with
    pub fn style(&self) -> Style {
        self.style
    }

    /// True when both handles read from the same bytes
    pub fn shares_data_with(&self, other: &Typeface) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("asset_path", &self.asset_path)
            .field("bytes", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .field("native_style", &self.native_style)
            .field("style", &self.style)
            .finish()
    }
}
