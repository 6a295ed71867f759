// this_file: crates/typeface-core/src/style.rs

//! Typeface styles and the family-name suffix convention
//!
//! Asset names like `Roboto-Bold` or `Lato-BoldItalic` carry their style in a
//! trailing suffix. [`Style::from_family_suffix`] reads that suffix so callers
//! get a bold handle for a bold family without saying so twice.

use std::fmt;

/// The four styles a typeface handle can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Suffixes checked against the lowercased family name, first match wins.
const SUFFIXES: [(&str, Style); 4] = [
    ("-bold", Style::Bold),
    ("-regular", Style::Normal),
    ("-italic", Style::Italic),
    ("-bolditalic", Style::BoldItalic),
];

impl Style {
    /// Build a style from independent bold and italic flags
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Style::Normal,
            (true, false) => Style::Bold,
            (false, true) => Style::Italic,
            (true, true) => Style::BoldItalic,
        }
    }

    /// Infer a style from the suffix of a family name, ignoring case
    ///
    /// Returns `None` when the name carries no recognised suffix, in which
    /// case the font's own style should be left alone.
    ///
    /// ```
    /// use typeface_core::Style;
    ///
    /// assert_eq!(Style::from_family_suffix("Roboto-Bold"), Some(Style::Bold));
    /// assert_eq!(Style::from_family_suffix("Lato-BOLDITALIC"), Some(Style::BoldItalic));
    /// assert_eq!(Style::from_family_suffix("Roboto"), None);
    /// ```
    pub fn from_family_suffix(family: &str) -> Option<Self> {
        let lower = family.to_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| lower.ends_with(suffix))
            .map(|(_, style)| *style)
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Style::Bold | Style::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Style::Italic | Style::BoldItalic)
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Normal => "normal",
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::BoldItalic => "bold-italic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
