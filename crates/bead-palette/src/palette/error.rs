//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette file parsing
//! and nearest-color matching.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing a color from text.
///
/// Returned by [`Rgb::from_str`](crate::Rgb) for both the decimal `R,G,B`
/// notation and the `#RRGGBB` hex notation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// A character after '#' is not a hexadecimal digit
    InvalidHex(char),
    /// Decimal notation did not have exactly three components
    WrongArity {
        /// Number of comma-separated components found
        found: usize,
    },
    /// A decimal component is not an integer in 0..=255
    InvalidComponent(ParseIntError),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
            ParseColorError::WrongArity { found } => {
                write!(f, "expected 3 comma-separated components, found {}", found)
            }
            ParseColorError::InvalidComponent(err) => {
                write!(f, "invalid color component (expected 0-255): {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidComponent(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette file parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// The document has no `[Palette]` section
    MissingSection,
    /// A line is neither a comment, a section header nor a `key = value` pair,
    /// or a pair appears before any section header
    MalformedLine {
        /// 1-based line number
        line: usize,
    },
    /// A palette entry's value is not a valid `R,G,B` triple
    InvalidEntry {
        /// Name of the offending entry
        key: String,
        /// Underlying color parse failure
        source: ParseColorError,
    },
    /// The same entry name appears twice in the palette section
    DuplicateName {
        /// The repeated name
        key: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::MissingSection => {
                write!(f, "palette file has no [Palette] section")
            }
            PaletteError::MalformedLine { line } => {
                write!(f, "malformed palette file line {}", line)
            }
            PaletteError::InvalidEntry { key, source } => {
                write!(f, "invalid color for palette entry '{}': {}", key, source)
            }
            PaletteError::DuplicateName { key } => {
                write!(f, "duplicate palette entry '{}'", key)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for nearest-color matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Color space tag is not one of `rgb`, `yuv`, `hsv`
    UnknownColorSpace(String),
    /// Matching was attempted against a palette with no entries
    EmptyPalette,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::UnknownColorSpace(tag) => {
                write!(
                    f,
                    "unknown color space '{}' (expected rgb, yuv or hsv)",
                    tag
                )
            }
            MatchError::EmptyPalette => write!(f, "palette cannot be empty"),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_entry_names_key() {
        let source = "1,2".parse::<crate::Rgb>().unwrap_err();
        let err = PaletteError::InvalidEntry {
            key: "red".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "invalid color for palette entry 'red': expected 3 comma-separated components, found 2"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_hex_message() {
        let err = ParseColorError::InvalidHex('é');
        assert_eq!(err.to_string(), "invalid hex character: 'é'");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_match_error_messages() {
        assert_eq!(
            MatchError::UnknownColorSpace("XYZ".to_string()).to_string(),
            "unknown color space 'XYZ' (expected rgb, yuv or hsv)"
        );
        assert_eq!(MatchError::EmptyPalette.to_string(), "palette cannot be empty");
    }

    #[test]
    fn test_other_palette_messages() {
        assert_eq!(
            PaletteError::MissingSection.to_string(),
            "palette file has no [Palette] section"
        );
        assert_eq!(
            PaletteError::MalformedLine { line: 7 }.to_string(),
            "malformed palette file line 7"
        );
        assert_eq!(
            PaletteError::DuplicateName {
                key: "white".to_string()
            }
            .to_string(),
            "duplicate palette entry 'white'"
        );
    }
}
