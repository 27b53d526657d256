//! Palette file parsing.
//!
//! Palette files are INI-style documents. Only the `[Palette]` section is
//! read; each key names a bead color and each value is a decimal `R,G,B`
//! triple, optionally followed by a `#` comment:
//!
//! ```ini
//! ; Hama midi beads
//! [Palette]
//! white = 255,255,255
//! red   = 255,0,0      # primary
//! ```
//!
//! Keys are trimmed and lowercased. Whole-line comments start with `#` or
//! `;`. Pairs may use `=` or `:` as delimiter. Text after the closing `]` of
//! a section header is ignored.

use super::entry::PaletteEntry;
use super::error::PaletteError;
use super::palette::Palette;
use crate::color::Rgb;

/// Section holding the palette entries.
pub const PALETTE_SECTION: &str = "Palette";

/// One classified line of the document.
enum Line<'a> {
    Blank,
    Section(&'a str),
    Pair { key: &'a str, value: &'a str },
}

fn classify(raw: &str) -> Option<Line<'_>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Some(Line::Blank);
    }
    if let Some(rest) = line.strip_prefix('[') {
        // Header runs to the last ']'; anything after it is ignored
        let end = rest.rfind(']')?;
        return (end > 0).then(|| Line::Section(&rest[..end]));
    }

    let split = line.find(|c: char| c == '=' || c == ':')?;
    let key = line[..split].trim();
    if key.is_empty() {
        return None;
    }
    Some(Line::Pair {
        key,
        value: line[split + 1..].trim(),
    })
}

impl Palette {
    /// Parse a palette from the text of a palette file.
    ///
    /// Entries are added in file order. An empty `[Palette]` section yields
    /// an empty palette.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::MissingSection`] if there is no `[Palette]` section
    /// - [`PaletteError::MalformedLine`] for a line that is not a comment,
    ///   section header or `key = value` pair, or a pair outside any section
    /// - [`PaletteError::InvalidEntry`] naming the key whose value is not an
    ///   `R,G,B` triple of bytes
    /// - [`PaletteError::DuplicateName`] if a key repeats within the palette
    ///
    /// # Example
    ///
    /// ```
    /// use bead_palette::{ColorSpace, Palette, Rgb};
    ///
    /// let palette = Palette::from_config_str(
    ///     "[Palette]\nred = 255,0,0\nblue = 0,0,255  # note\n",
    /// ).unwrap();
    ///
    /// let best = palette.nearest(ColorSpace::default(), Rgb::new(250, 5, 5)).unwrap();
    /// assert_eq!(best.name(), "red");
    /// ```
    pub fn from_config_str(text: &str) -> Result<Self, PaletteError> {
        let mut palette = Palette::new();
        let mut section: Option<&str> = None;
        let mut found_section = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = classify(raw).ok_or(PaletteError::MalformedLine { line: idx + 1 })?;
            match line {
                Line::Blank => {}
                Line::Section(name) => {
                    let name = name.trim();
                    found_section |= name == PALETTE_SECTION;
                    section = Some(name);
                }
                Line::Pair { key, value } => match section {
                    None => return Err(PaletteError::MalformedLine { line: idx + 1 }),
                    Some(PALETTE_SECTION) => {
                        let key = key.to_lowercase();
                        if palette.get(&key).is_some() {
                            return Err(PaletteError::DuplicateName { key });
                        }
                        let color = value.split('#').next().unwrap_or_default();
                        match color.parse::<Rgb>() {
                            Ok(rgb) => palette.add(PaletteEntry::new(key, rgb)),
                            Err(source) => return Err(PaletteError::InvalidEntry { key, source }),
                        }
                    }
                    Some(_) => {}
                },
            }
        }

        if !found_section {
            return Err(PaletteError::MissingSection);
        }
        Ok(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;
    use pretty_assertions::assert_eq;

    fn names(palette: &Palette) -> Vec<&str> {
        palette.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_basic_file() {
        let text = "\
; comment
# another comment

[Palette]
white = 255,255,255
Black: 0, 0, 0
red = 255,0,0  # primary
";
        let palette = Palette::from_config_str(text).unwrap();
        assert_eq!(names(&palette), vec!["white", "black", "red"]);
        assert_eq!(palette.get("red").unwrap().rgb(), Rgb::new(255, 0, 0));
        assert_eq!(palette.get("black").unwrap().rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_other_sections_ignored() {
        let text = "\
[Meta]
vendor = Hama
sizes = 5,10

[Palette]
grey = 128,128,128

[Extra]
pink = 255,192,203
";
        let palette = Palette::from_config_str(text).unwrap();
        assert_eq!(names(&palette), vec!["grey"]);
    }

    #[test]
    fn test_section_header_with_trailing_text() {
        let text = "[Palette]  ; hama midi\nred = 255,0,0\n[Other] x\nblue = 0,0,255\n";
        let palette = Palette::from_config_str(text).unwrap();
        assert_eq!(names(&palette), vec!["red"]);
        assert_eq!(
            Palette::from_config_str("[]\nred = 1,2,3\n").unwrap_err(),
            PaletteError::MalformedLine { line: 1 }
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let palette = Palette::from_config_str("[Palette]\r\nred = 255,0,0\r\n").unwrap();
        assert_eq!(palette.get("red").unwrap().rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_missing_section() {
        assert_eq!(
            Palette::from_config_str("[Colors]\nred = 255,0,0\n").unwrap_err(),
            PaletteError::MissingSection
        );
        assert_eq!(
            Palette::from_config_str("").unwrap_err(),
            PaletteError::MissingSection
        );
        // Section names are case-sensitive
        assert_eq!(
            Palette::from_config_str("[palette]\nred = 255,0,0\n").unwrap_err(),
            PaletteError::MissingSection
        );
    }

    #[test]
    fn test_empty_section_yields_empty_palette() {
        let palette = Palette::from_config_str("[Palette]\n# nothing yet\n").unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_invalid_entry_names_key() {
        let err = Palette::from_config_str("[Palette]\nRed = 255,0\n").unwrap_err();
        assert_eq!(
            err,
            PaletteError::InvalidEntry {
                key: "red".to_string(),
                source: ParseColorError::WrongArity { found: 2 },
            }
        );

        let err = Palette::from_config_str("[Palette]\nblue = 0,0,x\n").unwrap_err();
        assert!(
            matches!(&err, PaletteError::InvalidEntry { key, source: ParseColorError::InvalidComponent(_) } if key == "blue"),
            "unexpected error: {err:?}"
        );

        let err = Palette::from_config_str("[Palette]\nhot = 300,0,0\n").unwrap_err();
        assert!(matches!(&err, PaletteError::InvalidEntry { key, .. } if key == "hot"));

        let err = Palette::from_config_str("[Palette]\nnothing =   # empty\n").unwrap_err();
        assert!(matches!(&err, PaletteError::InvalidEntry { key, .. } if key == "nothing"));
    }

    #[test]
    fn test_invalid_entry_in_other_section_is_ignored() {
        let palette =
            Palette::from_config_str("[Other]\nbad = not a color\n[Palette]\nok = 1,2,3\n")
                .unwrap();
        assert_eq!(names(&palette), vec!["ok"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Palette::from_config_str("[Palette]\nred = 255,0,0\nRED = 250,0,0\n").unwrap_err();
        assert_eq!(
            err,
            PaletteError::DuplicateName {
                key: "red".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            Palette::from_config_str("red = 255,0,0\n[Palette]\n").unwrap_err(),
            PaletteError::MalformedLine { line: 1 }
        );
        assert_eq!(
            Palette::from_config_str("[Palette]\nred 255 0 0\n").unwrap_err(),
            PaletteError::MalformedLine { line: 2 }
        );
        assert_eq!(
            Palette::from_config_str("[Palette\nred = 1,2,3\n").unwrap_err(),
            PaletteError::MalformedLine { line: 1 }
        );
        assert_eq!(
            Palette::from_config_str("[Palette]\n = 1,2,3\n").unwrap_err(),
            PaletteError::MalformedLine { line: 2 }
        );
    }
}
