//! Named token-color palettes and TOML palette files.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use folio_types::color::{Color, parse_hex_color};
use folio_types::error::{FolioError, Result};

/// The built-in palette names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Dracula,
    Monokai,
    Nord,
    Catppuccin,
    Everfrost,
}

impl ThemeName {
    /// All built-in palettes, in the order they are listed to the user.
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Dracula,
        ThemeName::Monokai,
        ThemeName::Nord,
        ThemeName::Catppuccin,
        ThemeName::Everfrost,
    ];

    /// The lowercase name users type and stores persist.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dracula => "dracula",
            ThemeName::Monokai => "monokai",
            ThemeName::Nord => "nord",
            ThemeName::Catppuccin => "catppuccin",
            ThemeName::Everfrost => "everfrost",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dracula" => Ok(ThemeName::Dracula),
            "monokai" => Ok(ThemeName::Monokai),
            "nord" => Ok(ThemeName::Nord),
            "catppuccin" => Ok(ThemeName::Catppuccin),
            "everfrost" => Ok(ThemeName::Everfrost),
            other => Err(FolioError::Theme(format!("unknown theme: {other}"))),
        }
    }
}

/// Category assigned to a highlighted span, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Keyword,
    FunctionName,
    StringLiteral,
    Variable,
    Comment,
    Default,
}

/// A resolved palette: one color per token class plus the surface colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    pub foreground: Color,
    pub keyword: Color,
    pub function: Color,
    pub string: Color,
    pub variable: Color,
    pub comment: Color,
}

impl Theme {
    /// Look up the display color for a token class. `Default` maps to the
    /// foreground color.
    pub fn color(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Keyword => self.keyword,
            TokenClass::FunctionName => self.function,
            TokenClass::StringLiteral => self.string,
            TokenClass::Variable => self.variable,
            TokenClass::Comment => self.comment,
            TokenClass::Default => self.foreground,
        }
    }

    /// The built-in palette for a name.
    pub fn named(name: ThemeName) -> Theme {
        match name {
            ThemeName::Dracula => Theme {
                name,
                background: Color::rgb(0x28, 0x2A, 0x36),
                foreground: Color::rgb(0xF8, 0xF8, 0xF2),
                keyword: Color::rgb(0xFF, 0x79, 0xC6),
                function: Color::rgb(0x50, 0xFA, 0x7B),
                string: Color::rgb(0xF1, 0xFA, 0x8C),
                variable: Color::rgb(0xF8, 0xF8, 0xF2),
                comment: Color::rgb(0x62, 0x72, 0xA4),
            },
            ThemeName::Monokai => Theme {
                name,
                background: Color::rgb(0x27, 0x28, 0x22),
                foreground: Color::rgb(0xF8, 0xF8, 0xF2),
                keyword: Color::rgb(0xF9, 0x26, 0x72),
                function: Color::rgb(0xA6, 0xE2, 0x2E),
                string: Color::rgb(0xE6, 0xDB, 0x74),
                variable: Color::rgb(0xF8, 0xF8, 0xF2),
                comment: Color::rgb(0x75, 0x71, 0x5E),
            },
            ThemeName::Nord => Theme {
                name,
                background: Color::rgb(0x2E, 0x34, 0x40),
                foreground: Color::rgb(0xD8, 0xDE, 0xE9),
                keyword: Color::rgb(0x81, 0xA1, 0xC1),
                function: Color::rgb(0x88, 0xC0, 0xD0),
                string: Color::rgb(0xEB, 0xCB, 0x8B),
                variable: Color::rgb(0xD8, 0xDE, 0xE9),
                comment: Color::rgb(0x4C, 0x56, 0x6A),
            },
            ThemeName::Catppuccin => Theme {
                name,
                background: Color::rgb(0x1E, 0x1E, 0x2E),
                foreground: Color::rgb(0xCD, 0xD6, 0xF4),
                keyword: Color::rgb(0xCB, 0xA6, 0xF7),
                function: Color::rgb(0x89, 0xB4, 0xFA),
                string: Color::rgb(0xF9, 0xE2, 0xAF),
                variable: Color::rgb(0xCD, 0xD6, 0xF4),
                comment: Color::rgb(0x6C, 0x70, 0x86),
            },
            ThemeName::Everfrost => Theme {
                name,
                background: Color::rgb(0x0F, 0x1C, 0x23),
                foreground: Color::rgb(0xE3, 0xE8, 0xEA),
                keyword: Color::rgb(0x76, 0xE0, 0xF0),
                function: Color::rgb(0x7C, 0xE3, 0xAC),
                string: Color::rgb(0xFF, 0xDA, 0x7C),
                variable: Color::rgb(0xE3, 0xE8, 0xEA),
                comment: Color::rgb(0x4C, 0x66, 0x78),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::named(ThemeName::default())
    }
}

/// Palette file as loaded from TOML. Every field is an optional hex string;
/// omitted fields fall back to the dracula values.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ThemeFile {
    /// Parse a palette from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve the file into a `Theme`. Malformed hex strings are rejected;
    /// missing fields use the base palette's values.
    pub fn to_theme(&self, base: ThemeName) -> Result<Theme> {
        let defaults = Theme::named(base);
        Ok(Theme {
            name: base,
            background: resolve(self.background.as_deref(), defaults.background)?,
            foreground: resolve(self.foreground.as_deref(), defaults.foreground)?,
            keyword: resolve(self.keyword.as_deref(), defaults.keyword)?,
            function: resolve(self.function.as_deref(), defaults.function)?,
            string: resolve(self.string.as_deref(), defaults.string)?,
            variable: resolve(self.variable.as_deref(), defaults.variable)?,
            comment: resolve(self.comment.as_deref(), defaults.comment)?,
        })
    }
}

fn resolve(field: Option<&str>, fallback: Color) -> Result<Color> {
    match field {
        None => Ok(fallback),
        Some(s) => {
            parse_hex_color(s).ok_or_else(|| FolioError::Theme(format!("invalid hex color: {s}")))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for name in ThemeName::ALL {
            assert_eq!(name.as_str().parse::<ThemeName>().unwrap(), name);
        }
    }

    #[test]
    fn name_parse_is_case_insensitive() {
        assert_eq!("NORD".parse::<ThemeName>().unwrap(), ThemeName::Nord);
        assert_eq!("Dracula".parse::<ThemeName>().unwrap(), ThemeName::Dracula);
    }

    #[test]
    fn name_parse_unknown() {
        let err = "bogus".parse::<ThemeName>().unwrap_err();
        assert!(format!("{err}").contains("bogus"));
    }

    #[test]
    fn dracula_token_colors() {
        let theme = Theme::named(ThemeName::Dracula);
        assert_eq!(theme.color(TokenClass::Keyword), Color::rgb(0xFF, 0x79, 0xC6));
        assert_eq!(
            theme.color(TokenClass::StringLiteral),
            Color::rgb(0xF1, 0xFA, 0x8C)
        );
        assert_eq!(theme.color(TokenClass::Default), theme.foreground);
    }

    #[test]
    fn every_palette_distinct_from_background() {
        for name in ThemeName::ALL {
            let t = Theme::named(name);
            assert_ne!(t.keyword, t.background, "{name}");
            assert_ne!(t.comment, t.foreground, "{name}");
        }
    }

    #[test]
    fn theme_file_overrides_and_defaults() {
        let file = ThemeFile::from_toml(
            r##"
keyword = "#112233"
comment = "#44556677"
"##,
        )
        .unwrap();
        let theme = file.to_theme(ThemeName::Dracula).unwrap();
        assert_eq!(theme.keyword, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.comment, Color::rgba(0x44, 0x55, 0x66, 0x77));
        // Untouched fields keep the base palette.
        assert_eq!(theme.string, Theme::named(ThemeName::Dracula).string);
    }

    #[test]
    fn theme_file_rejects_bad_hex() {
        let file = ThemeFile::from_toml(r##"keyword = "papayawhip""##).unwrap();
        let err = file.to_theme(ThemeName::Nord).unwrap_err();
        assert!(matches!(err, FolioError::Theme(_)));
    }

    #[test]
    fn theme_file_rejects_bad_toml() {
        assert!(ThemeFile::from_toml("keyword = [[[").is_err());
    }
}
