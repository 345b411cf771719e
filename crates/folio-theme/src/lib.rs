//! Theme system for FOLIO.
//!
//! A theme maps token classes (keyword, string, comment, ...) to display
//! colors. Five palettes are built in; custom palettes load from TOML.
//! The active theme name is persisted by the settings layer -- this crate
//! only resolves names to palettes and never owns global state.

mod theme;

pub use theme::{Theme, ThemeFile, ThemeName, TokenClass};

/// Resolve a theme by name, falling back to the default palette when the
/// name is unknown.
pub fn lookup(name: &str) -> Theme {
    match name.parse::<ThemeName>() {
        Ok(n) => Theme::named(n),
        Err(_) => {
            log::warn!("theme '{name}' not found -- falling back to dracula");
            Theme::named(ThemeName::Dracula)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known() {
        assert_eq!(lookup("nord").name, ThemeName::Nord);
    }

    #[test]
    fn lookup_unknown_falls_back() {
        assert_eq!(lookup("solarized").name, ThemeName::Dracula);
    }
}
