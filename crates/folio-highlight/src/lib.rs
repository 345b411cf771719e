//! Line-oriented syntax highlighter.
//!
//! `highlight_line` turns one line of source text into an ordered,
//! non-overlapping sequence of spans, each tagged with a token class and
//! the display color the active theme assigns to that class. The scanner
//! walks the line exactly once: a naive alternative -- substituting token
//! markup in several passes, each re-scanning the already-substituted
//! text -- tags keywords inside string literals twice, so here a string
//! literal shadows any keyword, function name, or `//` sequence inside it.
//!
//! The scanner is stateless and pure; callers pass the theme in and own
//! any caching.

mod scanner;

pub use scanner::scan;

use folio_theme::{Theme, TokenClass};
use folio_types::color::Color;

/// One highlighted slice of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub class: TokenClass,
    pub color: Color,
}

/// Split a single line (no embedded newlines) into colored spans.
///
/// The spans partition the input: concatenating their text reproduces the
/// line byte-for-byte, in order, with no overlap.
pub fn highlight_line(line: &str, theme: &Theme) -> Vec<HighlightSpan> {
    scan(line)
        .into_iter()
        .map(|(text, class)| HighlightSpan {
            color: theme.color(class),
            text,
            class,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::ThemeName;

    #[test]
    fn dracula_const_and_string() {
        let theme = Theme::named(ThemeName::Dracula);
        let spans = highlight_line(r#"const x = "hello";"#, &theme);

        let keyword = spans.iter().find(|s| s.class == TokenClass::Keyword).unwrap();
        assert_eq!(keyword.text, "const");
        assert_eq!(keyword.color, Color::rgb(0xFF, 0x79, 0xC6));

        let string = spans
            .iter()
            .find(|s| s.class == TokenClass::StringLiteral)
            .unwrap();
        assert_eq!(string.text, "\"hello\"");
        assert_eq!(string.color, Color::rgb(0xF1, 0xFA, 0x8C));

        // Surrounding text passes through unwrapped.
        assert!(
            spans
                .iter()
                .any(|s| s.class == TokenClass::Default && s.text.contains('='))
        );
    }

    #[test]
    fn idempotent() {
        let theme = Theme::named(ThemeName::Monokai);
        let line = "for (let i = 0; i < n; i++) { total += price(i); } // sum";
        assert_eq!(highlight_line(line, &theme), highlight_line(line, &theme));
    }

    #[test]
    fn theme_drives_colors() {
        let line = "return 1;";
        let dracula = highlight_line(line, &Theme::named(ThemeName::Dracula));
        let nord = highlight_line(line, &Theme::named(ThemeName::Nord));
        assert_eq!(dracula[0].class, TokenClass::Keyword);
        assert_ne!(dracula[0].color, nord[0].color);
    }
}
