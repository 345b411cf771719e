//! Single-pass token scanner.

use folio_theme::TokenClass;

/// Reserved words tagged as `Keyword`.
const KEYWORDS: [&str; 12] = [
    "function", "return", "const", "let", "var", "if", "else", "for", "while", "import", "from",
    "export",
];

/// Split one line into `(text, class)` pieces, left to right.
///
/// Rules, in priority order at each position:
/// 1. `//` starts a comment running to end of line.
/// 2. `'`, `"`, or a backtick starts a string literal ending at the next
///    identical delimiter (non-greedy, no escape handling). An unterminated
///    quote is passed through as plain text.
/// 3. An identifier word is a keyword if reserved, a function name if the
///    next character is `(`, and plain otherwise.
/// 4. Anything else accumulates into `Default` pieces.
pub fn scan(line: &str) -> Vec<(String, TokenClass)> {
    let chars: Vec<char> = line.chars().collect();
    let mut pieces: Vec<(String, TokenClass)> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // Comment to end of line.
        if ch == '/' && chars.get(i + 1) == Some(&'/') {
            flush(&mut pieces, &mut plain);
            let rest: String = chars[i..].iter().collect();
            pieces.push((rest, TokenClass::Comment));
            break;
        }

        // Quoted string, non-greedy to the next matching delimiter.
        if ch == '\'' || ch == '"' || ch == '`' {
            if let Some(offset) = chars[i + 1..].iter().position(|&c| c == ch) {
                flush(&mut pieces, &mut plain);
                let end = i + 1 + offset;
                let text: String = chars[i..=end].iter().collect();
                pieces.push((text, TokenClass::StringLiteral));
                i = end + 1;
            } else {
                // Unterminated quote: plain text.
                plain.push(ch);
                i += 1;
            }
            continue;
        }

        // Identifier word.
        if ch.is_ascii_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                flush(&mut pieces, &mut plain);
                pieces.push((word, TokenClass::Keyword));
            } else if chars.get(i) == Some(&'(') {
                flush(&mut pieces, &mut plain);
                pieces.push((word, TokenClass::FunctionName));
            } else {
                plain.push_str(&word);
            }
            continue;
        }

        plain.push(ch);
        i += 1;
    }

    flush(&mut pieces, &mut plain);
    pieces
}

/// Emit any accumulated plain text as a `Default` piece.
fn flush(pieces: &mut Vec<(String, TokenClass)>, plain: &mut String) {
    if !plain.is_empty() {
        pieces.push((std::mem::take(plain), TokenClass::Default));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(line: &str) -> Vec<(String, TokenClass)> {
        scan(line)
    }

    #[test]
    fn empty_line() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn plain_text_single_piece() {
        let pieces = classes("x = y + 2;");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0], ("x = y + 2;".to_string(), TokenClass::Default));
    }

    #[test]
    fn keywords_whole_word_only() {
        let pieces = classes("return returned");
        assert_eq!(pieces[0], ("return".to_string(), TokenClass::Keyword));
        // "returned" is a plain identifier, folded into the default run.
        assert_eq!(pieces[1], (" returned".to_string(), TokenClass::Default));
    }

    #[test]
    fn function_name_before_paren() {
        let pieces = classes("total = price(3)");
        assert!(
            pieces
                .iter()
                .any(|(t, c)| t == "price" && *c == TokenClass::FunctionName)
        );
        assert!(
            pieces
                .iter()
                .any(|(t, c)| t.contains("total") && *c == TokenClass::Default)
        );
    }

    #[test]
    fn keyword_wins_over_function_name() {
        // `if (` is a reserved word even though a paren follows.
        let pieces = classes("if (ready) start();");
        assert_eq!(pieces[0], ("if".to_string(), TokenClass::Keyword));
        assert!(
            pieces
                .iter()
                .any(|(t, c)| t == "start" && *c == TokenClass::FunctionName)
        );
    }

    #[test]
    fn string_shadows_keyword_inside() {
        let pieces = classes(r#"greet("return home")"#);
        let string = pieces
            .iter()
            .find(|(_, c)| *c == TokenClass::StringLiteral)
            .unwrap();
        assert_eq!(string.0, "\"return home\"");
        // The keyword inside the literal is not tagged separately.
        assert_eq!(
            pieces
                .iter()
                .filter(|(_, c)| *c == TokenClass::Keyword)
                .count(),
            0
        );
    }

    #[test]
    fn string_shadows_comment_inside() {
        let pieces = classes(r#"const url = "https://example.com";"#);
        assert!(
            pieces
                .iter()
                .any(|(t, c)| *c == TokenClass::StringLiteral && t.contains("https"))
        );
        assert!(!pieces.iter().any(|(_, c)| *c == TokenClass::Comment));
    }

    #[test]
    fn comment_to_end_of_line() {
        let pieces = classes("let x = 1; // the answer 'almost'");
        let last = pieces.last().unwrap();
        assert_eq!(last.1, TokenClass::Comment);
        assert_eq!(last.0, "// the answer 'almost'");
    }

    #[test]
    fn backtick_and_single_quote_strings() {
        let pieces = classes("a = `tpl` + 'ch'");
        let strings: Vec<&str> = pieces
            .iter()
            .filter(|(_, c)| *c == TokenClass::StringLiteral)
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(strings, ["`tpl`", "'ch'"]);
    }

    #[test]
    fn unterminated_quote_passes_through() {
        let pieces = classes("it's fine");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].1, TokenClass::Default);
        assert_eq!(pieces[0].0, "it's fine");
    }

    #[test]
    fn non_greedy_string_matching() {
        let pieces = classes(r#""a" + "b""#);
        let strings: Vec<&str> = pieces
            .iter()
            .filter(|(_, c)| *c == TokenClass::StringLiteral)
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(strings, ["\"a\"", "\"b\""]);
    }

    #[test]
    fn partition_covers_input() {
        let line = r#"export const greet = (name) => `Hello, ${name}`; // demo"#;
        let joined: String = scan(line).into_iter().map(|(t, _)| t).collect();
        assert_eq!(joined, line);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spans_partition_the_line(line in r#"[ -~]{0,80}"#) {
                let joined: String = scan(&line).into_iter().map(|(t, _)| t).collect();
                prop_assert_eq!(joined, line);
            }

            #[test]
            fn no_empty_pieces(line in r#"[ -~]{0,80}"#) {
                for (text, _) in scan(&line) {
                    prop_assert!(!text.is_empty());
                }
            }

            #[test]
            fn scan_is_pure(line in r#"[ -~]{0,80}"#) {
                prop_assert_eq!(scan(&line), scan(&line));
            }
        }
    }
}
