//! ASCII-art text renderer backing the `figlet` command.
//!
//! Not a real figlet implementation: a fixed 7-row glyph table covering
//! `A-Z`, space, `!`, `.` and `,`. Input is uppercased; anything outside
//! the table renders as the space glyph.

/// Number of rows in every glyph.
const ROWS: usize = 7;

/// Render text as 7 newline-joined rows of `#` art.
///
/// Each glyph row is followed by a single space, including the last glyph
/// on the row.
pub fn render(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut rows = vec![String::new(); ROWS];
    for ch in upper.chars() {
        let glyph = glyph(ch);
        for (row, line) in rows.iter_mut().enumerate() {
            line.push_str(glyph[row]);
            line.push(' ');
        }
    }
    rows.join("\n")
}

/// The 7-row block for a character; unsupported characters map to the
/// space glyph.
fn glyph(ch: char) -> [&'static str; ROWS] {
    match ch {
        'A' => [
            "  ###  ", " #   # ", "#     #", "#######", "#     #", "#     #", "#     #",
        ],
        'B' => [
            "###### ", "#     #", "#     #", "###### ", "#     #", "#     #", "###### ",
        ],
        'C' => [
            " ##### ", "#     #", "#      ", "#      ", "#      ", "#     #", " ##### ",
        ],
        'D' => [
            "###### ", "#     #", "#     #", "#     #", "#     #", "#     #", "###### ",
        ],
        'E' => [
            "#######", "#      ", "#      ", "#####  ", "#      ", "#      ", "#######",
        ],
        'F' => [
            "#######", "#      ", "#      ", "#####  ", "#      ", "#      ", "#      ",
        ],
        'G' => [
            " ##### ", "#     #", "#      ", "#  ####", "#     #", "#     #", " ##### ",
        ],
        'H' => [
            "#     #", "#     #", "#     #", "#######", "#     #", "#     #", "#     #",
        ],
        'I' => ["###", " # ", " # ", " # ", " # ", " # ", "###"],
        'J' => [
            "    ###", "     # ", "     # ", "     # ", "#    # ", "#    # ", " #### ",
        ],
        'K' => [
            "#    #", "#   # ", "#  #  ", "###   ", "#  #  ", "#   # ", "#    #",
        ],
        'L' => [
            "#     ", "#     ", "#     ", "#     ", "#     ", "#     ", "######",
        ],
        'M' => [
            "#     #", "##   ##", "# # # #", "#  #  #", "#     #", "#     #", "#     #",
        ],
        'N' => [
            "#     #", "##    #", "# #   #", "#  #  #", "#   # #", "#    ##", "#     #",
        ],
        'O' => [
            " ##### ", "#     #", "#     #", "#     #", "#     #", "#     #", " ##### ",
        ],
        'P' => [
            "###### ", "#     #", "#     #", "###### ", "#      ", "#      ", "#      ",
        ],
        'Q' => [
            " ##### ", "#     #", "#     #", "#     #", "#   # #", "#    # ", " #### #",
        ],
        'R' => [
            "###### ", "#     #", "#     #", "###### ", "#   #  ", "#    # ", "#     #",
        ],
        'S' => [
            " ##### ", "#     #", "#      ", " ##### ", "      #", "#     #", " ##### ",
        ],
        'T' => [
            "#######", "   #   ", "   #   ", "   #   ", "   #   ", "   #   ", "   #   ",
        ],
        'U' => [
            "#     #", "#     #", "#     #", "#     #", "#     #", "#     #", " ##### ",
        ],
        'V' => [
            "#     #", "#     #", "#     #", "#     #", " #   # ", "  # #  ", "   #   ",
        ],
        'W' => [
            "#     #", "#     #", "#     #", "#  #  #", "# # # #", "##   ##", "#     #",
        ],
        'X' => [
            "#     #", " #   # ", "  # #  ", "   #   ", "  # #  ", " #   # ", "#     #",
        ],
        'Y' => [
            "#     #", " #   # ", "  # #  ", "   #   ", "   #   ", "   #   ", "   #   ",
        ],
        'Z' => [
            "#######", "     # ", "    #  ", "   #   ", "  #    ", " #     ", "#######",
        ],
        '!' => [
            "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "      ", "  #   ",
        ],
        '.' => [
            "     ", "     ", "     ", "     ", "     ", "     ", "  #  ",
        ],
        ',' => [
            "     ", "     ", "     ", "     ", "     ", "  #  ", " #   ",
        ],
        _ => [
            "      ", "      ", "      ", "      ", "      ", "      ", "      ",
        ],
    }
}
