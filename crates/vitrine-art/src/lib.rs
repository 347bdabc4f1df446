//! ASCII art banner glyphs for the vitrine landing page.

/// Height of every banner glyph, in lines.
pub const BANNER_HEIGHT: usize = 7;

/// Letter H
const LETTER_H: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter A
const LETTER_A: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter P
const LETTER_P: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██    ",
    "██    ",
    "██    ",
];

/// Letter Y
const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter O
const LETTER_O: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter L
const LETTER_L: [&str; 7] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter I
const LETTER_I: [&str; 7] = [
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    " ████ ",
];

/// Letter D
const LETTER_D: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter S
const LETTER_S: [&str; 7] = [
    " █████",
    "██    ",
    "██    ",
    " ████ ",
    "    ██",
    "    ██",
    "█████ ",
];

/// Exclamation mark
const BANG: [&str; 7] = ["██", "██", "██", "██", "██", "  ", "██"];

/// Word gap
const SPACE: [&str; 7] = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];

/// Look up the glyph for a character, case-insensitive.
/// Returns `None` for characters the banner font does not cover.
pub fn glyph(c: char) -> Option<[&'static str; 7]> {
    match c.to_ascii_uppercase() {
        'H' => Some(LETTER_H),
        'A' => Some(LETTER_A),
        'P' => Some(LETTER_P),
        'Y' => Some(LETTER_Y),
        'O' => Some(LETTER_O),
        'L' => Some(LETTER_L),
        'I' => Some(LETTER_I),
        'D' => Some(LETTER_D),
        'S' => Some(LETTER_S),
        '!' => Some(BANG),
        ' ' => Some(SPACE),
        _ => None,
    }
}

/// Build a large ASCII art banner for `text`.
///
/// # Returns
/// A vector of 7 strings, each representing one line of the ASCII art.
/// Characters without a glyph are skipped.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<[&str; 7]> = text.chars().filter_map(glyph).collect();

    let mut lines = Vec::with_capacity(BANNER_HEIGHT);
    for row in 0..BANNER_HEIGHT {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(g[row]);
        }
        lines.push(line);
    }

    lines
}
