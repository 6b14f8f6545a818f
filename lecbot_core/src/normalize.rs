//! Text normalization applied to every inbound message before matching.

/// Normalize a raw chat message.
///
/// Lowercases, maps Arabic-Indic and Extended Arabic-Indic digits to ASCII,
/// collapses whitespace runs to a single space and trims both ends.
/// Applying it twice yields the same string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(ascii_digit).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a localized digit glyph to its ASCII equivalent; other chars pass through.
const fn ascii_digit(c: char) -> char {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return c,
    };
    match char::from_digit(offset, 10) {
        Some(d) => d,
        None => c,
    }
}
