//! Unicode accidental folding.
//!
//! User-entered spellings may arrive with music glyphs (`B♭`, `F♯`, `E𝄫`) or
//! typographic dashes. This is the one place they are mapped to ASCII; the
//! parser only ever sees the folded form.

/// Fold accidental glyphs and dash variants to ASCII and trim surrounding whitespace.
///
/// ```
/// use diatonic::normalize;
///
/// assert_eq!(normalize("B♭"), "Bb");
/// assert_eq!(normalize(" F𝄪 "), "F##");
/// assert_eq!(normalize("C#"), "C#");
/// ```
pub fn normalize(token: &str) -> String {
    let trimmed = token.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '♭' => out.push('b'),
            '♯' => out.push('#'),
            '𝄫' => out.push_str("bb"),
            '𝄪' => out.push_str("##"),
            // em dash, en dash, minus sign
            '\u{2014}' | '\u{2013}' | '\u{2212}' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}
