//! # Spelling Parser
//!
//! Turns a raw token into a [`ParsedNote`].
//!
//! ## Grammar
//! ```text
//! spelling   := letter accidental?
//! letter     := [A-Ga-g]
//! accidental := "bb" | "b" | "##" | "#"
//! ```
//!
//! Tokens are passed through [`normalize`](crate::normalize) first, so `B♭`
//! and `Bb` parse identically. Anything outside the grammar is rejected; the
//! parser never guesses (`"Cbbb"`, `"H"`, `"C-"` and `""` all fail).
//!
//! ## Example
//! ```rust
//! use diatonic::{parse, Accidental, Letter};
//!
//! let note = parse("e♭")?;
//! assert_eq!(note.letter(), Letter::E);
//! assert_eq!(note.accidental(), Accidental::Flat);
//! assert_eq!(note.spelling(), "Eb");
//! # Ok::<(), diatonic::DiatonicError>(())
//! ```

use crate::error::DiatonicError;
use crate::normalize::normalize;
use crate::note::{Accidental, Letter, ParsedNote};

/// Parse a single note spelling
pub fn parse(token: &str) -> Result<ParsedNote, DiatonicError> {
    let normalized = normalize(token);
    let invalid = |reason: String| DiatonicError::InvalidSpelling {
        token: token.to_string(),
        reason,
    };

    let mut chars = normalized.chars();
    let first = chars
        .next()
        .ok_or_else(|| invalid("empty token".to_string()))?;
    let letter =
        Letter::from_char(first).ok_or_else(|| invalid(format!("unknown letter '{}'", first)))?;

    // Exact match on the remainder: the double forms can never be read as a
    // single accidental followed by junk.
    let accidental = match chars.as_str() {
        "" => Accidental::Natural,
        "bb" => Accidental::DoubleFlat,
        "b" => Accidental::Flat,
        "##" => Accidental::DoubleSharp,
        "#" => Accidental::Sharp,
        rest => return Err(invalid(format!("unexpected accidental '{}'", rest))),
    };

    Ok(ParsedNote::new(letter, accidental))
}
