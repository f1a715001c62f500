//! # Note Spelling Types
//!
//! Value types for a spelled note: a [`Letter`] plus an [`Accidental`].
//!
//! ## Key Concepts
//!
//! ### Spelling, not pitch
//! `C#` and `Db` sound the same but are different values here. Nothing in this
//! crate maps a spelling to a pitch class and back, so enharmonic spellings are
//! never unified.
//!
//! ### Letter ordinals
//! Letters are numbered `C=0 … B=6`. Diatonic numbers are counted on these
//! ordinals only, ignoring accidentals.
//!
//! ### Accidental range
//! Only double flat through double sharp exist. Arithmetic that would need a
//! triple accidental clamps to the nearest representable one and reports it.

use serde::Serialize;
use std::fmt;

/// Natural letter names in ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the cycle C=0 … B=6
    pub fn ordinal(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Letter at `ordinal`, wrapping every 7 steps
    pub fn from_ordinal(ordinal: i32) -> Letter {
        Letter::ALL[ordinal.rem_euclid(7) as usize]
    }

    /// Semitones above C of the natural (unaltered) letter
    pub fn natural_semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Case-insensitive letter lookup
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The five representable accidentals.
///
/// Declaration order is the canonical sort order, so the derived `Ord`
/// gives double flat < flat < natural < sharp < double sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Signed semitone offset from the natural letter
    pub fn delta(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// ASCII symbol as written after the letter (empty for natural)
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    pub fn from_delta(delta: i32) -> Option<Accidental> {
        match delta {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Nearest representable accidental for `delta`.
    ///
    /// The flag is `true` when `delta` was outside `-2..=2` and had to be clamped.
    ///
    /// ```
    /// use diatonic::Accidental;
    ///
    /// assert_eq!(Accidental::saturating_from_delta(1), (Accidental::Sharp, false));
    /// assert_eq!(Accidental::saturating_from_delta(-3), (Accidental::DoubleFlat, true));
    /// ```
    pub fn saturating_from_delta(delta: i32) -> (Accidental, bool) {
        let clamped = delta.clamp(-2, 2);
        // clamp(-2, 2) keeps us inside the table
        let accidental = Accidental::from_delta(clamped).unwrap_or_default();
        (accidental, clamped != delta)
    }
}

/// A successfully parsed note spelling.
///
/// Only the parser (and the transposer, which builds spellings from letters and
/// accidentals it already validated) constructs these. The canonical spelling
/// re-parses to an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNote {
    letter: Letter,
    accidental: Accidental,
    accidental_delta: i32,
    spelling: String,
}

impl ParsedNote {
    pub(crate) fn new(letter: Letter, accidental: Accidental) -> Self {
        let spelling = format!("{}{}", letter, accidental.symbol());
        Self {
            letter,
            accidental,
            accidental_delta: accidental.delta(),
            spelling,
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn accidental_delta(&self) -> i32 {
        self.accidental_delta
    }

    /// Canonical ASCII spelling, e.g. `"Bb"` or `"F##"`
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Semitones above C, reduced to 0..12. Only used for interval arithmetic.
    pub(crate) fn semitone(&self) -> i32 {
        (self.letter.natural_semitone() + self.accidental_delta).rem_euclid(12)
    }
}

impl fmt::Display for ParsedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}
