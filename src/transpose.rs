//! # Spelling Transposer
//!
//! Builds the spelling that lies a given interval above a root. This is the
//! inverse of [`interval_between`](crate::interval_between) and uses the same
//! degree-class and quality tables.
//!
//! ## Algorithm
//! 1. Target letter: `number - 1` letters above the root (compound numbers wrap).
//! 2. Reference span between the root letter and the target letter.
//! 3. Quality offset from the class baseline (`A` on a 5th is +1, `m` on a 3rd is -1).
//! 4. Target pitch = root pitch + span + offset; the accidental is whatever
//!    turns the natural target letter into that pitch, folded into `-6..=6`
//!    and clamped to double flat..double sharp.
//!
//! Clamping never fails here. [`Transposed::clamped`] reports when it
//! happened; [`transpose_with_policy`](crate::transpose_with_policy) turns it
//! into an error instead.

use crate::error::DiatonicError;
use crate::interval::{fold, reference_span, Baseline, IntervalSpec};
use crate::note::{Accidental, Letter, ParsedNote};
use crate::parser::parse;
use serde::Serialize;

/// Result of a transposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transposed {
    /// Canonical spelling of the target, e.g. `"Fb"`
    pub spelling: String,
    pub note: ParsedNote,
    /// The exact target needed more than a double accidental; `spelling` is the nearest one
    pub clamped: bool,
}

/// Spell the note `spec` above `root`, measuring against the natural letters.
///
/// ```
/// use diatonic::{transpose, IntervalSpec, Quality};
///
/// let spec = IntervalSpec::new(4, Quality::Diminished)?;
/// let target = transpose("C", spec)?;
/// assert_eq!(target.spelling, "Fb");
/// assert!(!target.clamped);
/// # Ok::<(), diatonic::DiatonicError>(())
/// ```
pub fn transpose(root: &str, spec: IntervalSpec) -> Result<Transposed, DiatonicError> {
    transpose_with(root, spec, Baseline::NaturalLetters)
}

/// [`transpose`] with an explicit [`Baseline`]
pub fn transpose_with(
    root: &str,
    spec: IntervalSpec,
    baseline: Baseline,
) -> Result<Transposed, DiatonicError> {
    let root = parse(root)?;
    Ok(transpose_note(&root, spec, baseline))
}

/// Transpose an already-parsed root. Total: never fails.
pub fn transpose_note(root: &ParsedNote, spec: IntervalSpec, baseline: Baseline) -> Transposed {
    let letter = Letter::from_ordinal(root.letter().ordinal() as i32 + spec.number() as i32 - 1);
    let expected = reference_span(root.letter(), letter, baseline);
    let target_pitch = root.semitone() + expected + spec.offset();
    let delta = fold((target_pitch - letter.natural_semitone()).rem_euclid(12));

    let (accidental, clamped) = Accidental::saturating_from_delta(delta);
    if clamped {
        tracing::debug!(
            root = %root,
            interval = %spec,
            delta,
            "accidental clamped to {:?}",
            accidental
        );
    }

    let note = ParsedNote::new(letter, accidental);
    Transposed {
        spelling: note.spelling().to_string(),
        note,
        clamped,
    }
}
