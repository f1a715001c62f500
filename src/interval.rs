//! # Diatonic Interval Calculator
//!
//! Computes the interval from a root spelling to a target spelling.
//!
//! ## Algorithm
//! 1. **Number** counts letters only: `((ordinal(target) - ordinal(root)) mod 7) + 1`.
//!    `C`→`G#` and `C`→`Gb` are both 5ths; `C#`→`Db` is a 2nd.
//! 2. **Reference span**: semitones expected for that number (see [`Baseline`]).
//! 3. **Actual span**: semitones from root to target, mod 12.
//! 4. **Difference** = actual - reference, folded into `-6..=6`.
//! 5. **Quality** from the degree class of the number and the difference:
//!
//! ```text
//! difference   -3   -2   -1    0   +1   +2
//! perfect      dd*  dd   d     P   A    AA
//! imperfect    dd   d    m     M   A    AA
//! ```
//!    Differences past the ends of a row saturate to the doubled form of the
//!    same sign and set [`Interval::clamped`] (`*` marks the first clamped cell).
//!
//! ## Direction
//! The calculation is root→target. Swapping the arguments does not give the
//! inversion of the interval; call again with the arguments swapped and read
//! that result on its own terms.

use crate::error::DiatonicError;
use crate::note::{Letter, ParsedNote};
use crate::parser::parse;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Semitone spans of the major scale degrees 1-7
const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Interval numbers whose natural quality is Perfect (1, 4, 5) or Major/minor (2, 3, 6, 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeClass {
    Perfect,
    Imperfect,
}

impl DegreeClass {
    /// Class of an interval number, with compound numbers reduced (8→1, 11→4, 12→5)
    pub fn of(number: u8) -> DegreeClass {
        match simple_number(number) {
            1 | 4 | 5 => DegreeClass::Perfect,
            _ => DegreeClass::Imperfect,
        }
    }
}

/// What the difference in step 4 is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Baseline {
    /// Span between the two natural letters (`D`→`F` counts 3 semitones as the
    /// unaltered third). Quality is relative to the natural letters, so roots
    /// other than C read differently from textbook labels: `D`→`F` is `M3`.
    #[default]
    NaturalLetters,
    /// Major/perfect span above the root for the number (a 3rd is always 4
    /// semitones). `D`→`F` is `m3`, `D`→`F#` is `M3`.
    MajorScale,
}

/// Interval quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    DoublyDiminished,
    Diminished,
    Minor,
    Perfect,
    Major,
    Augmented,
    DoublyAugmented,
}

impl Quality {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Quality::DoublyDiminished => "dd",
            Quality::Diminished => "d",
            Quality::Minor => "m",
            Quality::Perfect => "P",
            Quality::Major => "M",
            Quality::Augmented => "A",
            Quality::DoublyAugmented => "AA",
        }
    }

    pub fn from_abbreviation(s: &str) -> Option<Quality> {
        match s {
            "dd" => Some(Quality::DoublyDiminished),
            "d" => Some(Quality::Diminished),
            "m" => Some(Quality::Minor),
            "P" => Some(Quality::Perfect),
            "M" => Some(Quality::Major),
            "A" => Some(Quality::Augmented),
            "AA" => Some(Quality::DoublyAugmented),
            _ => None,
        }
    }

    /// Semitone offset from the class baseline, or `None` when the quality does
    /// not exist for that class (Major/minor 5th, Perfect 3rd).
    pub fn offset(self, class: DegreeClass) -> Option<i32> {
        match (class, self) {
            (DegreeClass::Perfect, Quality::DoublyDiminished) => Some(-2),
            (DegreeClass::Perfect, Quality::Diminished) => Some(-1),
            (DegreeClass::Perfect, Quality::Perfect) => Some(0),
            (DegreeClass::Perfect, Quality::Augmented) => Some(1),
            (DegreeClass::Perfect, Quality::DoublyAugmented) => Some(2),
            (DegreeClass::Perfect, Quality::Major | Quality::Minor) => None,

            (DegreeClass::Imperfect, Quality::DoublyDiminished) => Some(-3),
            (DegreeClass::Imperfect, Quality::Diminished) => Some(-2),
            (DegreeClass::Imperfect, Quality::Minor) => Some(-1),
            (DegreeClass::Imperfect, Quality::Major) => Some(0),
            (DegreeClass::Imperfect, Quality::Augmented) => Some(1),
            (DegreeClass::Imperfect, Quality::DoublyAugmented) => Some(2),
            (DegreeClass::Imperfect, Quality::Perfect) => None,
        }
    }

    /// Quality for a folded difference. The flag is `true` when the difference
    /// was past the end of the table and saturated to a doubled form.
    pub fn from_offset(class: DegreeClass, difference: i32) -> (Quality, bool) {
        let (lowest, highest) = match class {
            DegreeClass::Perfect => (-2, 2),
            DegreeClass::Imperfect => (-3, 2),
        };
        let clamped = difference.clamp(lowest, highest);
        let quality = match (class, clamped) {
            (DegreeClass::Perfect, 0) => Quality::Perfect,
            (DegreeClass::Perfect, -1) => Quality::Diminished,
            (DegreeClass::Perfect, _) if clamped < 0 => Quality::DoublyDiminished,
            (DegreeClass::Imperfect, 0) => Quality::Major,
            (DegreeClass::Imperfect, -1) => Quality::Minor,
            (DegreeClass::Imperfect, -2) => Quality::Diminished,
            (DegreeClass::Imperfect, _) if clamped < 0 => Quality::DoublyDiminished,
            (_, 1) => Quality::Augmented,
            _ => Quality::DoublyAugmented,
        };
        (quality, clamped != difference)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// An interval described without notes, e.g. "diminished 4th".
///
/// ```
/// use diatonic::{IntervalSpec, Quality};
///
/// let spec: IntervalSpec = "d4".parse()?;
/// assert_eq!(spec.number(), 4);
/// assert_eq!(spec.quality(), Quality::Diminished);
/// assert!("M5".parse::<IntervalSpec>().is_err());
/// # Ok::<(), diatonic::DiatonicError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntervalSpec {
    number: u8,
    quality: Quality,
}

impl IntervalSpec {
    /// Build a spec, rejecting number 0 and qualities that do not exist for the
    /// number's degree class.
    pub fn new(number: u8, quality: Quality) -> Result<Self, DiatonicError> {
        if number == 0 {
            return Err(DiatonicError::InvalidInterval(
                "interval numbers start at 1 (unison)".to_string(),
            ));
        }
        if quality.offset(DegreeClass::of(number)).is_none() {
            return Err(DiatonicError::InvalidInterval(format!(
                "{}{}: {:?} does not apply to a {}",
                quality,
                number,
                quality,
                ordinal_name(number)
            )));
        }
        Ok(Self { number, quality })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn degree_class(&self) -> DegreeClass {
        DegreeClass::of(self.number)
    }

    /// Offset from the class baseline; always defined because `new` validated the pairing
    pub(crate) fn offset(&self) -> i32 {
        self.quality.offset(self.degree_class()).unwrap_or(0)
    }
}

impl FromStr for IntervalSpec {
    type Err = DiatonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| DiatonicError::InvalidInterval(format!("'{}' has no number", s)))?;
        let (quality_str, number_str) = trimmed.split_at(split);
        let quality = Quality::from_abbreviation(quality_str).ok_or_else(|| {
            DiatonicError::InvalidInterval(format!("unknown quality '{}' in '{}'", quality_str, s))
        })?;
        let number: u8 = number_str.parse().map_err(|_| {
            DiatonicError::InvalidInterval(format!("invalid number '{}' in '{}'", number_str, s))
        })?;
        IntervalSpec::new(number, quality)
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.number)
    }
}

/// Interval between two spelled notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Diatonic number, 1-7
    pub number: u8,
    pub quality: Quality,
    /// Semitones from root up to target, 0-11
    pub semitones: u8,
    /// Quality abbreviation followed by the number, e.g. `"P5"`
    pub label: String,
    /// The quality saturated at a doubled form; the label understates the real difference
    pub clamped: bool,
}

impl Interval {
    /// The note-free part of this interval
    pub fn spec(&self) -> IntervalSpec {
        IntervalSpec {
            number: self.number,
            quality: self.quality,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Interval from `root` up to `target`, measured against the natural letters.
///
/// Directional: `interval_between("C", "G")` is `P5`, while
/// `interval_between("G", "C")` is `P4`.
///
/// ```
/// use diatonic::{interval_between, Quality};
///
/// let interval = interval_between("C", "Fb")?;
/// assert_eq!(interval.number, 4);
/// assert_eq!(interval.quality, Quality::Diminished);
/// assert_eq!(interval.label, "d4");
/// # Ok::<(), diatonic::DiatonicError>(())
/// ```
pub fn interval_between(root: &str, target: &str) -> Result<Interval, DiatonicError> {
    interval_between_with(root, target, Baseline::NaturalLetters)
}

/// [`interval_between`] with an explicit [`Baseline`]
pub fn interval_between_with(
    root: &str,
    target: &str,
    baseline: Baseline,
) -> Result<Interval, DiatonicError> {
    let root = parse(root)?;
    let target = parse(target)?;
    Ok(interval_between_notes(&root, &target, baseline))
}

/// Interval between two already-parsed notes. Total: never fails.
pub fn interval_between_notes(root: &ParsedNote, target: &ParsedNote, baseline: Baseline) -> Interval {
    let steps = letter_steps(root.letter(), target.letter());
    let number = steps as u8 + 1;
    let expected = reference_span(root.letter(), target.letter(), baseline);
    let actual = (target.semitone() - root.semitone()).rem_euclid(12);
    let difference = fold(actual - expected);

    let (quality, clamped) = Quality::from_offset(DegreeClass::of(number), difference);
    let semitones = (expected + difference).rem_euclid(12) as u8;

    Interval {
        number,
        quality,
        semitones,
        label: format!("{}{}", quality, number),
        clamped,
    }
}

/// Letters from `root` up to `target`, 0-6
pub(crate) fn letter_steps(root: Letter, target: Letter) -> i32 {
    (target.ordinal() as i32 - root.ordinal() as i32).rem_euclid(7)
}

/// Semitones the unaltered interval from `root` to `target` spans, 0-11
pub(crate) fn reference_span(root: Letter, target: Letter, baseline: Baseline) -> i32 {
    match baseline {
        Baseline::NaturalLetters => {
            (target.natural_semitone() - root.natural_semitone()).rem_euclid(12)
        }
        Baseline::MajorScale => MAJOR_SCALE[letter_steps(root, target) as usize],
    }
}

/// Fold a semitone difference into -6..=6
pub(crate) fn fold(difference: i32) -> i32 {
    if difference > 6 {
        difference - 12
    } else if difference < -6 {
        difference + 12
    } else {
        difference
    }
}

/// Reduce compound numbers to 1-7 (8→1, 9→2)
fn simple_number(number: u8) -> u8 {
    (number.saturating_sub(1)) % 7 + 1
}

fn ordinal_name(number: u8) -> String {
    let suffix = match (number % 10, number % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fifth() {
        let interval = interval_between("C", "G").unwrap();
        assert_eq!(interval.number, 5);
        assert_eq!(interval.quality, Quality::Perfect);
        assert_eq!(interval.semitones, 7);
        assert_eq!(interval.label, "P5");
        assert!(!interval.clamped);
    }

    #[test]
    fn test_diminished_fourth() {
        let interval = interval_between("C", "Fb").unwrap();
        assert_eq!(interval.label, "d4");
        assert_eq!(interval.semitones, 4);
    }

    #[test]
    fn test_doubly_augmented_unison() {
        let interval = interval_between("C", "C##").unwrap();
        assert_eq!(interval.number, 1);
        assert_eq!(interval.quality, Quality::DoublyAugmented);
        assert_eq!(interval.semitones, 2);
    }

    #[test]
    fn test_number_ignores_accidentals() {
        assert_eq!(interval_between("C", "G#").unwrap().number, 5);
        assert_eq!(interval_between("C", "Gb").unwrap().number, 5);
        assert_eq!(interval_between("C#", "Db").unwrap().number, 2);
        assert_eq!(interval_between("B", "C").unwrap().number, 2);
    }

    #[test]
    fn test_imperfect_qualities_above_c() {
        assert_eq!(interval_between("C", "E").unwrap().label, "M3");
        assert_eq!(interval_between("C", "Eb").unwrap().label, "m3");
        assert_eq!(interval_between("C", "Ebb").unwrap().label, "d3");
        assert_eq!(interval_between("C", "E#").unwrap().label, "A3");
        assert_eq!(interval_between("C", "Bb").unwrap().label, "m7");
        assert_eq!(interval_between("C", "A").unwrap().label, "M6");
    }

    #[test]
    fn test_direction_matters() {
        assert_eq!(interval_between("C", "G").unwrap().label, "P5");
        assert_eq!(interval_between("G", "C").unwrap().label, "P4");
    }

    #[test]
    fn test_root_accidental_shifts_quality() {
        // Cb up to G: one semitone wider than the natural fifth
        assert_eq!(interval_between("Cb", "G").unwrap().label, "A5");
        assert_eq!(interval_between("C#", "G").unwrap().label, "d5");
    }

    #[test]
    fn test_saturation_sets_clamped() {
        // Cbb to G## differs by +4 from the natural fifth
        let interval = interval_between("Cbb", "G##").unwrap();
        assert_eq!(interval.quality, Quality::DoublyAugmented);
        assert!(interval.clamped);
        assert_eq!(interval.semitones, 11);

        let interval = interval_between("C##", "Gbb").unwrap();
        assert_eq!(interval.quality, Quality::DoublyDiminished);
        assert!(interval.clamped);
        assert_eq!(interval.semitones, 3);

        // -3 is still in the imperfect table
        let interval = interval_between("C#", "Ebb").unwrap();
        assert_eq!(interval.quality, Quality::DoublyDiminished);
        assert!(!interval.clamped);
    }

    #[test]
    fn test_baselines_agree_on_c_root() {
        for target in ["C", "D", "Eb", "F#", "G", "Ab", "B"] {
            assert_eq!(
                interval_between_with("C", target, Baseline::NaturalLetters).unwrap(),
                interval_between_with("C", target, Baseline::MajorScale).unwrap(),
            );
        }
    }

    #[test]
    fn test_major_scale_baseline() {
        let major = |root, target| interval_between_with(root, target, Baseline::MajorScale).unwrap().label;
        assert_eq!(major("D", "F#"), "M3");
        assert_eq!(major("D", "F"), "m3");
        assert_eq!(major("B", "F"), "d5");
        assert_eq!(major("G", "F"), "m7");
        assert_eq!(major("E", "B"), "P5");

        let natural = |root, target| interval_between(root, target).unwrap().label;
        assert_eq!(natural("D", "F"), "M3");
        assert_eq!(natural("B", "F"), "P5");
    }

    #[test]
    fn test_ranges_hold_for_every_spelling() {
        let spellings: Vec<String> = Letter::ALL
            .iter()
            .flat_map(|l| ["bb", "b", "", "#", "##"].map(|a| format!("{}{}", l, a)))
            .collect();
        for root in &spellings {
            for target in &spellings {
                for baseline in [Baseline::NaturalLetters, Baseline::MajorScale] {
                    let interval = interval_between_with(root, target, baseline).unwrap();
                    assert!((1..=7).contains(&interval.number));
                    assert!(interval.semitones <= 11);
                }
            }
        }
    }

    #[test]
    fn test_invalid_spelling_propagates() {
        assert!(matches!(
            interval_between("C", "X"),
            Err(DiatonicError::InvalidSpelling { .. })
        ));
        assert!(matches!(
            interval_between("", "C"),
            Err(DiatonicError::InvalidSpelling { .. })
        ));
    }

    #[test]
    fn test_degree_classes() {
        for n in [1, 4, 5, 8, 11, 12, 15] {
            assert_eq!(DegreeClass::of(n), DegreeClass::Perfect, "number {}", n);
        }
        for n in [2, 3, 6, 7, 9, 10, 13, 14] {
            assert_eq!(DegreeClass::of(n), DegreeClass::Imperfect, "number {}", n);
        }
    }

    #[test]
    fn test_offset_and_from_offset_agree() {
        let all = [
            Quality::DoublyDiminished,
            Quality::Diminished,
            Quality::Minor,
            Quality::Perfect,
            Quality::Major,
            Quality::Augmented,
            Quality::DoublyAugmented,
        ];
        for class in [DegreeClass::Perfect, DegreeClass::Imperfect] {
            for quality in all {
                if let Some(offset) = quality.offset(class) {
                    assert_eq!(Quality::from_offset(class, offset), (quality, false));
                }
            }
        }
    }

    #[test]
    fn test_interval_spec_labels() {
        let spec: IntervalSpec = "AA4".parse().unwrap();
        assert_eq!(spec.quality(), Quality::DoublyAugmented);
        assert_eq!(spec.to_string(), "AA4");

        let spec: IntervalSpec = "M9".parse().unwrap();
        assert_eq!(spec.number(), 9);
        assert_eq!(spec.degree_class(), DegreeClass::Imperfect);

        assert!("P3".parse::<IntervalSpec>().is_err());
        assert!("m4".parse::<IntervalSpec>().is_err());
        assert!("P0".parse::<IntervalSpec>().is_err());
        assert!("X5".parse::<IntervalSpec>().is_err());
        assert!("P".parse::<IntervalSpec>().is_err());
        assert!("P5x".parse::<IntervalSpec>().is_err());
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold(7), -5);
        assert_eq!(fold(-7), 5);
        assert_eq!(fold(6), 6);
        assert_eq!(fold(-6), -6);
        assert_eq!(fold(0), 0);
    }
}
