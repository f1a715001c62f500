//! Spelling-preserving diatonic interval engine.
//!
//! Note names are handled as written: `C#` and `Db` are different values and
//! are never collapsed to a pitch class. On top of that the crate offers:
//!
//! - [`parse`] - a token such as `"E♭"` into a [`ParsedNote`]
//! - [`interval_between`] - number and quality from a root to a target
//! - [`transpose`] - the spelling a given interval above a root
//! - [`canonicalize`] - a fixed order for a note set, with exact duplicates removed
//!
//! ```rust
//! use diatonic::{canonicalize, interval_between, transpose};
//!
//! assert_eq!(interval_between("C", "G")?.label, "P5");
//! assert_eq!(transpose("C", "d4".parse()?)?.spelling, "Fb");
//! assert_eq!(canonicalize(["G", "C#", "Bb", "E"]), vec!["C#", "E", "G", "Bb"]);
//! # Ok::<(), diatonic::DiatonicError>(())
//! ```

pub mod api;
pub mod canonical;
pub mod config;
pub mod error;
pub mod interval;
pub mod normalize;
pub mod note;
pub mod parser;
pub mod transpose;

pub use api::{
    analyze, canonicalize_with_policy, interval_profile, transpose_with_policy, IntervalEntry,
    NoteSetReport,
};
pub use canonical::{canonicalize, compare_spellings};
pub use config::{ClampPolicy, EngineConfig, InvalidTokenPolicy};
pub use error::*;
pub use interval::{
    interval_between, interval_between_notes, interval_between_with, Baseline, DegreeClass,
    Interval, IntervalSpec, Quality,
};
pub use normalize::normalize;
pub use note::{Accidental, Letter, ParsedNote};
pub use parser::parse;
pub use transpose::{transpose, transpose_note, transpose_with, Transposed};
