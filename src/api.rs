//! # Public API
//!
//! Policy-aware entry points built on the four core operations.
//!
//! The core functions ([`interval_between`](crate::interval_between),
//! [`transpose`](crate::transpose), [`canonicalize`](crate::canonicalize)) are
//! total apart from spelling errors and never consult configuration. The
//! functions here apply an [`EngineConfig`]:
//!
//! - [`transpose_with_policy()`] - transposition honoring `clamp-policy` and `baseline`
//! - [`canonicalize_with_policy()`] - note-set ordering honoring `invalid-tokens`
//! - [`interval_profile()`] - interval from one root to every note of a set
//! - [`analyze()`] - canonical note set plus its interval profile, ready to serialize
//!
//! ## Typical Usage
//!
//! ```rust
//! use diatonic::{analyze, EngineConfig};
//!
//! let config = EngineConfig::default();
//! let report = analyze(["G", "E♭", "C", "g"], Some("C"), &config)?;
//!
//! assert_eq!(report.notes, vec!["C", "Eb", "G"]);
//! let labels: Vec<&str> = report.intervals.iter().map(|e| e.interval.label.as_str()).collect();
//! assert_eq!(labels, vec!["P1", "m3", "P5"]);
//! # Ok::<(), diatonic::DiatonicError>(())
//! ```

use crate::canonical::canonicalize;
use crate::config::{ClampPolicy, EngineConfig, InvalidTokenPolicy};
use crate::error::DiatonicError;
use crate::interval::{interval_between_notes, Baseline, Interval, IntervalSpec};
use crate::note::ParsedNote;
use crate::parser::parse;
use crate::transpose::{transpose_note, Transposed};
use serde::Serialize;

/// One note of a set with its interval above the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalEntry {
    pub note: String,
    pub interval: Interval,
}

/// Canonical view of a note set, as handed to prompt construction.
///
/// # Fields
/// - `notes`: canonical, deduplicated spellings (unparsed tokens last under `keep`)
/// - `invalid`: tokens that failed to parse, normalized, in canonical order
/// - `root`: canonical spelling of the analysis root, if one was given
/// - `intervals`: root→note interval for every parsed note in `notes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSetReport {
    pub notes: Vec<String>,
    pub invalid: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub intervals: Vec<IntervalEntry>,
}

/// Transpose `root` by `spec`, applying the configured baseline and clamp policy.
///
/// # Errors
/// - [`DiatonicError::InvalidSpelling`] if `root` does not parse
/// - [`DiatonicError::Clamped`] if the result was clamped and the policy is `reject`
///
/// ```
/// use diatonic::{transpose_with_policy, ClampPolicy, DiatonicError, EngineConfig};
///
/// let config = EngineConfig { clamp_policy: ClampPolicy::Reject, ..Default::default() };
/// let result = transpose_with_policy("C##", "AA1".parse()?, &config);
/// assert!(matches!(result, Err(DiatonicError::Clamped { .. })));
/// # Ok::<(), diatonic::DiatonicError>(())
/// ```
pub fn transpose_with_policy(
    root: &str,
    spec: IntervalSpec,
    config: &EngineConfig,
) -> Result<Transposed, DiatonicError> {
    let parsed = parse(root)?;
    let transposed = transpose_note(&parsed, spec, config.baseline);
    if transposed.clamped && config.clamp_policy == ClampPolicy::Reject {
        return Err(DiatonicError::Clamped {
            root: parsed.spelling().to_string(),
            interval: spec.to_string(),
            spelling: transposed.spelling,
        });
    }
    Ok(transposed)
}

/// Canonicalize `tokens`, applying the configured invalid-token policy.
///
/// # Errors
/// [`DiatonicError::InvalidSpelling`] for the first unparseable token (in
/// input order) when the policy is `reject`.
pub fn canonicalize_with_policy<I, S>(
    tokens: I,
    config: &EngineConfig,
) -> Result<Vec<String>, DiatonicError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    match config.invalid_tokens {
        InvalidTokenPolicy::Keep => Ok(canonicalize(&tokens)),
        InvalidTokenPolicy::Drop => {
            let valid = tokens.iter().map(|t| t.as_ref()).filter(|token| match parse(token) {
                Ok(_) => true,
                Err(e) => {
                    tracing::debug!("dropping token: {}", e);
                    false
                }
            });
            Ok(canonicalize(valid))
        }
        InvalidTokenPolicy::Reject => {
            for token in &tokens {
                parse(token.as_ref())?;
            }
            Ok(canonicalize(&tokens))
        }
    }
}

/// Interval from `root` to each of `notes`, in the order given.
///
/// # Errors
/// [`DiatonicError::InvalidSpelling`] if the root or any note does not parse.
pub fn interval_profile<I, S>(
    root: &str,
    notes: I,
    baseline: Baseline,
) -> Result<Vec<IntervalEntry>, DiatonicError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = parse(root)?;
    notes
        .into_iter()
        .map(|note| {
            let note = parse(note.as_ref())?;
            Ok::<_, DiatonicError>(entry(&root, &note, baseline))
        })
        .collect()
}

/// Canonicalize a note set and, when a root is known, profile it.
///
/// `root` overrides the configured default root. The root does not have to be
/// one of the notes.
pub fn analyze<I, S>(
    tokens: I,
    root: Option<&str>,
    config: &EngineConfig,
) -> Result<NoteSetReport, DiatonicError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let notes = canonicalize_with_policy(tokens, config)?;
    let root = match root.or(config.root.as_deref()) {
        Some(root) => Some(parse(root)?),
        None => None,
    };

    let mut invalid = Vec::new();
    let mut intervals = Vec::new();
    for spelling in &notes {
        match parse(spelling) {
            Ok(note) => {
                if let Some(root) = &root {
                    intervals.push(entry(root, &note, config.baseline));
                }
            }
            Err(_) => invalid.push(spelling.clone()),
        }
    }

    tracing::debug!(
        notes = notes.len(),
        invalid = invalid.len(),
        "analyzed note set"
    );

    Ok(NoteSetReport {
        notes,
        invalid,
        root: root.map(|r| r.spelling().to_string()),
        intervals,
    })
}

fn entry(root: &ParsedNote, note: &ParsedNote, baseline: Baseline) -> IntervalEntry {
    IntervalEntry {
        note: note.spelling().to_string(),
        interval: interval_between_notes(root, note, baseline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> EngineConfig {
        EngineConfig::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_transpose_clamp_policy() {
        let spec: IntervalSpec = "AA1".parse().unwrap();

        let clamped = transpose_with_policy("C##", spec, &EngineConfig::default()).unwrap();
        assert!(clamped.clamped);
        assert_eq!(clamped.spelling, "C##");

        match transpose_with_policy("C##", spec, &config("clamp-policy: reject")) {
            Err(DiatonicError::Clamped { root, interval, spelling }) => {
                assert_eq!(root, "C##");
                assert_eq!(interval, "AA1");
                assert_eq!(spelling, "C##");
            }
            other => panic!("expected Clamped, got {:?}", other),
        }

        // Non-clamped results pass under reject
        let ok = transpose_with_policy("C", "P5".parse().unwrap(), &config("clamp-policy: reject"));
        assert_eq!(ok.unwrap().spelling, "G");
    }

    #[test]
    fn test_transpose_uses_configured_baseline() {
        let major = config("baseline: major-scale");
        let spec: IntervalSpec = "M3".parse().unwrap();
        assert_eq!(transpose_with_policy("D", spec, &major).unwrap().spelling, "F#");
        assert_eq!(
            transpose_with_policy("D", spec, &EngineConfig::default()).unwrap().spelling,
            "F"
        );
    }

    #[test]
    fn test_invalid_token_policies() {
        let tokens = ["E", "??", "C", "H"];

        let kept = canonicalize_with_policy(tokens, &EngineConfig::default()).unwrap();
        assert_eq!(kept, vec!["C", "E", "??", "H"]);

        let dropped = canonicalize_with_policy(tokens, &config("invalid-tokens: drop")).unwrap();
        assert_eq!(dropped, vec!["C", "E"]);

        match canonicalize_with_policy(tokens, &config("invalid-tokens: reject")) {
            Err(DiatonicError::InvalidSpelling { token, .. }) => assert_eq!(token, "??"),
            other => panic!("expected InvalidSpelling, got {:?}", other),
        }
    }

    #[test]
    fn test_interval_profile_keeps_input_order() {
        let profile = interval_profile("C", ["G", "E", "Bb"], Baseline::NaturalLetters).unwrap();
        let labels: Vec<&str> = profile.iter().map(|e| e.interval.label.as_str()).collect();
        assert_eq!(labels, vec!["P5", "M3", "m7"]);
        assert_eq!(profile[2].note, "Bb");

        assert!(interval_profile("C", ["G", "X"], Baseline::NaturalLetters).is_err());
        assert!(interval_profile("X", ["G"], Baseline::NaturalLetters).is_err());
    }

    #[test]
    fn test_analyze_without_root() {
        let report = analyze(["Db", "C#", "c#", "?"], None, &EngineConfig::default()).unwrap();
        assert_eq!(report.notes, vec!["C#", "Db", "?"]);
        assert_eq!(report.invalid, vec!["?"]);
        assert!(report.root.is_none());
        assert!(report.intervals.is_empty());
    }

    #[test]
    fn test_analyze_uses_configured_root() {
        let report = analyze(["A", "C#", "E"], None, &config("root: c")).unwrap();
        assert_eq!(report.root.as_deref(), Some("C"));
        let labels: Vec<&str> = report.intervals.iter().map(|e| e.interval.label.as_str()).collect();
        assert_eq!(labels, vec!["A1", "M3", "M6"]);

        // Explicit root wins over the configured one
        let report = analyze(
            ["A", "C#", "E"],
            Some("A"),
            &config("root: c\nbaseline: major-scale"),
        )
        .unwrap();
        assert_eq!(report.root.as_deref(), Some("A"));
        let labels: Vec<&str> = report.intervals.iter().map(|e| e.interval.label.as_str()).collect();
        assert_eq!(labels, vec!["M3", "P5", "P1"]);
    }

    #[test]
    fn test_analyze_rejects_bad_root() {
        assert!(matches!(
            analyze(["C"], Some("Z"), &EngineConfig::default()),
            Err(DiatonicError::InvalidSpelling { .. })
        ));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = analyze(["C", "G"], Some("C"), &EngineConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["notes"], serde_json::json!(["C", "G"]));
        assert_eq!(json["root"], "C");
        assert_eq!(json["intervals"][1]["interval"]["label"], "P5");
        assert_eq!(json["intervals"][1]["interval"]["quality"], "perfect");
        assert_eq!(json["intervals"][1]["interval"]["semitones"], 7);
    }
}
