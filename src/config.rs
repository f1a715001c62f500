//! # Engine Configuration
//!
//! Optional YAML settings for the policy choices the engine leaves to callers.
//!
//! ```yaml
//! clamp-policy: reject      # clamp (default) | reject
//! invalid-tokens: drop      # keep (default) | drop | reject
//! baseline: major-scale     # natural-letters (default) | major-scale
//! root: Eb                  # default root for note-set analysis
//! ```
//!
//! Every key is optional; an empty document gives [`EngineConfig::default`].

use crate::error::DiatonicError;
use crate::interval::Baseline;
use crate::parser::parse;
use serde::Deserialize;
use std::path::Path;

/// What to do when a transposition needs more than a double accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Return the nearest representable spelling and flag it
    #[default]
    Clamp,
    /// Fail with [`DiatonicError::Clamped`]
    Reject,
}

/// What to do with tokens that fail to parse when canonicalizing a note set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidTokenPolicy {
    /// Keep them, normalized, after all spelled notes
    #[default]
    Keep,
    /// Leave them out
    Drop,
    /// Fail on the first one
    Reject,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub clamp_policy: ClampPolicy,
    pub invalid_tokens: InvalidTokenPolicy,
    pub baseline: Baseline,
    /// Canonical spelling of the default analysis root
    pub root: Option<String>,
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    clamp_policy: Option<String>,
    invalid_tokens: Option<String>,
    baseline: Option<String>,
    root: Option<String>,
}

impl EngineConfig {
    /// Parse a YAML configuration document
    pub fn from_yaml(content: &str) -> Result<Self, DiatonicError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<RawConfig> =
            serde_yaml::from_str(content).map_err(|e| DiatonicError::ConfigError(e.to_string()))?;
        let raw = raw.unwrap_or_default();

        let clamp_policy = match raw.clamp_policy.as_deref() {
            None | Some("clamp") => ClampPolicy::Clamp,
            Some("reject") => ClampPolicy::Reject,
            Some(other) => {
                return Err(DiatonicError::ConfigError(format!(
                    "clamp-policy must be 'clamp' or 'reject', got '{}'",
                    other
                )))
            }
        };

        let invalid_tokens = match raw.invalid_tokens.as_deref() {
            None | Some("keep") => InvalidTokenPolicy::Keep,
            Some("drop") => InvalidTokenPolicy::Drop,
            Some("reject") => InvalidTokenPolicy::Reject,
            Some(other) => {
                return Err(DiatonicError::ConfigError(format!(
                    "invalid-tokens must be 'keep', 'drop' or 'reject', got '{}'",
                    other
                )))
            }
        };

        let baseline = match raw.baseline.as_deref() {
            None | Some("natural-letters") => Baseline::NaturalLetters,
            Some("major-scale") => Baseline::MajorScale,
            Some(other) => {
                return Err(DiatonicError::ConfigError(format!(
                    "baseline must be 'natural-letters' or 'major-scale', got '{}'",
                    other
                )))
            }
        };

        let root = match raw.root {
            Some(root) => Some(
                parse(&root)
                    .map_err(|e| DiatonicError::ConfigError(format!("root: {}", e)))?
                    .spelling()
                    .to_string(),
            ),
            None => None,
        };

        Ok(Self {
            clamp_policy,
            invalid_tokens,
            baseline,
            root,
        })
    }

    /// Read and parse a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiatonicError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded engine configuration");
        Self::from_yaml(&content)
    }
}
