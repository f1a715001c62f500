//! # Error Types
//!
//! This module defines all error types for the diatonic engine.
//!
//! Errors carry the offending input so callers can decide whether to drop a
//! token or abort the whole request.
//!
//! ## Error Types
//! - `InvalidSpelling` - A token that is not a letter plus an optional accidental
//! - `InvalidInterval` - A malformed interval label or a quality that does not fit the number
//! - `Clamped` - A transposition that needed an accidental beyond double sharp/flat
//!   (only raised under [`ClampPolicy::Reject`](crate::ClampPolicy))
//! - `ConfigError` - Invalid YAML configuration
//! - `Io` - Configuration file could not be read
//!
//! ## Usage
//! ```rust
//! use diatonic::{interval_between, DiatonicError};
//!
//! match interval_between("C", "H") {
//!     Ok(interval) => println!("{}", interval.label),
//!     Err(DiatonicError::InvalidSpelling { token, reason }) => {
//!         eprintln!("Cannot read '{}': {}", token, reason);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiatonicError {
    /// Token does not match the note-spelling grammar.
    ///
    /// # Example
    /// ```
    /// # use diatonic::DiatonicError;
    /// let err = DiatonicError::InvalidSpelling {
    ///     token: "H#".to_string(),
    ///     reason: "unknown letter 'H'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid spelling 'H#': unknown letter 'H'");
    /// ```
    #[error("Invalid spelling '{token}': {reason}")]
    InvalidSpelling { token: String, reason: String },

    /// Interval label or quality/number pairing is not valid.
    ///
    /// # Example
    /// ```
    /// # use diatonic::DiatonicError;
    /// let err = DiatonicError::InvalidInterval("M5: Major does not apply to a 5th".to_string());
    /// assert_eq!(err.to_string(), "Invalid interval: M5: Major does not apply to a 5th");
    /// ```
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// The requested transposition needs an accidental outside double flat..double sharp.
    #[error("Transposing {root} by {interval} needs more than a double accidental (nearest: {spelling})")]
    Clamped {
        root: String,
        interval: String,
        spelling: String,
    },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
