// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the music theory core.
//!
//! Every failure here is a local validation failure. Nothing is transient,
//! so callers should translate these into user-facing responses rather
//! than retry.

use thiserror::Error;

/// Errors produced by pitch, chord, numeral, scale and progression operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TheoryError {
    #[error("invalid pitch name: {0:?}")]
    InvalidPitchName(String),

    #[error("MIDI number {0} is out of range (0-127, octave 0-8)")]
    MidiOutOfRange(i32),

    #[error("octave {0} is out of range (0-8)")]
    InvalidOctave(i32),

    #[error("duration must be positive and finite, got {0}")]
    InvalidDuration(f64),

    #[error("velocity {0} is out of range (0-127)")]
    InvalidVelocity(i32),

    #[error("unknown chord quality: {0:?}")]
    UnknownChordQuality(String),

    #[error("invalid chord: {0}")]
    InvalidChord(String),

    #[error("invalid Roman numeral: {0:?}")]
    InvalidRomanNumeral(String),

    #[error("invalid scale degree: {0}")]
    InvalidScaleDegree(i32),

    #[error("unknown scale type: {0:?}")]
    UnknownScaleType(String),

    #[error("either a pattern or a progression length is required")]
    MissingPattern,

    #[error("progression length must be between 1 and 32, got {0}")]
    InvalidLength(usize),

    #[error("degrees and qualities differ in length ({degrees} vs {qualities})")]
    LengthMismatch { degrees: usize, qualities: usize },

    #[error("complexity must be between 0.0 and 1.0, got {0}")]
    InvalidComplexity(f64),

    #[error("unknown progression preset: {0:?}")]
    UnknownPreset(String),
}

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TheoryError::InvalidPitchName("H".to_string()).to_string(),
            "invalid pitch name: \"H\""
        );
        assert_eq!(
            TheoryError::LengthMismatch { degrees: 2, qualities: 3 }.to_string(),
            "degrees and qualities differ in length (2 vs 3)"
        );
        assert_eq!(
            TheoryError::InvalidLength(0).to_string(),
            "progression length must be between 1 and 32, got 0"
        );
    }
}
