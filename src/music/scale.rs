// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and key system for resolving scale degrees.
//!
//! Provides the major/minor scale definitions, their diatonic chord
//! qualities, and a [`ScaleContext`] that turns a scale degree into a
//! concrete pitch for a given key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch::{Accidental, Pitch, Spelling};
use super::quality::ChordQuality;
use crate::error::{Result, TheoryError};

/// Number of degrees in a diatonic scale
pub const DEGREES_PER_OCTAVE: i32 = 7;

/// Scale types supported by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major, // Ionian
    Minor, // Natural minor / Aeolian
}

impl ScaleType {
    /// Get the intervals (semitones from root) for this scale type
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad quality built on each degree (I ii iii IV V vi vii° / i ii° III iv v VI VII)
    pub fn diatonic_qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::{Diminished, Major, Minor};
        match self {
            ScaleType::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            ScaleType::Minor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
        }
    }

    /// Parse scale type from string
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" | "maj" => Ok(ScaleType::Major),
            "minor" | "naturalminor" | "aeolian" | "min" => Ok(ScaleType::Minor),
            _ => Err(TheoryError::UnknownScaleType(s.to_string())),
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Resolves scale degrees to pitches for one key and scale type
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleContext {
    key: Pitch,
    scale_type: ScaleType,
}

impl ScaleContext {
    pub fn new(key: Pitch, scale_type: ScaleType) -> Self {
        Self { key, scale_type }
    }

    /// Parse a context from strings (e.g. "Bb3", "minor")
    pub fn parse(key: &str, scale: &str) -> Result<Self> {
        Ok(Self::new(Pitch::from_name(key)?, ScaleType::parse(scale)?))
    }

    pub fn key(&self) -> &Pitch {
        &self.key
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Key name without octave, e.g. "F#"
    pub fn key_name(&self) -> String {
        self.key.name().to_string()
    }

    /// Accidental preference for this key signature
    ///
    /// An explicitly spelled key wins; natural keys use flats when their
    /// signature is a flat one (F major, D/G/C minor).
    pub fn spelling(&self) -> Spelling {
        match self.key.name().accidental() {
            Accidental::Flat => Spelling::Flats,
            Accidental::Sharp => Spelling::Sharps,
            Accidental::Natural => {
                let flat_keys: &[u8] = match self.scale_type {
                    // F
                    ScaleType::Major => &[5],
                    // D, G, C, F
                    ScaleType::Minor => &[2, 7, 0, 5],
                };
                if flat_keys.contains(&self.key.pitch_class()) {
                    Spelling::Flats
                } else {
                    Spelling::Sharps
                }
            }
        }
    }

    /// Pitch for a scale degree
    ///
    /// Degrees outside 1-7 wrap into the scale and shift by whole octaves:
    /// degree 8 is degree 1 an octave up, degree 0 is degree 7 an octave
    /// down.
    pub fn note_for_degree(&self, degree: i32) -> Result<Pitch> {
        let zero_based = degree as i64 - 1;
        let wrapped = zero_based.rem_euclid(DEGREES_PER_OCTAVE as i64) + 1;
        let octave_shift = zero_based.div_euclid(DEGREES_PER_OCTAVE as i64);
        if !(1..=DEGREES_PER_OCTAVE as i64).contains(&wrapped) {
            return Err(TheoryError::InvalidScaleDegree(degree));
        }

        let interval = self.scale_type.intervals()[(wrapped - 1) as usize] as i64;
        let offset = interval + 12 * octave_shift;
        if offset.abs() > 127 {
            let target = (self.key.midi_number() as i64 + offset)
                .clamp(i32::MIN as i64, i32::MAX as i64);
            return Err(TheoryError::MidiOutOfRange(target as i32));
        }

        Ok(self.key.transpose(offset as i32)?.respell(self.spelling()))
    }

    /// The seven scale pitches starting at the key
    pub fn notes(&self) -> Result<Vec<Pitch>> {
        (1..=DEGREES_PER_OCTAVE)
            .map(|degree| self.note_for_degree(degree))
            .collect()
    }

    /// Scale degree (1-7) of a pitch class, if it is in the scale
    pub fn degree_of(&self, pitch: &Pitch) -> Option<u8> {
        let offset = (pitch.pitch_class() as i32 - self.key.pitch_class() as i32).rem_euclid(12);
        self.scale_type
            .intervals()
            .iter()
            .position(|&interval| interval as i32 == offset)
            .map(|i| i as u8 + 1)
    }

    /// Diatonic triad quality for a degree in 1-7
    pub fn diatonic_quality(&self, degree: i32) -> Result<ChordQuality> {
        if !(1..=DEGREES_PER_OCTAVE).contains(&degree) {
            return Err(TheoryError::InvalidScaleDegree(degree));
        }
        Ok(self.scale_type.diatonic_qualities()[(degree - 1) as usize])
    }
}

impl fmt::Display for ScaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key.name(), self.scale_type)
    }
}
