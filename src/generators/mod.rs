// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression generation.
//!
//! This module turns abstract patterns (Roman numerals, degree/quality
//! pairs, genre templates or random sampling) into concrete progressions,
//! and renders progressions into timed note events.

pub mod complexity;
pub mod genre;
pub mod presets;
pub mod progression;

pub use complexity::calculate_pattern_complexity;
pub use genre::Genre;
pub use presets::{Preset, PresetLibrary};
pub use progression::{AdvancedRequest, ChordProgression, ChordProgressionGenerator};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::music::{ChordQuality, RomanNumeral};

/// Timed note event rendered from a progression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MidiEvent {
    /// MIDI note number (0-127)
    pub note: u8,
    /// Velocity (0-127)
    pub velocity: u8,
    /// Start time in ticks from the start of the progression
    pub start_tick: u64,
    /// Duration in ticks
    pub duration_ticks: u64,
    /// MIDI channel (0-15)
    pub channel: u8,
}

impl MidiEvent {
    /// Create a new event on channel 0
    pub fn new(note: u8, velocity: u8, start_tick: u64, duration_ticks: u64) -> Self {
        Self {
            note,
            velocity,
            start_tick,
            duration_ticks,
            channel: 0,
        }
    }

    /// Set the channel for this event
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel & 0x0F;
        self
    }

    /// Tick at which the note ends
    pub fn end_tick(&self) -> u64 {
        self.start_tick + self.duration_ticks
    }
}

/// One step of an abstract pattern
///
/// Either field may be missing: complexity scoring skips unknown entries,
/// generation requires a degree and treats a missing quality as major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStep {
    #[serde(default)]
    pub degree: Option<i32>,
    #[serde(default)]
    pub quality: Option<ChordQuality>,
}

impl PatternStep {
    pub fn new(degree: i32, quality: ChordQuality) -> Self {
        Self {
            degree: Some(degree),
            quality: Some(quality),
        }
    }

    pub fn degree_only(degree: i32) -> Self {
        Self {
            degree: Some(degree),
            quality: None,
        }
    }

    pub fn quality_only(quality: ChordQuality) -> Self {
        Self {
            degree: None,
            quality: Some(quality),
        }
    }
}

impl From<RomanNumeral> for PatternStep {
    fn from(numeral: RomanNumeral) -> Self {
        Self::new(numeral.scale_degree() as i32, numeral.quality())
    }
}

/// Inbound pattern description
///
/// Deserializes from either a list of `{degree, quality}` maps or a list
/// of Roman-numeral strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    Steps(Vec<PatternStep>),
    Numerals(Vec<String>),
}

impl Pattern {
    /// Pattern from numeral tokens; each token may hold several numerals
    /// joined with `-` (e.g. "ii-V-I")
    pub fn numerals<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pattern::Numerals(tokens.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Pattern::Steps(steps) => steps.is_empty(),
            Pattern::Numerals(tokens) => tokens.iter().all(|t| t.trim().is_empty()),
        }
    }

    /// Expand into pattern steps, parsing numerals as needed
    pub fn steps(&self) -> Result<Vec<PatternStep>> {
        match self {
            Pattern::Steps(steps) => Ok(steps.clone()),
            Pattern::Numerals(tokens) => {
                let mut steps = Vec::new();
                for token in tokens.iter().filter(|t| !t.trim().is_empty()) {
                    for part in token.split('-') {
                        let numeral = RomanNumeral::parse(part.trim())?;
                        steps.push(numeral.into());
                    }
                }
                Ok(steps)
            }
        }
    }
}

impl From<Vec<PatternStep>> for Pattern {
    fn from(steps: Vec<PatternStep>) -> Self {
        Pattern::Steps(steps)
    }
}

/// Degree of a step, rejecting missing or non-diatonic degrees
pub(crate) fn step_degree(step: &PatternStep) -> Result<i32> {
    match step.degree {
        Some(degree) if (1..=7).contains(&degree) => Ok(degree),
        Some(degree) => Err(TheoryError::InvalidScaleDegree(degree)),
        None => Err(TheoryError::InvalidScaleDegree(0)),
    }
}
