// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! notegen - music theory core for chord progression generation.
//!
//! Pitches, chord qualities, Roman numerals and scale contexts live in
//! [`music`]; [`generators`] turns abstract patterns into concrete
//! progressions; [`config`] loads generator settings and presets.

pub mod config;
pub mod error;
pub mod generators;
pub mod music;

pub use error::{Result, TheoryError};
pub use generators::{
    AdvancedRequest, ChordProgression, ChordProgressionGenerator, Genre, MidiEvent, Pattern,
    PatternStep, Preset, PresetLibrary,
};
pub use music::{Chord, ChordQuality, NoteName, Pitch, RomanNumeral, ScaleContext, ScaleType};
