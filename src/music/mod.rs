// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! This module provides the pitch model, the chord quality table, chords,
//! Roman numeral notation and scale-degree resolution. Everything here is
//! pure, synchronous computation over immutable values.

pub mod chord;
pub mod pitch;
pub mod quality;
pub mod roman;
pub mod scale;

pub use chord::Chord;
pub use pitch::{Accidental, Letter, MidiNote, NoteName, Pitch, Semitones, Spelling};
pub use quality::ChordQuality;
pub use roman::RomanNumeral;
pub use scale::{ScaleContext, ScaleType};
