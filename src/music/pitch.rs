// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch model: note names, octaves and MIDI numbers.
//!
//! A [`Pitch`] is an immutable value. Transposition and respelling build a
//! new pitch. Equality is enharmonic: `C#4 == Db4`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TheoryError};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Semitone offset type
pub type Semitones = i32;

/// Lowest octave a pitch may carry
pub const MIN_OCTAVE: u8 = 0;

/// Highest octave a pitch may carry
pub const MAX_OCTAVE: u8 = 8;

/// Octave used when a pitch name carries none
pub const DEFAULT_OCTAVE: u8 = 4;

/// Default note duration in beats
pub const DEFAULT_DURATION: f64 = 1.0;

/// Default note velocity
pub const DEFAULT_VELOCITY: u8 = 64;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in scale order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Pitch class (0-11) of the natural note
    pub fn pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Parse a letter, case-insensitively
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidental applied to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone offset from the natural letter
    pub fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Which accidental to prefer when spelling a pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    Sharps,
    Flats,
}

const SHARP_NAMES: [NoteName; 12] = [
    NoteName::new(Letter::C, Accidental::Natural),
    NoteName::new(Letter::C, Accidental::Sharp),
    NoteName::new(Letter::D, Accidental::Natural),
    NoteName::new(Letter::D, Accidental::Sharp),
    NoteName::new(Letter::E, Accidental::Natural),
    NoteName::new(Letter::F, Accidental::Natural),
    NoteName::new(Letter::F, Accidental::Sharp),
    NoteName::new(Letter::G, Accidental::Natural),
    NoteName::new(Letter::G, Accidental::Sharp),
    NoteName::new(Letter::A, Accidental::Natural),
    NoteName::new(Letter::A, Accidental::Sharp),
    NoteName::new(Letter::B, Accidental::Natural),
];

const FLAT_NAMES: [NoteName; 12] = [
    NoteName::new(Letter::C, Accidental::Natural),
    NoteName::new(Letter::D, Accidental::Flat),
    NoteName::new(Letter::D, Accidental::Natural),
    NoteName::new(Letter::E, Accidental::Flat),
    NoteName::new(Letter::E, Accidental::Natural),
    NoteName::new(Letter::F, Accidental::Natural),
    NoteName::new(Letter::G, Accidental::Flat),
    NoteName::new(Letter::G, Accidental::Natural),
    NoteName::new(Letter::A, Accidental::Flat),
    NoteName::new(Letter::A, Accidental::Natural),
    NoteName::new(Letter::B, Accidental::Flat),
    NoteName::new(Letter::B, Accidental::Natural),
];

/// A pitch class spelled as letter plus accidental (e.g. "C#", "Eb")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct NoteName {
    letter: Letter,
    accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Pitch class (0-11)
    pub fn pitch_class(self) -> u8 {
        (self.letter.pitch_class() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Spell a pitch class with the preferred accidental
    pub fn from_pitch_class(pc: u8, spelling: Spelling) -> Self {
        let index = (pc % 12) as usize;
        match spelling {
            Spelling::Sharps => SHARP_NAMES[index],
            Spelling::Flats => FLAT_NAMES[index],
        }
    }

    /// Respell this name with the preferred accidental; naturals are kept
    pub fn respell(self, spelling: Spelling) -> Self {
        Self::from_pitch_class(self.pitch_class(), spelling)
    }

    /// Parse a note name without octave (e.g. "C", "f#", "Bb", "E#")
    ///
    /// Spellings that land on a natural (E#, B#, Fb, Cb) are normalized to
    /// that natural. Cb and B# cross an octave boundary; with an octave
    /// attached, `Pitch::from_name("Cb4")` is B3 and `"B#4"` is C5.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match split_note_name(trimmed) {
            Some((name, _, "")) => Ok(name),
            _ => Err(TheoryError::InvalidPitchName(s.to_string())),
        }
    }

    /// Octaves crossed when spelling this name, -1 for Cb and +1 for B#
    pub fn octave_shift(self) -> i32 {
        (self.letter.pitch_class() as i32 + self.accidental.offset() as i32).div_euclid(12)
    }

    /// Normalize spellings that have a natural equivalent
    fn normalized(self) -> Self {
        match (self.letter, self.accidental) {
            (Letter::E, Accidental::Sharp) => NoteName::new(Letter::F, Accidental::Natural),
            (Letter::B, Accidental::Sharp) => NoteName::new(Letter::C, Accidental::Natural),
            (Letter::F, Accidental::Flat) => NoteName::new(Letter::E, Accidental::Natural),
            (Letter::C, Accidental::Flat) => NoteName::new(Letter::B, Accidental::Natural),
            _ => self,
        }
    }
}

/// Split a leading note name off `text`
///
/// Returns the normalized name, the octave shift of the written spelling
/// and the remainder.
pub(crate) fn split_note_name(text: &str) -> Option<(NoteName, i32, &str)> {
    let first = text.chars().next()?;
    let letter = Letter::from_char(first)?;
    let rest = &text[first.len_utf8()..];

    let (accidental, rest) = if let Some(r) = rest.strip_prefix(|c: char| c == '#' || c == '♯') {
        (Accidental::Sharp, r)
    } else if let Some(r) = rest.strip_prefix(|c: char| c == 'b' || c == '♭') {
        (Accidental::Flat, r)
    } else {
        (Accidental::Natural, rest)
    };

    let written = NoteName::new(letter, accidental);
    Some((written.normalized(), written.octave_shift(), rest))
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NoteName> for String {
    fn from(name: NoteName) -> Self {
        name.to_string()
    }
}

/// MIDI number for a name/octave pair, without range checks
fn natural_midi(name: NoteName, octave: u8) -> i32 {
    (octave as i32 + 1 + name.octave_shift()) * 12 + name.pitch_class() as i32
}

/// A note name with octave, duration and velocity
#[derive(Debug, Clone, Serialize)]
pub struct Pitch {
    name: NoteName,
    octave: u8,
    duration: f64,
    velocity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    midi_override: Option<MidiNote>,
}

impl Pitch {
    /// Create a pitch with default duration and velocity
    pub fn new(name: NoteName, octave: u8) -> Result<Self> {
        if octave > MAX_OCTAVE {
            return Err(TheoryError::InvalidOctave(octave as i32));
        }
        Ok(Self {
            name,
            octave,
            duration: DEFAULT_DURATION,
            velocity: DEFAULT_VELOCITY,
            midi_override: None,
        })
    }

    /// Parse `<letter>[#|b][octave]`, e.g. "C", "Eb3", "F#5"
    ///
    /// A missing octave defaults to 4. Cb and B# belong to the neighbouring
    /// octave: "Cb4" is B3 (MIDI 59) and "B#4" is C5 (MIDI 72).
    pub fn from_name(text: &str) -> Result<Self> {
        let invalid = || TheoryError::InvalidPitchName(text.to_string());
        let (name, shift, octave_text) = split_note_name(text.trim()).ok_or_else(invalid)?;

        let octave = if octave_text.is_empty() {
            DEFAULT_OCTAVE as i32
        } else if octave_text.chars().all(|c| c.is_ascii_digit()) {
            octave_text.parse::<i32>().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };

        let octave = octave.saturating_add(shift);
        if !(MIN_OCTAVE as i32..=MAX_OCTAVE as i32).contains(&octave) {
            return Err(TheoryError::InvalidOctave(octave));
        }
        Self::new(name, octave as u8)
    }

    /// Create a pitch from a MIDI number, spelled with sharps
    ///
    /// The octave is `n / 12 - 1` clamped into 0-8; the input MIDI number
    /// is kept as an override whenever the clamp changed the octave.
    pub fn from_midi(n: i32) -> Result<Self> {
        if !(0..=127).contains(&n) {
            return Err(TheoryError::MidiOutOfRange(n));
        }
        let name = NoteName::from_pitch_class((n % 12) as u8, Spelling::Sharps);
        let octave = if n == 0 {
            MIN_OCTAVE
        } else {
            (n / 12 - 1).clamp(MIN_OCTAVE as i32, MAX_OCTAVE as i32) as u8
        };
        let midi_override = (natural_midi(name, octave) != n).then_some(n as MidiNote);

        Ok(Self {
            name,
            octave,
            duration: DEFAULT_DURATION,
            velocity: DEFAULT_VELOCITY,
            midi_override,
        })
    }

    /// Set the duration in beats
    pub fn with_duration(mut self, duration: f64) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TheoryError::InvalidDuration(duration));
        }
        self.duration = duration;
        Ok(self)
    }

    /// Set the velocity (0-127)
    pub fn with_velocity(mut self, velocity: u8) -> Result<Self> {
        if velocity > 127 {
            return Err(TheoryError::InvalidVelocity(velocity as i32));
        }
        self.velocity = velocity;
        Ok(self)
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    pub fn pitch_class(&self) -> u8 {
        self.name.pitch_class()
    }

    /// MIDI number (0-127)
    pub fn midi_number(&self) -> MidiNote {
        match self.midi_override {
            Some(n) => n,
            None => natural_midi(self.name, self.octave) as MidiNote,
        }
    }

    /// Name with octave, e.g. "C#4"
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }

    /// Transpose by semitones, producing a new sharp-spelled pitch
    ///
    /// Fails if the result leaves MIDI 0-127 or octave 0-8.
    pub fn transpose(&self, semitones: Semitones) -> Result<Self> {
        let target = self.midi_number() as i64 + semitones as i64;
        if !(0..=127).contains(&target) {
            let reported = target.clamp(i32::MIN as i64, i32::MAX as i64);
            return Err(TheoryError::MidiOutOfRange(reported as i32));
        }
        let target = target as i32;
        let octave = target / 12 - 1;
        if !(MIN_OCTAVE as i32..=MAX_OCTAVE as i32).contains(&octave) {
            return Err(TheoryError::MidiOutOfRange(target));
        }

        Ok(Self {
            name: NoteName::from_pitch_class((target % 12) as u8, Spelling::Sharps),
            octave: octave as u8,
            duration: self.duration,
            velocity: self.velocity,
            midi_override: None,
        })
    }

    /// Same pitch spelled with the preferred accidental
    pub fn respell(&self, spelling: Spelling) -> Self {
        Self {
            name: self.name.respell(spelling),
            ..self.clone()
        }
    }

    /// Signed semitone distance from this pitch to another
    pub fn semitones_to(&self, other: &Pitch) -> Semitones {
        other.midi_number() as i32 - self.midi_number() as i32
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.midi_number() == other.midi_number()
            && self.duration == other.duration
            && self.velocity == other.velocity
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
