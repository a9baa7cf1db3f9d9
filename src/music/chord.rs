// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords built from a root pitch, a quality and an inversion.

use std::fmt;

use serde::Serialize;

use super::pitch::{split_note_name, Pitch, Semitones};
use super::quality::ChordQuality;
use crate::error::{Result, TheoryError};

/// A chord with its derived notes
///
/// `notes` is computed once at construction and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    root: Pitch,
    quality: ChordQuality,
    inversion: u32,
    notes: Vec<Pitch>,
}

impl Chord {
    /// Build a chord, deriving its notes from the quality's intervals
    ///
    /// Each inversion step moves the current lowest note up an octave to the
    /// top of the chord.
    pub fn new(root: Pitch, quality: ChordQuality, inversion: i32) -> Result<Self> {
        if inversion < 0 {
            return Err(TheoryError::InvalidChord(format!(
                "inversion must be non-negative, got {}",
                inversion
            )));
        }

        let mut notes = quality
            .intervals()
            .iter()
            .map(|&interval| root.transpose(interval as Semitones))
            .collect::<Result<Vec<_>>>()?;

        for _ in 0..inversion {
            let bottom = notes.remove(0);
            notes.push(bottom.transpose(12)?);
        }

        Ok(Self {
            root,
            quality,
            inversion: inversion as u32,
            notes,
        })
    }

    /// Root-position chord
    pub fn triad(root: Pitch, quality: ChordQuality) -> Result<Self> {
        Self::new(root, quality, 0)
    }

    /// Parse a chord symbol such as "C", "F#m7" or "Bbmaj7" at the given octave
    ///
    /// A Cb or B# root is placed in the neighbouring octave, as with
    /// `Pitch::from_name`.
    pub fn parse(symbol: &str, octave: u8) -> Result<Self> {
        let trimmed = symbol.trim();
        let (name, shift, suffix) = split_note_name(trimmed)
            .ok_or_else(|| TheoryError::InvalidPitchName(symbol.to_string()))?;
        let quality = ChordQuality::parse(suffix)?;
        let octave = octave as i32 + shift;
        let octave = u8::try_from(octave).map_err(|_| TheoryError::InvalidOctave(octave))?;
        Self::triad(Pitch::new(name, octave)?, quality)
    }

    pub fn root(&self) -> &Pitch {
        &self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn inversion(&self) -> u32 {
        self.inversion
    }

    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }

    /// MIDI numbers of the chord notes, in voicing order
    pub fn midi_numbers(&self) -> Vec<u8> {
        self.notes.iter().map(Pitch::midi_number).collect()
    }

    /// Chord symbol, e.g. "C", "Dm", "G7", "Bm7b5"
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root.name(), self.quality.symbol())
    }

    /// Transpose the whole chord, keeping quality and inversion
    pub fn transpose(&self, semitones: Semitones) -> Result<Self> {
        Self::new(self.root.transpose(semitones)?, self.quality, self.inversion as i32)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> Pitch {
        Pitch::from_name(s).unwrap()
    }

    fn names(chord: &Chord) -> Vec<String> {
        chord.notes().iter().map(Pitch::full_name).collect()
    }

    #[test]
    fn test_root_position() {
        let c = Chord::triad(pitch("C4"), ChordQuality::Major).unwrap();
        assert_eq!(names(&c), vec!["C4", "E4", "G4"]);
        assert_eq!(c.notes()[0], pitch("C4"));
        assert_eq!(c.midi_numbers(), vec![60, 64, 67]);
    }

    #[test]
    fn test_note_count_matches_intervals() {
        for quality in ChordQuality::ALL {
            let chord = Chord::triad(pitch("D3"), quality).unwrap();
            assert_eq!(chord.notes().len(), quality.intervals().len());
            assert_eq!(chord.notes()[0], pitch("D3"));
        }
    }

    #[test]
    fn test_inversions() {
        let first = Chord::new(pitch("C4"), ChordQuality::Major, 1).unwrap();
        assert_eq!(names(&first), vec!["E4", "G4", "C5"]);

        let second = Chord::new(pitch("C4"), ChordQuality::Major, 2).unwrap();
        assert_eq!(names(&second), vec!["G4", "C5", "E5"]);

        let seventh = Chord::new(pitch("G3"), ChordQuality::DominantSeventh, 3).unwrap();
        assert_eq!(names(&seventh), vec!["F4", "G4", "B4", "D5"]);
    }

    #[test]
    fn test_negative_inversion() {
        let result = Chord::new(pitch("C4"), ChordQuality::Major, -1);
        assert!(matches!(result, Err(TheoryError::InvalidChord(_))));
    }

    #[test]
    fn test_out_of_range_chord() {
        let result = Chord::triad(pitch("A8"), ChordQuality::Major);
        assert!(matches!(result, Err(TheoryError::MidiOutOfRange(_))));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Chord::triad(pitch("C"), ChordQuality::Major).unwrap().to_string(), "C");
        assert_eq!(Chord::triad(pitch("D"), ChordQuality::Minor).unwrap().to_string(), "Dm");
        assert_eq!(
            Chord::triad(pitch("G"), ChordQuality::DominantSeventh).unwrap().to_string(),
            "G7"
        );
        assert_eq!(
            Chord::triad(pitch("B"), ChordQuality::HalfDiminishedSeventh)
                .unwrap()
                .to_string(),
            "Bm7b5"
        );
    }

    #[test]
    fn test_parse_symbol() {
        let chord = Chord::parse("F#m7", 3).unwrap();
        assert_eq!(chord.root().full_name(), "F#3");
        assert_eq!(chord.quality(), ChordQuality::MinorSeventh);

        let chord = Chord::parse("Bbmaj7", 4).unwrap();
        assert_eq!(chord.symbol(), "Bbmaj7");

        assert!(matches!(
            Chord::parse("Hm", 4),
            Err(TheoryError::InvalidPitchName(_))
        ));
        assert!(matches!(
            Chord::parse("Cxyz", 4),
            Err(TheoryError::UnknownChordQuality(_))
        ));
    }

    #[test]
    fn test_parse_root_crosses_octave() {
        let chord = Chord::parse("Cbm", 4).unwrap();
        assert_eq!(chord.root().full_name(), "B3");
        assert_eq!(chord.midi_numbers(), vec![59, 62, 66]);

        assert_eq!(Chord::parse("B#", 3).unwrap().root().midi_number(), 60);
        assert_eq!(Chord::parse("Cb", 0), Err(TheoryError::InvalidOctave(-1)));
    }

    #[test]
    fn test_transpose() {
        let c = Chord::new(pitch("C4"), ChordQuality::Minor, 1).unwrap();
        let d = c.transpose(2).unwrap();
        assert_eq!(d.symbol(), "Dm");
        assert_eq!(d.inversion(), 1);
        assert_eq!(names(&d), vec!["F4", "A4", "D5"]);
    }

    #[test]
    fn test_transpose_extreme_shifts() {
        let c = Chord::triad(pitch("C4"), ChordQuality::Major).unwrap();
        assert!(matches!(c.transpose(i32::MAX), Err(TheoryError::MidiOutOfRange(_))));
        assert!(matches!(c.transpose(i32::MIN), Err(TheoryError::MidiOutOfRange(_))));
    }
}
