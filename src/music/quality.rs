// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord quality table.
//!
//! One canonical enumeration of chord qualities, each mapped to its interval
//! set (semitones above the root) and its display symbol. The table is a
//! set of `match` expressions, so it is fixed at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Chord quality tags
///
/// Serialized as a snake_case tag ("dominant_seventh"); deserialization
/// accepts anything [`ChordQuality::parse`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    HalfDiminishedSeventh,
    SuspendedSecond,
    SuspendedFourth,
    MajorNinth,
    MinorNinth,
    DominantNinth,
    MajorEleventh,
    MinorEleventh,
    DominantEleventh,
}

impl ChordQuality {
    /// All qualities in table order
    pub const ALL: [ChordQuality; 17] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::DominantSeventh,
        ChordQuality::MajorSeventh,
        ChordQuality::MinorSeventh,
        ChordQuality::DiminishedSeventh,
        ChordQuality::HalfDiminishedSeventh,
        ChordQuality::SuspendedSecond,
        ChordQuality::SuspendedFourth,
        ChordQuality::MajorNinth,
        ChordQuality::MinorNinth,
        ChordQuality::DominantNinth,
        ChordQuality::MajorEleventh,
        ChordQuality::MinorEleventh,
        ChordQuality::DominantEleventh,
    ];

    /// Semitone offsets from the root
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::DominantSeventh => &[0, 4, 7, 10],
            ChordQuality::MajorSeventh => &[0, 4, 7, 11],
            ChordQuality::MinorSeventh => &[0, 3, 7, 10],
            ChordQuality::DiminishedSeventh => &[0, 3, 6, 9],
            ChordQuality::HalfDiminishedSeventh => &[0, 3, 6, 10],
            ChordQuality::SuspendedSecond => &[0, 2, 7],
            ChordQuality::SuspendedFourth => &[0, 5, 7],
            ChordQuality::MajorNinth => &[0, 4, 7, 11, 14],
            ChordQuality::MinorNinth => &[0, 3, 7, 10, 14],
            ChordQuality::DominantNinth => &[0, 4, 7, 10, 14],
            ChordQuality::MajorEleventh => &[0, 4, 7, 11, 14, 17],
            ChordQuality::MinorEleventh => &[0, 3, 7, 10, 14, 17],
            ChordQuality::DominantEleventh => &[0, 4, 7, 10, 14, 17],
        }
    }

    /// Chord-symbol suffix (e.g. "" for C, "m7" for Dm7, "m7b5" for Bm7b5)
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::DiminishedSeventh => "dim7",
            ChordQuality::HalfDiminishedSeventh => "m7b5",
            ChordQuality::SuspendedSecond => "sus2",
            ChordQuality::SuspendedFourth => "sus4",
            ChordQuality::MajorNinth => "maj9",
            ChordQuality::MinorNinth => "m9",
            ChordQuality::DominantNinth => "9",
            ChordQuality::MajorEleventh => "maj11",
            ChordQuality::MinorEleventh => "m11",
            ChordQuality::DominantEleventh => "11",
        }
    }

    /// Stable snake_case tag
    pub fn tag(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::DominantSeventh => "dominant_seventh",
            ChordQuality::MajorSeventh => "major_seventh",
            ChordQuality::MinorSeventh => "minor_seventh",
            ChordQuality::DiminishedSeventh => "diminished_seventh",
            ChordQuality::HalfDiminishedSeventh => "half_diminished_seventh",
            ChordQuality::SuspendedSecond => "suspended_second",
            ChordQuality::SuspendedFourth => "suspended_fourth",
            ChordQuality::MajorNinth => "major_ninth",
            ChordQuality::MinorNinth => "minor_ninth",
            ChordQuality::DominantNinth => "dominant_ninth",
            ChordQuality::MajorEleventh => "major_eleventh",
            ChordQuality::MinorEleventh => "minor_eleventh",
            ChordQuality::DominantEleventh => "dominant_eleventh",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::DominantSeventh => "dominant seventh",
            ChordQuality::MajorSeventh => "major seventh",
            ChordQuality::MinorSeventh => "minor seventh",
            ChordQuality::DiminishedSeventh => "diminished seventh",
            ChordQuality::HalfDiminishedSeventh => "half-diminished seventh",
            ChordQuality::SuspendedSecond => "suspended second",
            ChordQuality::SuspendedFourth => "suspended fourth",
            ChordQuality::MajorNinth => "major ninth",
            ChordQuality::MinorNinth => "minor ninth",
            ChordQuality::DominantNinth => "dominant ninth",
            ChordQuality::MajorEleventh => "major eleventh",
            ChordQuality::MinorEleventh => "minor eleventh",
            ChordQuality::DominantEleventh => "dominant eleventh",
        }
    }

    /// Whether the chord has a minor third (written lowercase as a numeral)
    pub fn is_minor_family(self) -> bool {
        matches!(
            self,
            ChordQuality::Minor
                | ChordQuality::Diminished
                | ChordQuality::DiminishedSeventh
                | ChordQuality::HalfDiminishedSeventh
                | ChordQuality::MinorSeventh
                | ChordQuality::MinorNinth
                | ChordQuality::MinorEleventh
        )
    }

    /// Parse a quality from a symbol or name
    ///
    /// Short symbols are case-sensitive ("M7" is major seventh, "m7" is minor
    /// seventh); spelled-out names ignore case, spaces, dashes and
    /// underscores. The empty string is major.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(quality) = Self::from_symbol(trimmed) {
            return Ok(quality);
        }

        let normalized = trimmed.to_lowercase().replace([' ', '-', '_'], "");
        let quality = match normalized.as_str() {
            "major" | "maj" => ChordQuality::Major,
            "minor" | "min" => ChordQuality::Minor,
            "diminished" | "dim" => ChordQuality::Diminished,
            "augmented" | "aug" => ChordQuality::Augmented,
            "dominant" | "dominant7" | "dominantseventh" | "dom7" => ChordQuality::DominantSeventh,
            "major7" | "majorseventh" | "maj7" => ChordQuality::MajorSeventh,
            "minor7" | "minorseventh" | "min7" => ChordQuality::MinorSeventh,
            "diminished7" | "diminishedseventh" | "dim7" => ChordQuality::DiminishedSeventh,
            "halfdiminished" | "halfdiminished7" | "halfdiminishedseventh" | "m7b5" => {
                ChordQuality::HalfDiminishedSeventh
            }
            "suspendedsecond" | "sus2" => ChordQuality::SuspendedSecond,
            "suspendedfourth" | "sus4" | "sus" => ChordQuality::SuspendedFourth,
            "major9" | "majorninth" | "maj9" => ChordQuality::MajorNinth,
            "minor9" | "minorninth" | "min9" => ChordQuality::MinorNinth,
            "dominant9" | "dominantninth" => ChordQuality::DominantNinth,
            "major11" | "majoreleventh" | "maj11" => ChordQuality::MajorEleventh,
            "minor11" | "minoreleventh" | "min11" => ChordQuality::MinorEleventh,
            "dominant11" | "dominanteleventh" => ChordQuality::DominantEleventh,
            _ => return Err(TheoryError::UnknownChordQuality(s.to_string())),
        };
        Ok(quality)
    }

    /// Exact, case-sensitive symbol aliases
    fn from_symbol(s: &str) -> Option<Self> {
        let quality = match s {
            "" | "M" | "maj" => ChordQuality::Major,
            "m" | "min" | "-" => ChordQuality::Minor,
            "dim" | "°" | "o" => ChordQuality::Diminished,
            "aug" | "+" => ChordQuality::Augmented,
            "7" | "dom7" => ChordQuality::DominantSeventh,
            "maj7" | "M7" | "Δ" | "Δ7" => ChordQuality::MajorSeventh,
            "m7" | "min7" | "-7" => ChordQuality::MinorSeventh,
            "dim7" | "°7" | "o7" => ChordQuality::DiminishedSeventh,
            "m7b5" | "ø" | "ø7" => ChordQuality::HalfDiminishedSeventh,
            "sus2" => ChordQuality::SuspendedSecond,
            "sus4" | "sus" => ChordQuality::SuspendedFourth,
            "maj9" | "M9" | "Δ9" => ChordQuality::MajorNinth,
            "m9" | "min9" => ChordQuality::MinorNinth,
            "9" => ChordQuality::DominantNinth,
            "maj11" | "M11" | "Δ11" => ChordQuality::MajorEleventh,
            "m11" | "min11" => ChordQuality::MinorEleventh,
            "11" => ChordQuality::DominantEleventh,
            _ => return None,
        };
        Some(quality)
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChordQuality {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ChordQuality> for &'static str {
    fn from(quality: ChordQuality) -> Self {
        quality.tag()
    }
}
