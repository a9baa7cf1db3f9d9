// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman numeral chord notation.
//!
//! Converts between `(scale degree, quality)` pairs and text such as "V7",
//! "ii", "vii°" or "IVΔ". The numeral is read case-insensitively. An
//! all-lowercase numeral defaults to minor and any other to major; a
//! trailing suffix overrides that default.
//!
//! Rendering is the inverse of parsing: `parse(x.to_string()) == x` for
//! every degree and quality.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use super::quality::ChordQuality;
use super::scale::ScaleType;
use crate::error::{Result, TheoryError};

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// A chord written as a scale degree plus quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RomanNumeral {
    scale_degree: u8,
    quality: ChordQuality,
}

impl RomanNumeral {
    /// Create a numeral; the degree must be in 1-7
    pub fn new(scale_degree: i32, quality: ChordQuality) -> Result<Self> {
        if !(1..=7).contains(&scale_degree) {
            return Err(TheoryError::InvalidScaleDegree(scale_degree));
        }
        Ok(Self {
            scale_degree: scale_degree as u8,
            quality,
        })
    }

    /// Numeral for a degree using the scale's diatonic quality
    pub fn from_scale_degree(scale_degree: i32, scale_type: ScaleType) -> Result<Self> {
        if !(1..=7).contains(&scale_degree) {
            return Err(TheoryError::InvalidScaleDegree(scale_degree));
        }
        let quality = scale_type.diatonic_qualities()[(scale_degree - 1) as usize];
        Self::new(scale_degree, quality)
    }

    pub fn scale_degree(&self) -> u8 {
        self.scale_degree
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Parse numeral text such as "V7", "bVII", "ii", "viiø7" or "V/V"
    ///
    /// A leading flat marker is stripped and only the numeral before a slash
    /// is read. An unrecognised suffix is logged and the case-implied
    /// quality is used instead.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || TheoryError::InvalidRomanNumeral(text.to_string());

        let mut body = text.trim();
        if let Some(stripped) = body.strip_prefix(|c: char| c == 'b' || c == '♭') {
            body = stripped;
        }
        if let Some((head, tail)) = body.split_once('/') {
            debug!(numeral = text, secondary = tail, "ignoring slash part of numeral");
            body = head;
        }

        let base_len = body
            .find(|c: char| !matches!(c, 'I' | 'V' | 'i' | 'v'))
            .unwrap_or(body.len());
        let (base, suffix) = body.split_at(base_len);
        if base.is_empty() {
            return Err(invalid());
        }

        let is_lower = base.chars().all(|c| c.is_ascii_lowercase());
        let upper = base.to_ascii_uppercase();
        let degree = NUMERALS
            .iter()
            .position(|&numeral| numeral == upper)
            .ok_or_else(invalid)?
            + 1;

        let implied = if is_lower {
            ChordQuality::Minor
        } else {
            ChordQuality::Major
        };
        let quality = match suffix_quality(suffix, is_lower) {
            Some(quality) => quality,
            None => {
                warn!(
                    numeral = text,
                    suffix, "unrecognised numeral suffix, using case-implied quality"
                );
                implied
            }
        };

        Self::new(degree as i32, quality)
    }

    /// Canonical suffix appended after the numeral
    fn suffix(&self) -> &'static str {
        match self.quality {
            ChordQuality::Major | ChordQuality::Minor => "",
            ChordQuality::Diminished => "°",
            ChordQuality::Augmented => "+",
            ChordQuality::DominantSeventh | ChordQuality::MinorSeventh => "7",
            ChordQuality::MajorSeventh => "Δ",
            ChordQuality::DiminishedSeventh => "°7",
            ChordQuality::HalfDiminishedSeventh => "ø",
            ChordQuality::SuspendedSecond => "sus2",
            ChordQuality::SuspendedFourth => "sus4",
            ChordQuality::MajorNinth => "Δ9",
            ChordQuality::MinorNinth | ChordQuality::DominantNinth => "9",
            ChordQuality::MajorEleventh => "Δ11",
            ChordQuality::MinorEleventh | ChordQuality::DominantEleventh => "11",
        }
    }
}

/// Quality for a numeral suffix; bare extensions follow the numeral's case
fn suffix_quality(suffix: &str, is_lower: bool) -> Option<ChordQuality> {
    match (suffix, is_lower) {
        ("", true) => Some(ChordQuality::Minor),
        ("", false) => Some(ChordQuality::Major),
        ("7", true) => Some(ChordQuality::MinorSeventh),
        ("7", false) => Some(ChordQuality::DominantSeventh),
        ("9", true) => Some(ChordQuality::MinorNinth),
        ("9", false) => Some(ChordQuality::DominantNinth),
        ("11", true) => Some(ChordQuality::MinorEleventh),
        ("11", false) => Some(ChordQuality::DominantEleventh),
        _ => ChordQuality::parse(suffix).ok(),
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = NUMERALS[(self.scale_degree - 1) as usize];
        if self.quality.is_minor_family() {
            write!(f, "{}{}", numeral.to_ascii_lowercase(), self.suffix())
        } else {
            write!(f, "{}{}", numeral, self.suffix())
        }
    }
}

impl FromStr for RomanNumeral {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeral(text: &str) -> (u8, ChordQuality) {
        let parsed = RomanNumeral::parse(text).unwrap();
        (parsed.scale_degree(), parsed.quality())
    }

    #[test]
    fn test_case_implied_quality() {
        assert_eq!(numeral("I"), (1, ChordQuality::Major));
        assert_eq!(numeral("ii"), (2, ChordQuality::Minor));
        assert_eq!(numeral("IV"), (4, ChordQuality::Major));
        assert_eq!(numeral("vi"), (6, ChordQuality::Minor));
        assert_eq!(numeral("VII"), (7, ChordQuality::Major));
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(numeral("V7"), (5, ChordQuality::DominantSeventh));
        assert_eq!(numeral("ii7"), (2, ChordQuality::MinorSeventh));
        assert_eq!(numeral("IVmaj7"), (4, ChordQuality::MajorSeventh));
        assert_eq!(numeral("IΔ"), (1, ChordQuality::MajorSeventh));
        assert_eq!(numeral("iim7"), (2, ChordQuality::MinorSeventh));
        assert_eq!(numeral("vii°"), (7, ChordQuality::Diminished));
        assert_eq!(numeral("vii°7"), (7, ChordQuality::DiminishedSeventh));
        assert_eq!(numeral("viiø"), (7, ChordQuality::HalfDiminishedSeventh));
        assert_eq!(numeral("viiø7"), (7, ChordQuality::HalfDiminishedSeventh));
        assert_eq!(numeral("III+"), (3, ChordQuality::Augmented));
        assert_eq!(numeral("IIIaug"), (3, ChordQuality::Augmented));
    }

    #[test]
    fn test_flat_and_slash() {
        assert_eq!(numeral("bVII"), (7, ChordQuality::Major));
        assert_eq!(numeral("bIII"), (3, ChordQuality::Major));
        assert_eq!(numeral("V/V"), (5, ChordQuality::Major));
        assert_eq!(numeral("V7/IV"), (5, ChordQuality::DominantSeventh));
    }

    #[test]
    fn test_unknown_suffix_falls_back() {
        assert_eq!(numeral("Vxyz"), (5, ChordQuality::Major));
        assert_eq!(numeral("iiqq"), (2, ChordQuality::Minor));
    }

    #[test]
    fn test_invalid_numerals() {
        for text in ["", "X", "IIII", "VV", "vV", "7", "b", "/V"] {
            assert_eq!(
                RomanNumeral::parse(text),
                Err(TheoryError::InvalidRomanNumeral(text.to_string())),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_mixed_case_numerals() {
        let cases = [
            ("Vi", 6, ChordQuality::Major),
            ("Iv", 4, ChordQuality::Major),
            ("vI", 6, ChordQuality::Major),
            ("Ii7", 2, ChordQuality::DominantSeventh),
        ];
        for (text, degree, quality) in cases {
            let numeral = RomanNumeral::parse(text).unwrap();
            assert_eq!(numeral.scale_degree(), degree, "{}", text);
            assert_eq!(numeral.quality(), quality, "{}", text);
        }
    }

    #[test]
    fn test_to_string() {
        let render = |degree, quality| RomanNumeral::new(degree, quality).unwrap().to_string();
        assert_eq!(render(1, ChordQuality::Major), "I");
        assert_eq!(render(2, ChordQuality::Minor), "ii");
        assert_eq!(render(5, ChordQuality::DominantSeventh), "V7");
        assert_eq!(render(2, ChordQuality::MinorSeventh), "ii7");
        assert_eq!(render(7, ChordQuality::Diminished), "vii°");
        assert_eq!(render(7, ChordQuality::HalfDiminishedSeventh), "viiø");
        assert_eq!(render(4, ChordQuality::MajorSeventh), "IVΔ");
        assert_eq!(render(3, ChordQuality::Augmented), "III+");
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for degree in 1..=7 {
            for quality in ChordQuality::ALL {
                let original = RomanNumeral::new(degree, quality).unwrap();
                let text = original.to_string();
                assert_eq!(RomanNumeral::parse(&text), Ok(original), "failed on {}", text);
            }
        }
    }

    #[test]
    fn test_degree_bounds() {
        assert_eq!(
            RomanNumeral::new(0, ChordQuality::Major),
            Err(TheoryError::InvalidScaleDegree(0))
        );
        assert_eq!(
            RomanNumeral::new(8, ChordQuality::Major),
            Err(TheoryError::InvalidScaleDegree(8))
        );
    }

    #[test]
    fn test_from_scale_degree() {
        let vii = RomanNumeral::from_scale_degree(7, ScaleType::Major).unwrap();
        assert_eq!(vii.to_string(), "vii°");

        let iii = RomanNumeral::from_scale_degree(3, ScaleType::Minor).unwrap();
        assert_eq!(iii.to_string(), "III");
    }
}
