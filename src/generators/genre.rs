// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Genre templates and tension/resolution substitution.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::PatternStep;
use crate::music::ChordQuality;

/// Qualities cycled when a genre pattern runs past its seed
pub const EXTENSION_ROTATION: [ChordQuality; 4] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::DominantSeventh,
    ChordQuality::MajorSeventh,
];

/// Genres with a characteristic seed progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Pop,
    Jazz,
    Blues,
    Classical,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Pop, Genre::Jazz, Genre::Blues, Genre::Classical];

    /// Parse a genre name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pop" => Some(Genre::Pop),
            "jazz" => Some(Genre::Jazz),
            "blues" => Some(Genre::Blues),
            "classical" => Some(Genre::Classical),
            _ => None,
        }
    }

    /// Parse a genre name, falling back to pop for unknown names
    pub fn parse_or_pop(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(genre = s, "unknown genre, falling back to pop");
            Genre::Pop
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Genre::Pop => "pop",
            Genre::Jazz => "jazz",
            Genre::Blues => "blues",
            Genre::Classical => "classical",
        }
    }

    /// Characteristic four-chord seed as `(degree, quality)` pairs
    pub fn seed(self) -> &'static [(i32, ChordQuality)] {
        use ChordQuality::*;
        match self {
            Genre::Pop => &[(1, Major), (4, Major), (5, Major), (1, Major)],
            Genre::Jazz => &[(2, Minor), (5, DominantSeventh), (1, MajorSeventh), (4, MajorSeventh)],
            Genre::Blues => &[
                (1, DominantSeventh),
                (4, DominantSeventh),
                (5, DominantSeventh),
                (1, DominantSeventh),
            ],
            Genre::Classical => &[(1, Major), (5, Major), (4, Major), (1, Major)],
        }
    }

    /// Pattern of exactly `length` steps built from the seed
    ///
    /// Past the seed, each step moves up one degree (wrapping 7 to 1) and
    /// takes the next quality in [`EXTENSION_ROTATION`].
    pub fn pattern(self, length: usize) -> Vec<PatternStep> {
        let seed = self.seed();
        let mut steps: Vec<PatternStep> = seed
            .iter()
            .take(length)
            .map(|&(degree, quality)| PatternStep::new(degree, quality))
            .collect();

        let mut last = seed.last().map_or(1, |&(degree, _)| degree);
        for i in 0..length.saturating_sub(seed.len()) {
            last = last % 7 + 1;
            steps.push(PatternStep::new(last, EXTENSION_ROTATION[i % EXTENSION_ROTATION.len()]));
        }
        steps
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Degree whose dominant seventh leads into `target`
///
/// V7 resolves to I, and the secondary dominants I7→IV, II7→V, III7→vi,
/// VI7→ii.
pub fn tension_degree(target: i32) -> Option<i32> {
    match target {
        1 => Some(5),
        4 => Some(1),
        5 => Some(2),
        6 => Some(3),
        2 => Some(6),
        _ => None,
    }
}

/// Replace the first chord that can become a dominant of its successor
///
/// Scans left to right and stops at the first chord whose successor has a
/// tension degree, even when that chord is already the dominant.
pub fn apply_tension_resolution(pattern: &[PatternStep]) -> Vec<PatternStep> {
    let mut steps = pattern.to_vec();
    let found = steps
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| pair[1].degree.and_then(tension_degree).map(|t| (i, t)));
    if let Some((i, tension)) = found {
        steps[i] = PatternStep::new(tension, ChordQuality::DominantSeventh);
    }
    steps
}
