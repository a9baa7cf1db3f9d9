// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pattern complexity scoring.
//!
//! A pattern scores between [`MIN_COMPLEXITY`] and [`MAX_COMPLEXITY`]. Root
//! movement between adjacent degrees carries 70% of the weight and chord
//! colour the remaining 30%.

use super::PatternStep;
use crate::music::ChordQuality;

/// Lowest score a pattern can receive
pub const MIN_COMPLEXITY: f64 = 0.1;

/// Highest score a pattern can receive
pub const MAX_COMPLEXITY: f64 = 0.9;

/// Score used when nothing is known about a dimension
const NEUTRAL: f64 = 0.5;

const INTERVAL_WEIGHT: f64 = 0.7;
const QUALITY_WEIGHT: f64 = 0.3;

/// How unusual a chord quality sounds
pub fn quality_complexity(quality: ChordQuality) -> f64 {
    match quality {
        ChordQuality::Major => 0.2,
        ChordQuality::Minor => 0.3,
        ChordQuality::SuspendedSecond | ChordQuality::SuspendedFourth => 0.4,
        ChordQuality::DominantSeventh
        | ChordQuality::MajorSeventh
        | ChordQuality::MinorSeventh => 0.5,
        ChordQuality::MajorNinth | ChordQuality::MinorNinth | ChordQuality::DominantNinth => 0.6,
        ChordQuality::MajorEleventh
        | ChordQuality::MinorEleventh
        | ChordQuality::DominantEleventh
        | ChordQuality::HalfDiminishedSeventh => 0.7,
        ChordQuality::Diminished
        | ChordQuality::DiminishedSeventh
        | ChordQuality::Augmented => 0.8,
    }
}

/// How unusual a root movement of `distance` scale degrees sounds
///
/// Fourths and fifths (3 and 4 steps) are the smoothest moves after
/// staying put; a seventh is the least expected.
pub fn interval_complexity(distance: u32) -> f64 {
    match distance {
        0 => 0.2,
        1 => 0.5,
        2 => 0.4,
        3 | 4 => 0.3,
        5 => 0.6,
        6 => 0.9,
        _ => NEUTRAL,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn clamp(score: f64) -> f64 {
    score.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY)
}

/// Score a pattern's harmonic complexity
pub fn calculate_pattern_complexity(pattern: &[PatternStep]) -> f64 {
    if pattern.len() < 2 {
        return MIN_COMPLEXITY;
    }

    let quality_score =
        mean(pattern.iter().filter_map(|s| s.quality).map(quality_complexity)).unwrap_or(NEUTRAL);

    if pattern.iter().all(|s| s.degree.is_none()) {
        return clamp(quality_score);
    }

    let interval_score = mean(pattern.windows(2).filter_map(|pair| {
        let (a, b) = (pair[0].degree?, pair[1].degree?);
        Some(interval_complexity(a.abs_diff(b)))
    }))
    .unwrap_or(NEUTRAL);

    clamp(INTERVAL_WEIGHT * interval_score + QUALITY_WEIGHT * quality_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_short_patterns_are_minimal() {
        assert_eq!(calculate_pattern_complexity(&[]), MIN_COMPLEXITY);
        assert_eq!(
            calculate_pattern_complexity(&[PatternStep::new(5, ChordQuality::Augmented)]),
            MIN_COMPLEXITY
        );
    }

    #[test]
    fn test_simple_progression() {
        // I-IV-V: moves of 3 and 1 degrees, all major
        let pattern = [
            PatternStep::new(1, ChordQuality::Major),
            PatternStep::new(4, ChordQuality::Major),
            PatternStep::new(5, ChordQuality::Major),
        ];
        let expected = 0.7 * ((0.3 + 0.5) / 2.0) + 0.3 * 0.2;
        assert!(close(calculate_pattern_complexity(&pattern), expected));
    }

    #[test]
    fn test_quality_only_pattern() {
        let pattern = [
            PatternStep::quality_only(ChordQuality::Diminished),
            PatternStep::quality_only(ChordQuality::Augmented),
        ];
        assert!(close(calculate_pattern_complexity(&pattern), 0.8));

        let pattern = [
            PatternStep::quality_only(ChordQuality::Major),
            PatternStep::quality_only(ChordQuality::Major),
        ];
        assert!(close(calculate_pattern_complexity(&pattern), 0.2));
    }

    #[test]
    fn test_missing_qualities_are_neutral() {
        let pattern = [PatternStep::degree_only(1), PatternStep::degree_only(1)];
        let expected = 0.7 * 0.2 + 0.3 * 0.5;
        assert!(close(calculate_pattern_complexity(&pattern), expected));
    }

    #[test]
    fn test_no_adjacent_degrees() {
        let pattern = [
            PatternStep::degree_only(1),
            PatternStep::quality_only(ChordQuality::Major),
            PatternStep::degree_only(5),
        ];
        let expected = 0.7 * 0.5 + 0.3 * 0.2;
        assert!(close(calculate_pattern_complexity(&pattern), expected));
    }

    #[test]
    fn test_out_of_table_distance() {
        assert_eq!(interval_complexity(9), NEUTRAL);
    }

    #[test]
    fn test_score_bounds() {
        let mut patterns = Vec::new();
        for a in 1..=7 {
            for b in 1..=7 {
                for quality in ChordQuality::ALL {
                    patterns.push(vec![
                        PatternStep::new(a, quality),
                        PatternStep::new(b, quality),
                        PatternStep::new(a, ChordQuality::Major),
                    ]);
                }
            }
        }
        for pattern in patterns {
            let score = calculate_pattern_complexity(&pattern);
            assert!(
                (MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&score),
                "{:?} scored {}",
                pattern,
                score
            );
        }
    }

    #[test]
    fn test_leaps_score_higher_than_steps() {
        let fifths = [
            PatternStep::new(1, ChordQuality::Major),
            PatternStep::new(5, ChordQuality::Major),
        ];
        let sevenths = [
            PatternStep::new(1, ChordQuality::Major),
            PatternStep::new(7, ChordQuality::Major),
        ];
        assert!(calculate_pattern_complexity(&sevenths) > calculate_pattern_complexity(&fifths));
    }
}
