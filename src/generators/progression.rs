// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progressions and the generator that builds them.
//!
//! The generator is stateless apart from its key and optional seed. Every
//! entry point resolves a list of [`PatternStep`]s, then builds chords on
//! the resolved degrees. Nothing is returned until every chord is valid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::complexity;
use super::genre::{self, Genre};
use super::presets::PresetLibrary;
use super::{step_degree, MidiEvent, Pattern, PatternStep};
use crate::error::{Result, TheoryError};
use crate::music::pitch::{Spelling, DEFAULT_OCTAVE};
use crate::music::{
    Accidental, Chord, ChordQuality, NoteName, Pitch, RomanNumeral, ScaleContext, ScaleType,
};

/// Most chords a progression may hold
pub const MAX_CHORDS: usize = 32;

/// Length used for genre patterns when none is requested
pub const DEFAULT_LENGTH: usize = 4;

/// Complexity target used when a request carries none
pub const DEFAULT_COMPLEXITY_TARGET: f64 = 0.5;

fn check_length(length: usize) -> Result<()> {
    if (1..=MAX_CHORDS).contains(&length) {
        Ok(())
    } else {
        Err(TheoryError::InvalidLength(length))
    }
}

fn check_complexity(complexity: f64) -> Result<()> {
    if (0.0..=1.0).contains(&complexity) {
        Ok(())
    } else {
        Err(TheoryError::InvalidComplexity(complexity))
    }
}

/// An ordered, non-empty list of chords in a key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordProgression {
    name: String,
    key: String,
    scale_type: ScaleType,
    chords: Vec<Chord>,
    complexity: f64,
}

impl ChordProgression {
    /// Create a progression of 1-32 chords with complexity in 0.0-1.0
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        scale_type: ScaleType,
        chords: Vec<Chord>,
        complexity: f64,
    ) -> Result<Self> {
        check_length(chords.len())?;
        check_complexity(complexity)?;
        Ok(Self {
            name: name.into(),
            key: key.into(),
            scale_type,
            chords,
            complexity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Never true for a constructed progression
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chord symbols in order, e.g. `["C", "F", "G7"]`
    pub fn symbols(&self) -> Vec<String> {
        self.chords.iter().map(Chord::symbol).collect()
    }

    /// Roman numerals relative to the key; `None` for non-diatonic roots
    pub fn numerals(&self) -> Result<Vec<Option<RomanNumeral>>> {
        let key = Pitch::new(NoteName::parse(&self.key)?, DEFAULT_OCTAVE)?;
        let context = ScaleContext::new(key, self.scale_type);
        self.chords
            .iter()
            .map(|chord| match context.degree_of(chord.root()) {
                Some(degree) => RomanNumeral::new(degree as i32, chord.quality()).map(Some),
                None => Ok(None),
            })
            .collect()
    }

    /// Move every chord and the key by `semitones`
    pub fn transpose(&self, semitones: i32) -> Result<Self> {
        let key = NoteName::parse(&self.key)?;
        let spelling = match key.accidental() {
            Accidental::Flat => Spelling::Flats,
            _ => Spelling::Sharps,
        };
        let key_pc = (key.pitch_class() as i32 + semitones.rem_euclid(12)).rem_euclid(12) as u8;
        let chords = self
            .chords
            .iter()
            .map(|chord| chord.transpose(semitones))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: self.name.clone(),
            key: NoteName::from_pitch_class(key_pc, spelling).to_string(),
            scale_type: self.scale_type,
            chords,
            complexity: self.complexity,
        })
    }

    /// Length in beats, each chord lasting its root's duration
    pub fn total_duration(&self) -> f64 {
        self.chords.iter().map(|c| c.root().duration()).sum()
    }

    /// Render as note events, chords played back to back
    ///
    /// Every note of a chord starts together and lasts the root's duration.
    pub fn to_events(&self, ppqn: u32) -> Vec<MidiEvent> {
        let mut events = Vec::new();
        let mut tick = 0u64;
        for chord in &self.chords {
            let ticks = (chord.root().duration() * ppqn as f64).round() as u64;
            for note in chord.notes() {
                events.push(MidiEvent::new(note.midi_number(), note.velocity(), tick, ticks));
            }
            tick += ticks;
        }
        events
    }
}

/// Inputs for [`ChordProgressionGenerator::generate_advanced`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedRequest {
    #[serde(default)]
    pub pattern: Option<Pattern>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default = "default_complexity_target")]
    pub complexity_target: f64,
}

fn default_complexity_target() -> f64 {
    DEFAULT_COMPLEXITY_TARGET
}

impl Default for AdvancedRequest {
    fn default() -> Self {
        Self {
            pattern: None,
            genre: None,
            length: None,
            complexity_target: DEFAULT_COMPLEXITY_TARGET,
        }
    }
}

/// Qualities forced onto an advanced progression, cycled by position
fn complexity_band(target: f64) -> &'static [ChordQuality] {
    if target <= 0.3 {
        &[ChordQuality::Major, ChordQuality::Minor]
    } else if target <= 0.6 {
        &[
            ChordQuality::MajorSeventh,
            ChordQuality::MinorSeventh,
            ChordQuality::DominantSeventh,
        ]
    } else {
        &[ChordQuality::HalfDiminishedSeventh, ChordQuality::DominantSeventh]
    }
}

/// Builds chord progressions in one key
#[derive(Debug, Clone)]
pub struct ChordProgressionGenerator {
    context: ScaleContext,
    name: Option<String>,
    seed: Option<u64>,
}

impl ChordProgressionGenerator {
    pub fn new(context: ScaleContext) -> Self {
        Self {
            context,
            name: None,
            seed: None,
        }
    }

    /// Name every generated progression `name`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Seed random sampling so repeated calls give identical output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn context(&self) -> &ScaleContext {
        &self.context
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate from a pattern, or a random progression of `length` chords
    ///
    /// A non-empty pattern takes precedence over the length.
    pub fn generate(&self, pattern: Option<&Pattern>, length: Option<usize>) -> Result<ChordProgression> {
        if let Some(pattern) = pattern.filter(|p| !p.is_empty()) {
            return self.build(&pattern.steps()?, None);
        }
        match length {
            Some(length) => self.generate_random(length),
            None => Err(TheoryError::MissingPattern),
        }
    }

    /// Random progression with diatonic qualities
    pub fn generate_random(&self, length: usize) -> Result<ChordProgression> {
        let steps = self.random_steps(length)?;
        self.build(&steps, Some("random"))
    }

    /// Progression from parallel degree and quality lists
    ///
    /// A missing quality is major.
    pub fn generate_custom(
        &self,
        degrees: &[i32],
        qualities: &[Option<ChordQuality>],
    ) -> Result<ChordProgression> {
        if degrees.len() != qualities.len() {
            return Err(TheoryError::LengthMismatch {
                degrees: degrees.len(),
                qualities: qualities.len(),
            });
        }
        let steps: Vec<PatternStep> = degrees
            .iter()
            .zip(qualities)
            .map(|(&degree, &quality)| PatternStep {
                degree: Some(degree),
                quality: Some(quality.unwrap_or(ChordQuality::Major)),
            })
            .collect();
        self.build(&steps, None)
    }

    /// Genre template stretched or cut to `length`; unknown genres use pop
    pub fn generate_genre_specific_pattern(&self, genre: &str, length: usize) -> Result<ChordProgression> {
        check_length(length)?;
        let genre = Genre::parse_or_pop(genre);
        let label = format!("{} progression", genre);
        self.build(&genre.pattern(length), Some(&label))
    }

    /// Pattern with its first resolvable chord turned into a dominant seventh
    pub fn generate_with_tension_resolution(&self, pattern: &Pattern) -> Result<ChordProgression> {
        if pattern.is_empty() {
            return Err(TheoryError::MissingPattern);
        }
        let steps = genre::apply_tension_resolution(&pattern.steps()?);
        self.build(&steps, None)
    }

    /// Score a pattern between 0.1 and 0.9
    pub fn calculate_pattern_complexity(&self, pattern: &[PatternStep]) -> f64 {
        complexity::calculate_pattern_complexity(pattern)
    }

    /// Generate with qualities chosen by a complexity target
    ///
    /// Degrees come from the pattern, then the genre, then random sampling.
    /// Qualities are replaced by the target's band. This is a single attempt:
    /// the result's complexity is reported as computed, not searched toward
    /// the target.
    pub fn generate_advanced(&self, request: &AdvancedRequest) -> Result<ChordProgression> {
        check_complexity(request.complexity_target)?;

        let steps = match (&request.pattern, &request.genre, request.length) {
            (Some(pattern), _, _) if !pattern.is_empty() => pattern.steps()?,
            (_, Some(genre), length) => {
                let length = length.unwrap_or(DEFAULT_LENGTH);
                check_length(length)?;
                Genre::parse_or_pop(genre).pattern(length)
            }
            (_, None, Some(length)) => self.random_steps(length)?,
            _ => return Err(TheoryError::MissingPattern),
        };

        let band = complexity_band(request.complexity_target);
        let steps: Vec<PatternStep> = steps
            .iter()
            .enumerate()
            .map(|(i, step)| PatternStep {
                degree: step.degree,
                quality: Some(band[i % band.len()]),
            })
            .collect();

        let progression = self.build(&steps, None)?;
        debug!(
            target = request.complexity_target,
            actual = progression.complexity(),
            "advanced generation finished"
        );
        Ok(progression)
    }

    /// Progression from a named preset
    pub fn generate_from_preset(&self, library: &PresetLibrary, name: &str) -> Result<ChordProgression> {
        let preset = library
            .get(name)
            .ok_or_else(|| TheoryError::UnknownPreset(name.to_string()))?;
        self.build(&preset.pattern().steps()?, Some(&preset.name))
    }

    /// `length` random degrees, each with its diatonic quality
    pub fn random_steps(&self, length: usize) -> Result<Vec<PatternStep>> {
        check_length(length)?;
        let mut rng = self.rng();
        (0..length)
            .map(|_| {
                let degree = rng.gen_range(1..=7);
                Ok(PatternStep::new(degree, self.context.diatonic_quality(degree)?))
            })
            .collect()
    }

    fn build(&self, steps: &[PatternStep], label: Option<&str>) -> Result<ChordProgression> {
        check_length(steps.len())?;

        let mut chords = Vec::with_capacity(steps.len());
        let mut resolved = Vec::with_capacity(steps.len());
        let mut numerals = Vec::with_capacity(steps.len());
        for step in steps {
            let degree = step_degree(step)?;
            let quality = step.quality.unwrap_or(ChordQuality::Major);
            let chord = Chord::triad(self.context.note_for_degree(degree)?, quality)?;
            debug!(degree, quality = %quality, chord = %chord, "resolved chord");
            chords.push(chord);
            resolved.push(PatternStep::new(degree, quality));
            numerals.push(RomanNumeral::new(degree, quality)?.to_string());
        }

        let name = match (&self.name, label) {
            (Some(name), _) => name.clone(),
            (None, Some(label)) => format!("{} in {}", label, self.context),
            (None, None) => format!("{} in {}", numerals.join("-"), self.context),
        };

        let complexity = complexity::calculate_pattern_complexity(&resolved);
        let progression = ChordProgression::new(
            name,
            self.context.key_name(),
            self.context.scale_type(),
            chords,
            complexity,
        )?;
        info!(
            name = %progression.name(),
            chords = progression.len(),
            complexity,
            "generated progression"
        );
        Ok(progression)
    }
}
