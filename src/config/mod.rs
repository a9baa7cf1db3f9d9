// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for notegen.
//!
//! This module loads generator settings (key, scale, note timing, seed,
//! complexity target) and user progression presets from YAML or TOML.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::generators::{ChordProgressionGenerator, Preset, PresetLibrary};
use crate::music::pitch::{DEFAULT_DURATION, DEFAULT_OCTAVE, DEFAULT_VELOCITY};
use crate::music::{NoteName, Pitch, ScaleContext, ScaleType};

/// Generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Name given to generated progressions (derived from the pattern if unset)
    #[serde(default)]
    pub name: Option<String>,
    /// Key without octave (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale type ("major" or "minor")
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Octave of the tonic (0-8)
    #[serde(default = "default_octave")]
    pub octave: u8,
    /// Beats per chord
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Note velocity (0-127)
    #[serde(default = "default_velocity")]
    pub velocity: u8,
    /// Seed for random generation
    #[serde(default)]
    pub seed: Option<u64>,
    /// Complexity target for advanced generation (0.0 - 1.0)
    #[serde(default)]
    pub complexity: Option<f64>,
    /// User progression presets
    #[serde(default)]
    pub presets: Vec<Preset>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}
fn default_octave() -> u8 {
    DEFAULT_OCTAVE
}
fn default_duration() -> f64 {
    DEFAULT_DURATION
}
fn default_velocity() -> u8 {
    DEFAULT_VELOCITY
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: None,
            key: default_key(),
            scale: default_scale(),
            octave: default_octave(),
            duration: default_duration(),
            velocity: default_velocity(),
            seed: None,
            complexity: None,
            presets: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration file; `.toml` files are read as TOML, anything
    /// else as YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Resolve key, scale, octave and note timing into a scale context
    pub fn scale_context(&self) -> Result<ScaleContext> {
        let name = NoteName::parse(&self.key).with_context(|| format!("Invalid key {:?}", self.key))?;
        let scale_type = ScaleType::parse(&self.scale)
            .with_context(|| format!("Invalid scale {:?}", self.scale))?;
        let tonic = Pitch::new(name, self.octave)
            .and_then(|p| p.with_duration(self.duration))
            .and_then(|p| p.with_velocity(self.velocity))
            .context("Invalid tonic settings")?;
        Ok(ScaleContext::new(tonic, scale_type))
    }

    /// Built-in presets overlaid with the configured ones
    pub fn preset_library(&self) -> PresetLibrary {
        let mut library = PresetLibrary::with_builtins();
        library.extend(self.presets.iter().cloned());
        library
    }

    /// Generator for this key, seeded and named as configured
    pub fn generator(&self) -> Result<ChordProgressionGenerator> {
        if let Some(target) = self.complexity {
            if !(0.0..=1.0).contains(&target) {
                bail!("complexity must be between 0.0 and 1.0, got {}", target);
            }
        }
        let mut generator = ChordProgressionGenerator::new(self.scale_context()?);
        if let Some(seed) = self.seed {
            generator = generator.with_seed(seed);
        }
        if let Some(name) = &self.name {
            generator = generator.with_name(name);
        }
        Ok(generator)
    }
}

/// Load a config file and check that it yields a usable generator
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let config = GeneratorConfig::load(path)?;
    config.generator()?;
    for preset in &config.presets {
        preset
            .pattern()
            .steps()
            .with_context(|| format!("Invalid numerals in preset {:?}", preset.name))?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use crate::music::pitch::Spelling;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
name: "Verse"
key: "Bb"
scale: "minor"
octave: 3
duration: 2.0
velocity: 90
seed: 42
complexity: 0.4
presets:
  - name: "Funk Groove"
    numerals: ["i7", "IV7"]
    tags: ["funk"]
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name.as_deref(), Some("Verse"));
        assert_eq!(config.key, "Bb");
        assert_eq!(config.octave, 3);
        assert_eq!(config.duration, 2.0);
        assert_eq!(config.velocity, 90);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.complexity, Some(0.4));
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets[0].tags, vec!["funk"]);
    }

    #[test]
    fn test_default_values() {
        let config = GeneratorConfig::from_yaml("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.key, "C");
        assert_eq!(config.scale, "major");
        assert_eq!(config.octave, 4);
        assert_eq!(config.duration, 1.0);
        assert_eq!(config.velocity, 64);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_scale_context() {
        let config = GeneratorConfig {
            key: "Eb".to_string(),
            octave: 3,
            duration: 0.5,
            ..Default::default()
        };
        let context = config.scale_context().unwrap();
        assert_eq!(context.key().full_name(), "Eb3");
        assert_eq!(context.key().duration(), 0.5);
        assert_eq!(context.spelling(), Spelling::Flats);
    }

    #[test]
    fn test_invalid_settings() {
        let bad_key = GeneratorConfig {
            key: "H".to_string(),
            ..Default::default()
        };
        assert!(bad_key.scale_context().is_err());

        let bad_scale = GeneratorConfig {
            scale: "dorian".to_string(),
            ..Default::default()
        };
        assert!(bad_scale.generator().is_err());

        let bad_octave = GeneratorConfig {
            octave: 9,
            ..Default::default()
        };
        assert!(bad_octave.scale_context().is_err());

        let bad_complexity = GeneratorConfig {
            complexity: Some(2.0),
            ..Default::default()
        };
        assert!(bad_complexity.generator().is_err());
    }

    #[test]
    fn test_generator_is_seeded() {
        let config = GeneratorConfig {
            seed: Some(9),
            name: Some("Bridge".to_string()),
            ..Default::default()
        };
        let generator = config.generator().unwrap();
        assert_eq!(generator.seed(), Some(9));
        let progression = generator.generate(None, Some(4)).unwrap();
        assert_eq!(progression.name(), "Bridge");
        assert_eq!(progression, config.generator().unwrap().generate(None, Some(4)).unwrap());
    }

    #[test]
    fn test_preset_library_overlay() {
        let config = GeneratorConfig::from_yaml(
            r#"
presets:
  - name: "ii-V-I"
    numerals: ["ii7", "V7", "IΔ"]
  - name: "Funk Groove"
    numerals: ["i", "IV"]
  - name: "Funk Groove"
    numerals: ["i7", "IV7"]
"#,
        )
        .unwrap();
        let library = config.preset_library();
        assert_eq!(library.len(), 12);
        assert_eq!(library.get("ii-V-I").unwrap().numerals, vec!["ii7", "V7", "IΔ"]);
        assert_eq!(library.get("Funk Groove").unwrap().numerals, vec!["i7", "IV7"]);
    }

    #[test]
    fn test_load_yaml_and_toml() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("settings.yaml");
        fs::write(&yaml_path, "key: \"G\"\nscale: \"major\"\n").unwrap();
        assert_eq!(GeneratorConfig::load(&yaml_path).unwrap().key, "G");

        let toml_path = dir.path().join("settings.toml");
        fs::write(
            &toml_path,
            "key = \"D\"\nscale = \"minor\"\nseed = 5\n\n[[presets]]\nname = \"Sad\"\nnumerals = [\"i\", \"iv\"]\n",
        )
        .unwrap();
        let config = GeneratorConfig::load(&toml_path).unwrap();
        assert_eq!(config.key, "D");
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.presets[0].name, "Sad");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.yaml");

        let config = GeneratorConfig {
            key: "F#".to_string(),
            seed: Some(1),
            presets: vec![Preset::new("Loop", ["I", "V"])],
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_config() {
        let dir = tempdir().unwrap();

        let good = dir.path().join("good.yaml");
        fs::write(&good, "key: \"A\"\nscale: \"minor\"\n").unwrap();
        assert!(validate_config(&good).is_ok());

        let bad_preset = dir.path().join("bad_preset.yaml");
        fs::write(&bad_preset, "presets:\n  - name: \"Broken\"\n    numerals: [\"X\"]\n").unwrap();
        assert!(validate_config(&bad_preset).is_err());

        let invalid = dir.path().join("invalid.yaml");
        fs::write(&invalid, "this is not valid yaml: [").unwrap();
        assert!(validate_config(&invalid).is_err());

        assert!(validate_config(dir.path().join("missing.yaml")).is_err());
    }
}
