// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named Roman-numeral progressions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Pattern;

/// Built-in presets as `(name, numerals, tags)`
const BUILTIN_PRESETS: &[(&str, &[&str], &[&str])] = &[
    ("I-IV-V", &["I", "IV", "V"], &["basic"]),
    ("I-IV-V-I", &["I", "IV", "V", "I"], &["basic"]),
    ("I-V-vi-IV", &["I", "V", "vi", "IV"], &["pop"]),
    ("ii-V-I", &["ii", "V", "I"], &["jazz"]),
    ("I-vi-IV-V", &["I", "vi", "IV", "V"], &["fifties"]),
    ("I-V-IV", &["I", "V", "IV"], &["rock"]),
    ("ii-V-I-IV", &["ii", "V", "I", "IV"], &["jazz"]),
    ("I-IV-I-V", &["I", "IV", "I", "V"], &["blues"]),
    (
        "Canon",
        &["I", "V", "vi", "iii", "IV", "I", "IV", "V"],
        &["classical", "pop"],
    ),
    ("i-iv-v", &["i", "iv", "v"], &["minor"]),
    ("i-VI-III-VII", &["i", "VI", "III", "VII"], &["minor"]),
];

/// A named progression written as Roman numerals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub numerals: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Preset {
    pub fn new<S: Into<String>>(name: impl Into<String>, numerals: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            numerals: numerals.into_iter().map(Into::into).collect(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Numerals as a generator pattern
    pub fn pattern(&self) -> Pattern {
        Pattern::Numerals(self.numerals.clone())
    }
}

/// Preset lookup by name
///
/// Registering a name twice keeps the later definition and logs a warning.
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: BTreeMap<String, Preset>,
}

impl PresetLibrary {
    /// Empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the built-in presets
    pub fn with_builtins() -> Self {
        let mut library = Self::new();
        for &(name, numerals, tags) in BUILTIN_PRESETS {
            library.register(Preset::new(name, numerals.iter().copied()).with_tags(tags.iter().copied()));
        }
        library
    }

    /// Add a preset, replacing any existing one with the same name
    pub fn register(&mut self, preset: Preset) {
        if let Some(previous) = self.presets.get(&preset.name) {
            if previous != &preset {
                warn!(
                    name = %preset.name,
                    previous = ?previous.numerals,
                    replacement = ?preset.numerals,
                    "duplicate preset name, keeping the later definition"
                );
            } else {
                warn!(name = %preset.name, "preset registered twice");
            }
        }
        self.presets.insert(preset.name.clone(), preset);
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Preset names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    /// Presets carrying a tag
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Preset> + 'a {
        self.presets.values().filter(move |p| p.tags.iter().any(|t| t == tag))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Extend<Preset> for PresetLibrary {
    fn extend<I: IntoIterator<Item = Preset>>(&mut self, iter: I) {
        for preset in iter {
            self.register(preset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let library = PresetLibrary::with_builtins();
        assert_eq!(library.len(), 11);
        assert_eq!(library.get("ii-V-I").unwrap().numerals, vec!["ii", "V", "I"]);
        assert_eq!(library.get("Canon").unwrap().numerals.len(), 8);
        assert!(library.get("Funk Groove").is_none());
    }

    #[test]
    fn test_builtin_numerals_parse() {
        let library = PresetLibrary::with_builtins();
        for preset in library.iter() {
            let steps = preset.pattern().steps().unwrap();
            assert_eq!(steps.len(), preset.numerals.len(), "{}", preset.name);
        }
    }

    #[test]
    fn test_duplicate_last_wins() {
        let mut library = PresetLibrary::new();
        library.register(Preset::new("Funk Groove", ["i", "IV"]));
        library.register(Preset::new("Funk Groove", ["i7", "IV7", "i7"]));
        assert_eq!(library.len(), 1);
        assert_eq!(library.get("Funk Groove").unwrap().numerals, vec!["i7", "IV7", "i7"]);
    }

    #[test]
    fn test_user_preset_overrides_builtin() {
        let mut library = PresetLibrary::with_builtins();
        library.extend([Preset::new("I-IV-V", ["I", "IV", "V7"])]);
        assert_eq!(library.len(), 11);
        assert_eq!(library.get("I-IV-V").unwrap().numerals[2], "V7");
    }

    #[test]
    fn test_names_sorted_and_tags() {
        let library = PresetLibrary::with_builtins();
        let names = library.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let minor: Vec<&str> = library.tagged("minor").map(|p| p.name.as_str()).collect();
        assert_eq!(minor, vec!["i-VI-III-VII", "i-iv-v"]);
    }
}
