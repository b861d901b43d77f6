// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the keyscope command line.
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty file (or no file) gives C Major with a four-chord random line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{Note, ScaleType, DEFAULT_PROGRESSION_LENGTH};
use crate::render::{Links, BACKING_TRACK_BASE, CHORD_LOOKUP_BASE};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Root note (e.g., "C", "F#")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale type display name (e.g., "Major", "Pentatonic Minor")
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Number of chords in the random progression
    #[serde(default = "default_progression_length")]
    pub progression_length: usize,
    /// Seed for a reproducible random progression
    #[serde(default)]
    pub seed: Option<u64>,
    /// Show interval descriptions and chord links
    #[serde(default)]
    pub show_descriptions: bool,
    /// Link bases
    #[serde(default)]
    pub links: LinkConfig,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "Major".to_string()
}
fn default_progression_length() -> usize {
    DEFAULT_PROGRESSION_LENGTH
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            scale: default_scale(),
            progression_length: default_progression_length(),
            seed: None,
            show_descriptions: false,
            links: LinkConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
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

    /// Parsed root note
    pub fn root(&self) -> Result<Note> {
        self.key
            .parse::<Note>()
            .with_context(|| format!("Invalid key in configuration: {:?}", self.key))
    }

    /// Parsed scale type
    pub fn scale_type(&self) -> Result<ScaleType> {
        self.scale
            .parse::<ScaleType>()
            .with_context(|| format!("Invalid scale in configuration: {:?}", self.scale))
    }

    /// Parsed link bases
    pub fn links(&self) -> Result<Links> {
        Links::new(&self.links.chord_lookup, &self.links.backing_tracks)
            .context("Invalid link configuration")
    }

    /// Check that every setting resolves
    pub fn validate(&self) -> Result<()> {
        self.root()?;
        self.scale_type()?;
        self.links()?;
        Ok(())
    }
}

/// Base URLs for chord lookup and backing tracks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    /// Chord lookup base; the chord symbol is appended as a path segment
    #[serde(default = "default_chord_lookup")]
    pub chord_lookup: String,
    /// Backing-track search page
    #[serde(default = "default_backing_tracks")]
    pub backing_tracks: String,
}

fn default_chord_lookup() -> String {
    CHORD_LOOKUP_BASE.to_string()
}
fn default_backing_tracks() -> String {
    BACKING_TRACK_BASE.to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            chord_lookup: default_chord_lookup(),
            backing_tracks: default_backing_tracks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
key: "F#"
scale: "Pentatonic Minor"
progression_length: 3
seed: 42
show_descriptions: true
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key, "F#");
        assert_eq!(config.scale, "Pentatonic Minor");
        assert_eq!(config.progression_length, 3);
        assert_eq!(config.seed, Some(42));
        assert!(config.show_descriptions);
        assert_eq!(config.root().unwrap(), Note::Fs);
        assert_eq!(config.scale_type().unwrap(), ScaleType::PentatonicMinor);
        assert_eq!(config.links.chord_lookup, CHORD_LOOKUP_BASE);
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::from_yaml("seed: 7\n").unwrap();
        assert_eq!(config.key, "C");
        assert_eq!(config.scale, "Major");
        assert_eq!(config.progression_length, 4);
        assert!(!config.show_descriptions);
        assert_eq!(config.links, LinkConfig::default());

        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_custom_links() {
        let yaml = r#"
links:
  chord_lookup: "https://example.com/chords/"
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.links.backing_tracks, BACKING_TRACK_BASE);
        let links = config.links().unwrap();
        assert_eq!(
            links.chord_url("Am").as_str(),
            "https://example.com/chords/Am"
        );
    }

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let config = AppConfig {
            key: "H".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid key"));

        let config = AppConfig {
            scale: "Atonal".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.links.backing_tracks = "nowhere".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip() {
        let original = AppConfig {
            key: "D#".to_string(),
            scale: "Dorian".to_string(),
            progression_length: 5,
            seed: Some(11),
            show_descriptions: true,
            links: LinkConfig::default(),
        };

        let yaml = original.to_yaml().unwrap();
        let parsed = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(AppConfig::from_yaml("key: [unclosed").is_err());
        assert!(AppConfig::load("/nonexistent/keyscope.yaml").is_err());
    }
}
