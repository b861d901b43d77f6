// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key derivation: applying a scale definition to a root note.
//!
//! Scale formulas are resolved once into interval lists by [`ScaleEngine`].
//! Each derivation then maps the intervals onto absolute notes, numbers the
//! degrees, and pairs each degree with its chord from the progression.

use std::fmt;

use lazy_static::lazy_static;
use tracing::{debug, warn};

use super::scale::{ChordStep, Interval, Note, ScaleDefinition, ScaleType, BUILTIN_SCALES};
use crate::error::ScaleError;

lazy_static! {
    static ref BUILTIN_ENGINE: Result<ScaleEngine, ScaleError> =
        ScaleEngine::from_definitions(&BUILTIN_SCALES);
}

/// A chord built on one scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    /// Roman-numeral degree label
    pub numeral: &'static str,
    /// Chord root
    pub root: Note,
    /// Quality suffix ("" for a major triad)
    pub quality: &'static str,
}

impl Chord {
    fn new(root: Note, step: &ChordStep) -> Self {
        Self {
            numeral: step.numeral,
            root,
            quality: step.quality,
        }
    }

    /// Chord symbol: root name followed by the quality suffix ("Dm", "C", "G#dim")
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root, self.quality)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// One degree of a derived key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    /// 1-based position in the scale formula
    pub number: usize,
    /// Interval above the root, as spelled in the formula
    pub interval: Interval,
    /// Absolute note
    pub note: Note,
    /// Chord on this degree, when the scale has a progression
    pub chord: Option<Chord>,
}

/// Relative key labels for a root
///
/// The two labels are asymmetric: `R` read as a minor key has
/// its relative major three semitones up, and `R` read as a major key has
/// its relative minor three semitones down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeKeys {
    /// The root note
    pub root: Note,
    /// Relative major of the root's minor key (root + 3)
    pub relative_major: Note,
    /// Relative minor of the root's major key (root - 3)
    pub relative_minor: Note,
}

impl RelativeKeys {
    /// Compute the relative keys for a root
    pub fn new(root: Note) -> Self {
        let r = root.index() as i32;
        Self {
            root,
            relative_major: Note::from_index(r + 3),
            relative_minor: Note::from_index(r - 3),
        }
    }

    /// "Cm=D#": the root's minor key and its relative major
    pub fn minor_line(&self) -> String {
        format!("{}m={}", self.root, self.relative_major)
    }

    /// "C=Am": the root's major key and its relative minor
    pub fn major_line(&self) -> String {
        format!("{}={}m", self.root, self.relative_minor)
    }
}

/// Result of applying a scale to a root note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    root: Note,
    scale_type: ScaleType,
    scale_name: &'static str,
    relative: RelativeKeys,
    degrees: Vec<Degree>,
    has_progression: bool,
}

impl DerivedKey {
    /// Root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Scale type
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Display name of the scale
    pub fn scale_name(&self) -> &'static str {
        self.scale_name
    }

    /// Relative major/minor labels
    pub fn relative(&self) -> &RelativeKeys {
        &self.relative
    }

    /// Degrees in formula order
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Number of degrees
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True when the scale has no degrees (never the case for builtin scales)
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Absolute notes in degree order
    pub fn notes(&self) -> Vec<Note> {
        self.degrees.iter().map(|d| d.note).collect()
    }

    /// Intervals in degree order
    pub fn intervals(&self) -> Vec<Interval> {
        self.degrees.iter().map(|d| d.interval).collect()
    }

    /// Whether the scale defines a chord progression
    pub fn has_progression(&self) -> bool {
        self.has_progression
    }

    /// Chords in degree order, or `None` for scales without a progression
    pub fn chords(&self) -> Option<Vec<Chord>> {
        if !self.has_progression {
            return None;
        }
        Some(self.degrees.iter().filter_map(|d| d.chord).collect())
    }

    /// Chord symbols in degree order, or `None` for scales without a progression
    pub fn chord_symbols(&self) -> Option<Vec<String>> {
        self.chords()
            .map(|chords| chords.iter().map(Chord::symbol).collect())
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_name)
    }
}

/// A scale definition with its formula resolved to intervals
#[derive(Debug, Clone)]
struct ResolvedScale {
    definition: &'static ScaleDefinition,
    intervals: Vec<Interval>,
}

impl ResolvedScale {
    fn resolve(definition: &'static ScaleDefinition) -> Result<Self, ScaleError> {
        let intervals = definition
            .formula_labels()
            .map(|label| {
                Interval::from_label(label).ok_or_else(|| ScaleError::UnknownIntervalLabel {
                    scale: definition.name.to_string(),
                    label: label.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(progression) = definition.progression {
            if progression.len() != intervals.len() {
                return Err(ScaleError::ProgressionLength {
                    scale: definition.name.to_string(),
                    intervals: intervals.len(),
                    chords: progression.len(),
                });
            }
        }

        Ok(Self {
            definition,
            intervals,
        })
    }
}

/// Validated scale table and the derivation over it
#[derive(Debug, Clone)]
pub struct ScaleEngine {
    scales: Vec<ResolvedScale>,
}

impl ScaleEngine {
    /// Resolve and validate a set of scale definitions.
    ///
    /// Fails on the first formula label missing from the interval table, or
    /// the first progression whose length differs from its formula.
    pub fn from_definitions(definitions: &'static [ScaleDefinition]) -> Result<Self, ScaleError> {
        let scales = definitions
            .iter()
            .map(ResolvedScale::resolve)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                warn!(error = %err, "scale table failed validation");
                err
            })?;

        Ok(Self { scales })
    }

    /// The engine over the builtin scale table, validated on first use
    pub fn builtin() -> Result<&'static ScaleEngine, ScaleError> {
        BUILTIN_ENGINE.as_ref().map_err(Clone::clone)
    }

    /// Scale types this engine knows, in table order
    pub fn scale_types(&self) -> Vec<ScaleType> {
        self.scales.iter().map(|s| s.definition.scale_type).collect()
    }

    /// Resolved intervals for a scale type
    pub fn intervals(&self, scale_type: ScaleType) -> Result<&[Interval], ScaleError> {
        Ok(&self.resolved(scale_type)?.intervals)
    }

    /// Rebuild a scale's formula string from its resolved intervals
    pub fn formula(&self, scale_type: ScaleType) -> Result<String, ScaleError> {
        let labels: Vec<&str> = self
            .intervals(scale_type)?
            .iter()
            .map(Interval::label)
            .collect();
        Ok(labels.join(", "))
    }

    /// Apply a scale to a root note
    pub fn derive(&self, root: Note, scale_type: ScaleType) -> Result<DerivedKey, ScaleError> {
        let scale = self.resolved(scale_type)?;
        let definition = scale.definition;
        let r = root.index() as i32;

        let degrees: Vec<Degree> = scale
            .intervals
            .iter()
            .enumerate()
            .map(|(i, &interval)| {
                let note = Note::from_index(r + interval.semitones() as i32);
                let chord = definition
                    .progression
                    .and_then(|progression| progression.get(i))
                    .map(|step| Chord::new(note, step));
                Degree {
                    number: i + 1,
                    interval,
                    note,
                    chord,
                }
            })
            .collect();

        debug!(
            root = %root,
            scale = definition.name,
            degrees = degrees.len(),
            "derived key"
        );

        Ok(DerivedKey {
            root,
            scale_type,
            scale_name: definition.name,
            relative: RelativeKeys::new(root),
            degrees,
            has_progression: definition.progression.is_some(),
        })
    }

    fn resolved(&self, scale_type: ScaleType) -> Result<&ResolvedScale, ScaleError> {
        self.scales
            .iter()
            .find(|s| s.definition.scale_type == scale_type)
            .ok_or_else(|| ScaleError::UnknownScale(scale_type.name().to_string()))
    }
}

/// Derive a key from a root note name and a scale type name
pub fn derive_key(root: &str, scale: &str) -> Result<DerivedKey, ScaleError> {
    let root: Note = root.parse()?;
    let scale_type: ScaleType = scale.parse()?;
    ScaleEngine::builtin()?.derive(root, scale_type)
}
