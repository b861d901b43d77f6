// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Static scale knowledge base.
//!
//! Provides the chromatic note table, the interval table with its
//! descriptions, and the builtin scale definitions pairing an interval
//! formula with the diatonic chord progression of each scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// Semitone offset type
pub type Semitones = i8;

/// Note names (pitch classes), in table order starting at A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    A,
    As, // A#
    B,
    C,
    Cs, // C#
    D,
    Ds, // D#
    E,
    F,
    Fs, // F#
    G,
    Gs, // G#
}

/// Default selection for the root note
pub const DEFAULT_ROOT: Note = Note::C;

impl Note {
    /// All notes in table order
    pub const ALL: [Note; 12] = [
        Note::A,
        Note::As,
        Note::B,
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
    ];

    /// Position of this note in the A-based table (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Note at a table position, wrapped into 0-11 (negative positions count down from A)
    pub fn from_index(index: i32) -> Self {
        Note::ALL[index.rem_euclid(12) as usize]
    }

    /// Canonical sharp-based name
    pub fn name(self) -> &'static str {
        match self {
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        Note::from_index(self.index() as i32 + semitones as i32)
    }
}

impl FromStr for Note {
    type Err = ScaleError;

    /// Parse one of the 12 canonical names ("C", "C#", ...). Flats are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Note::ALL
            .iter()
            .copied()
            .find(|note| note.name() == name)
            .ok_or_else(|| ScaleError::UnknownNote(s.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// List the note names for a root selector, in table order
pub fn list_note_names() -> Vec<&'static str> {
    Note::ALL.iter().map(|note| note.name()).collect()
}

/// An interval above the root: semitone offset, short label and description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    semitones: u8,
    label: &'static str,
    description: &'static str,
}

/// The 12 intervals, indexed by semitone offset
pub const INTERVALS: [Interval; 12] = [
    Interval::new(0, "1", "Unison"),
    Interval::new(1, "b2", "Minor Second"),
    Interval::new(2, "2", "Major Second"),
    Interval::new(3, "b3", "Minor Third"),
    Interval::new(4, "3", "Major Third"),
    Interval::new(5, "4", "Perfect Fourth"),
    Interval::new(6, "b5", "Tri-Tone"),
    Interval::new(7, "5", "Perfect Fifth"),
    Interval::new(8, "b6", "Minor Sixth"),
    Interval::new(9, "6", "Major Sixth"),
    Interval::new(10, "b7", "Minor Seventh"),
    Interval::new(11, "7", "Major Seventh"),
];

// Alternate spellings accepted in scale formulas. The description follows the offset.
const INTERVAL_ALIASES: [Interval; 1] = [Interval::new(6, "#4", "Tri-Tone")];

impl Interval {
    const fn new(semitones: u8, label: &'static str, description: &'static str) -> Self {
        Self {
            semitones,
            label,
            description,
        }
    }

    /// Canonical interval for a semitone offset (taken modulo 12)
    pub fn from_semitones(semitones: u8) -> Self {
        INTERVALS[(semitones % 12) as usize]
    }

    /// Look up an interval by label ("b3", "5", "#4")
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        INTERVALS
            .iter()
            .chain(INTERVAL_ALIASES.iter())
            .copied()
            .find(|interval| interval.label == label)
    }

    /// Semitones above the root (0-11)
    pub fn semitones(&self) -> u8 {
        self.semitones
    }

    /// Short label as spelled in the scale formula
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Human-readable name, suitable for a tooltip
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// One entry of a diatonic chord progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordStep {
    /// Roman-numeral degree label ("ii", "V")
    pub numeral: &'static str,
    /// Chord-quality suffix appended to the note name ("" for a major triad)
    pub quality: &'static str,
}

const fn step(numeral: &'static str, quality: &'static str) -> ChordStep {
    ChordStep { numeral, quality }
}

const MAJOR_PROGRESSION: [ChordStep; 7] = [
    step("I", ""),
    step("ii", "m"),
    step("iii", "m"),
    step("IV", ""),
    step("V", ""),
    step("vi", "m"),
    step("vii", "dim"),
];

const MINOR_PROGRESSION: [ChordStep; 7] = [
    step("i", "m"),
    step("ii", "dim"),
    step("III", ""),
    step("iv", "m"),
    step("v", "m"),
    step("VI", ""),
    step("VII", ""),
];

const PENTATONIC_MAJOR_PROGRESSION: [ChordStep; 5] = [
    step("I", ""),
    step("ii", "sus2"),
    step("iii", "5"),
    step("V", "sus4"),
    step("vi", "m"),
];

const PENTATONIC_MINOR_PROGRESSION: [ChordStep; 5] = [
    step("i", "m"),
    step("III", ""),
    step("iv", "m7"),
    step("v", "m7"),
    step("VII", "5"),
];

// Minor pentatonic chords plus the b5 passing degree.
const PENTATONIC_BLUES_PROGRESSION: [ChordStep; 6] = [
    step("i", "m"),
    step("III", ""),
    step("iv", "m"),
    step("bv", "dim"),
    step("v", "m"),
    step("VII", ""),
];

const DORIAN_PROGRESSION: [ChordStep; 7] = [
    step("i", "m"),
    step("ii", "m"),
    step("III", ""),
    step("IV", ""),
    step("v", "m"),
    step("vi", "dim"),
    step("VII", ""),
];

const PHRYGIAN_PROGRESSION: [ChordStep; 7] = [
    step("i", "m"),
    step("II", ""),
    step("III", ""),
    step("iv", "m"),
    step("v", "dim"),
    step("VI", ""),
    step("vii", "m"),
];

const LYDIAN_PROGRESSION: [ChordStep; 7] = [
    step("I", ""),
    step("II", ""),
    step("iii", "m"),
    step("iv", "dim"),
    step("V", ""),
    step("vi", "m"),
    step("vii", "m"),
];

const MIXOLYDIAN_PROGRESSION: [ChordStep; 7] = [
    step("I", ""),
    step("ii", "m"),
    step("iii", "dim"),
    step("IV", ""),
    step("v", "m"),
    step("vi", "m"),
    step("VII", ""),
];

/// Builtin scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    Minor,
    PentatonicMajor,
    PentatonicMinor,
    PentatonicBlues,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
}

impl ScaleType {
    /// All scale types in selector order
    pub const ALL: [ScaleType; 10] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::PentatonicBlues,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Static definition for this scale type
    pub fn definition(self) -> &'static ScaleDefinition {
        &BUILTIN_SCALES[self as usize]
    }
}

impl FromStr for ScaleType {
    type Err = ScaleError;

    /// Parse a scale type by display name, ignoring case, spaces, '-' and '_'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_scale_name(s);
        ScaleType::ALL
            .iter()
            .copied()
            .find(|scale_type| normalize_scale_name(scale_type.name()) == wanted)
            .ok_or_else(|| ScaleError::UnknownScale(s.to_string()))
    }
}

fn normalize_scale_name(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// List the scale type names for a scale selector, in table order
pub fn list_scale_types() -> Vec<&'static str> {
    ScaleType::ALL.iter().map(|scale_type| scale_type.name()).collect()
}

/// A named scale: interval formula plus optional chord progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDefinition {
    /// Scale type this definition belongs to
    pub scale_type: ScaleType,
    /// Display name
    pub name: &'static str,
    /// Comma-separated interval labels in scale-degree order
    pub formula: &'static str,
    /// One chord per degree, in the same order as the formula
    pub progression: Option<&'static [ChordStep]>,
}

impl ScaleDefinition {
    /// Interval labels of the formula, in degree order
    pub fn formula_labels(&self) -> impl Iterator<Item = &'static str> {
        self.formula.split(',').map(str::trim)
    }

    /// Number of degrees declared by the formula
    pub fn degree_count(&self) -> usize {
        self.formula_labels().count()
    }
}

/// Builtin scale table, indexed by `ScaleType as usize`
pub static BUILTIN_SCALES: [ScaleDefinition; 10] = [
    ScaleDefinition {
        scale_type: ScaleType::Major,
        name: "Major",
        formula: "1, 2, 3, 4, 5, 6, 7",
        progression: Some(&MAJOR_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Minor,
        name: "Minor",
        formula: "1, 2, b3, 4, 5, b6, b7",
        progression: Some(&MINOR_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::PentatonicMajor,
        name: "Pentatonic Major",
        formula: "1, 2, 3, 5, 6",
        progression: Some(&PENTATONIC_MAJOR_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::PentatonicMinor,
        name: "Pentatonic Minor",
        formula: "1, b3, 4, 5, b7",
        progression: Some(&PENTATONIC_MINOR_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::PentatonicBlues,
        name: "Pentatonic Blues",
        formula: "1, b3, 4, b5, 5, b7",
        progression: Some(&PENTATONIC_BLUES_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Dorian,
        name: "Dorian",
        formula: "1, 2, b3, 4, 5, 6, b7",
        progression: Some(&DORIAN_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Phrygian,
        name: "Phrygian",
        formula: "1, b2, b3, 4, 5, b6, b7",
        progression: Some(&PHRYGIAN_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Lydian,
        name: "Lydian",
        formula: "1, 2, 3, #4, 5, 6, 7",
        progression: Some(&LYDIAN_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Mixolydian,
        name: "Mixolydian",
        formula: "1, 2, 3, 4, 5, 6, b7",
        progression: Some(&MIXOLYDIAN_PROGRESSION),
    },
    ScaleDefinition {
        scale_type: ScaleType::Locrian,
        name: "Locrian",
        formula: "1, b2, b3, 4, b5, b6, b7",
        progression: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_table_order() {
        assert_eq!(
            list_note_names(),
            vec!["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]
        );
        assert_eq!(Note::A.index(), 0);
        assert_eq!(Note::C.index(), 3);
        assert_eq!(Note::Gs.index(), 11);
        assert_eq!(DEFAULT_ROOT, Note::C);
    }

    #[test]
    fn test_note_from_index_wraps() {
        assert_eq!(Note::from_index(12), Note::A);
        assert_eq!(Note::from_index(14), Note::B);
        assert_eq!(Note::from_index(-1), Note::Gs);
        assert_eq!(Note::from_index(-3), Note::Fs);
    }

    #[test]
    fn test_note_from_str() {
        assert_eq!("C".parse::<Note>(), Ok(Note::C));
        assert_eq!(" C# ".parse::<Note>(), Ok(Note::Cs));
        assert_eq!("A#".parse::<Note>(), Ok(Note::As));
        assert_eq!(
            "H".parse::<Note>(),
            Err(ScaleError::UnknownNote("H".to_string()))
        );
        assert!("Bb".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn test_note_transpose() {
        assert_eq!(Note::C.transpose(2), Note::D);
        assert_eq!(Note::C.transpose(12), Note::C);
        assert_eq!(Note::A.transpose(-1), Note::Gs);
        assert_eq!(Note::G.transpose(5), Note::C);
    }

    #[test]
    fn test_note_display() {
        for note in Note::ALL {
            assert_eq!(note.to_string(), note.name());
            assert_eq!(note.name().parse::<Note>(), Ok(note));
        }
    }

    #[test]
    fn test_interval_table_is_indexed_by_semitones() {
        for (i, interval) in INTERVALS.iter().enumerate() {
            assert_eq!(interval.semitones() as usize, i);
            assert_eq!(Interval::from_label(interval.label()), Some(*interval));
            assert_eq!(Interval::from_semitones(i as u8), *interval);
        }
        assert_eq!(Interval::from_semitones(3).description(), "Minor Third");
        assert_eq!(Interval::from_semitones(15).label(), "b3");
    }

    #[test]
    fn test_interval_alias() {
        let sharp_four = Interval::from_label("#4").unwrap();
        assert_eq!(sharp_four.semitones(), 6);
        assert_eq!(sharp_four.label(), "#4");
        assert_eq!(sharp_four.description(), "Tri-Tone");
        assert_eq!(Interval::from_semitones(6).label(), "b5");
        assert_eq!(Interval::from_label("9"), None);
        assert_eq!(Interval::from_label("#5"), None);
    }

    #[test]
    fn test_scale_type_from_str() {
        assert_eq!("Major".parse::<ScaleType>(), Ok(ScaleType::Major));
        assert_eq!("minor".parse::<ScaleType>(), Ok(ScaleType::Minor));
        assert_eq!(
            "Pentatonic Major".parse::<ScaleType>(),
            Ok(ScaleType::PentatonicMajor)
        );
        assert_eq!(
            "PentatonicBlues".parse::<ScaleType>(),
            Ok(ScaleType::PentatonicBlues)
        );
        assert_eq!(
            "pentatonic_minor".parse::<ScaleType>(),
            Ok(ScaleType::PentatonicMinor)
        );
        assert_eq!(
            "Atonal".parse::<ScaleType>(),
            Err(ScaleError::UnknownScale("Atonal".to_string()))
        );
    }

    #[test]
    fn test_builtin_table_matches_scale_types() {
        assert_eq!(list_scale_types().len(), 10);
        for scale_type in ScaleType::ALL {
            assert_eq!(scale_type.definition().scale_type, scale_type);
            assert_eq!(scale_type.name().parse::<ScaleType>(), Ok(scale_type));
        }
        assert_eq!(list_scale_types()[0], "Major");
        assert_eq!(list_scale_types()[9], "Locrian");
    }

    #[test]
    fn test_progressions_cover_every_degree() {
        for def in BUILTIN_SCALES.iter() {
            if let Some(progression) = def.progression {
                assert_eq!(progression.len(), def.degree_count(), "{}", def.name);
            }
        }
        assert!(ScaleType::Locrian.definition().progression.is_none());
    }

    #[test]
    fn test_formula_labels() {
        let labels: Vec<_> = ScaleType::PentatonicMinor
            .definition()
            .formula_labels()
            .collect();
        assert_eq!(labels, vec!["1", "b3", "4", "5", "b7"]);
    }
}
