// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine.
//!
//! This module provides the static note, interval and scale tables, the
//! derivation of a key from a root note and scale type, and random chord
//! progressions drawn from a key.

pub mod key;
pub mod progression;
pub mod scale;

pub use key::{derive_key, Chord, Degree, DerivedKey, RelativeKeys, ScaleEngine};
pub use progression::{random_progression, sample_progression, DEFAULT_PROGRESSION_LENGTH};
pub use scale::{
    list_note_names, list_scale_types, ChordStep, Interval, Note, ScaleDefinition, ScaleType,
    DEFAULT_ROOT,
};
