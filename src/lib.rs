// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and key explorer.
//!
//! Derives the notes, intervals and diatonic chords of a key from a root
//! note and a scale type, and draws random chord progressions from it.

pub mod config;
pub mod error;
pub mod music;
pub mod render;

pub use error::ScaleError;
pub use music::{
    derive_key, list_note_names, list_scale_types, random_progression, sample_progression,
    DerivedKey, Note, ScaleType,
};
