// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors returned by the scale engine.

use thiserror::Error;

/// Errors raised while resolving scale tables or user selections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Root note is not one of the 12 canonical note names
    #[error("unknown note {0:?}: expected one of A, A#, B, C, C#, D, D#, E, F, F#, G, G#")]
    UnknownNote(String),

    /// Scale type name is not in the scale table
    #[error("unknown scale type {0:?}")]
    UnknownScale(String),

    /// A scale formula references an interval label missing from the interval table
    #[error("scale {scale}: interval label {label:?} is not in the interval table")]
    UnknownIntervalLabel { scale: String, label: String },

    /// A chord progression does not have one chord per scale degree
    #[error("scale {scale}: progression has {chords} chords for {intervals} intervals")]
    ProgressionLength {
        scale: String,
        intervals: usize,
        chords: usize,
    },
}

impl ScaleError {
    /// Whether this error comes from a bad caller selection rather than the static tables
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, ScaleError::UnknownNote(_) | ScaleError::UnknownScale(_))
    }

    /// Whether this error is a defect in the scale tables
    pub fn is_configuration(&self) -> bool {
        !self.is_invalid_selection()
    }
}
