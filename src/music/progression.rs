// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random chord progressions drawn from the chords of a key.

use rand::Rng;
use tracing::trace;

/// Number of chords in a random progression when no count is given
pub const DEFAULT_PROGRESSION_LENGTH: usize = 4;

/// Shuffle a slice in place (Durstenfeld variant of Fisher-Yates)
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw a random progression of up to `count` chords.
///
/// Shuffles a copy of `chords` and keeps the first `count` entries, so the
/// result has `min(count, chords.len())` elements and never repeats a chord
/// more often than it occurs in the input. `chords` is left untouched.
pub fn sample_progression<T, R>(chords: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = chords.to_vec();
    shuffle(&mut shuffled, rng);
    shuffled.truncate(count);
    trace!(input = chords.len(), output = shuffled.len(), "sampled progression");
    shuffled
}

/// Draw a progression of [`DEFAULT_PROGRESSION_LENGTH`] chords using the thread-local RNG
pub fn random_progression<T: Clone>(chords: &[T]) -> Vec<T> {
    sample_progression(chords, DEFAULT_PROGRESSION_LENGTH, &mut rand::thread_rng())
}
