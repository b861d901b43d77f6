// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Text presentation of a derived key.
//!
//! Renders a [`DerivedKey`] as the lines of a key report (relative keys,
//! intervals, notes, chords, a random progression) and builds the outbound
//! chord-lookup and backing-track links.

use std::fmt;

use thiserror::Error;
use url::Url;

use crate::music::{DerivedKey, Note};

/// Chord diagram site; the chord symbol is appended as a path segment
pub const CHORD_LOOKUP_BASE: &str = "https://www.scales-chords.com/chord/guitar/";

/// Video search page; the query goes in `search_query`
pub const BACKING_TRACK_BASE: &str = "https://www.youtube.com/results";

/// Errors raised while building link bases
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid link base {url:?}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("link base {0:?} cannot carry a path")]
    NotHierarchical(String),
}

/// Base URLs for the links attached to a key report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    chord_lookup: Url,
    backing_tracks: Url,
}

impl Links {
    /// Create links from two base URLs
    pub fn new(chord_lookup: &str, backing_tracks: &str) -> Result<Self, LinkError> {
        Ok(Self {
            chord_lookup: parse_base(chord_lookup)?,
            backing_tracks: parse_base(backing_tracks)?,
        })
    }

    /// Links to the default chord and backing-track sites
    pub fn standard() -> Result<Self, LinkError> {
        Self::new(CHORD_LOOKUP_BASE, BACKING_TRACK_BASE)
    }

    /// Chord lookup page for a chord symbol ("C#m" becomes ".../C%23m")
    pub fn chord_url(&self, symbol: &str) -> Url {
        let mut url = self.chord_lookup.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(symbol);
        }
        url
    }

    /// Backing-track search for a root note and scale display name
    pub fn backing_track_url(&self, root: Note, scale_name: &str) -> Url {
        let query = format!("backing track in {} {}", root, scale_name);
        let mut url = self.backing_tracks.clone();
        url.query_pairs_mut().append_pair("search_query", &query);
        url
    }
}

fn parse_base(base: &str) -> Result<Url, LinkError> {
    let url = Url::parse(base).map_err(|source| LinkError::Parse {
        url: base.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(LinkError::NotHierarchical(base.to_string()));
    }
    Ok(url)
}

/// A printable report for one derived key
#[derive(Debug, Clone)]
pub struct KeyReport<'a> {
    key: &'a DerivedKey,
    links: &'a Links,
    random: Option<&'a [String]>,
    describe: bool,
}

impl<'a> KeyReport<'a> {
    /// Create a report for a key
    pub fn new(key: &'a DerivedKey, links: &'a Links) -> Self {
        Self {
            key,
            links,
            random: None,
            describe: false,
        }
    }

    /// Include a random progression line (shown only for keys with chords)
    pub fn with_random(mut self, progression: &'a [String]) -> Self {
        self.random = Some(progression);
        self
    }

    /// Show interval descriptions and chord links inline
    pub fn with_descriptions(mut self, describe: bool) -> Self {
        self.describe = describe;
        self
    }

    /// Render the report as lines of text
    pub fn lines(&self) -> Vec<String> {
        let key = self.key;
        let relative = key.relative();
        let mut lines = vec![relative.minor_line(), relative.major_line()];

        let intervals: Vec<String> = key
            .degrees()
            .iter()
            .map(|d| {
                if self.describe {
                    format!("{} ({})", d.interval.label(), d.interval.description())
                } else {
                    d.interval.label().to_string()
                }
            })
            .collect();
        lines.push(String::new());
        lines.push("Intervals:".to_string());
        lines.push(intervals.join(", "));

        let notes: Vec<String> = key
            .degrees()
            .iter()
            .map(|d| format!("{:>2}", d.note.name()))
            .collect();
        let numbers: Vec<String> = key
            .degrees()
            .iter()
            .map(|d| format!("{:>2}", d.number))
            .collect();
        lines.push(String::new());
        lines.push("Notes:".to_string());
        lines.push(notes.join(", "));
        lines.push(numbers.join("  "));

        if let Some(chords) = key.chords() {
            lines.push(String::new());
            lines.push("Chords in Key:".to_string());
            for chord in &chords {
                let symbol = chord.symbol();
                if self.describe {
                    lines.push(format!(
                        "{:>3} {}  {}",
                        chord.numeral,
                        symbol,
                        self.links.chord_url(&symbol)
                    ));
                } else {
                    lines.push(format!("{:>3} {}", chord.numeral, symbol));
                }
            }
            if let Some(random) = self.random {
                lines.push(String::new());
                lines.push(format!("random: {}", random.join(", ")));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "YouTube backing tracks: {}",
            self.links.backing_track_url(key.root(), key.scale_name())
        ));
        lines
    }
}

impl fmt::Display for KeyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
