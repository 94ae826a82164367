//! # Chord Resolver
//!
//! Turns a root, an octave and a formula into concrete pitches.
//!
//! ## MIDI Numbering
//! `root_midi = 12 * (octave + 1) + pitch_class`, so octave -1 starts at MIDI 0
//! and A4 = 69. Each interval symbol adds its semitone offset to the root.
//!
//! - Symbols missing from the interval table are skipped
//! - Two symbols landing on the same MIDI number produce one note (first wins)
//! - No clamping: extreme octaves give MIDI numbers outside 0..=127
//!
//! ## Enharmonic Roots
//! The pitch class alone decides the MIDI number, so `Cb4` sounds as B4 (71)
//! and `B#4` as C4 (60). The octave number is never adjusted for the spelling.

use crate::database::ChordDatabase;
use crate::error::ChordError;
use crate::formula::Formula;
use crate::interval::semitone_of;
use crate::root::{parse_leading_root, pitch_class_of, PitchClass};
use serde::Serialize;
use std::fmt;

/// A formula resolved against a root and octave.
///
/// Recomputed on every query; never cached.
///
/// # Fields
/// - `root`: Root spelling as given (or as matched, for free-text symbols)
/// - `octave`: Scientific-pitch octave of the root
/// - `formula`: Interval symbols used, including any that did not resolve
/// - `midi_notes`: Distinct MIDI numbers in formula order
/// - `pitch_class_names`: Sharp-spelled name of each MIDI note (`"C"`, `"D#"`)
/// - `scientific_names`: Name plus octave of each MIDI note (`"C4"`, `"D#5"`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChord {
    pub root: String,
    pub octave: i32,
    pub formula: Formula,
    pub midi_notes: Vec<i32>,
    pub pitch_class_names: Vec<String>,
    pub scientific_names: Vec<String>,
}

impl fmt::Display for ResolvedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let midi: Vec<String> = self.midi_notes.iter().map(|n| n.to_string()).collect();
        writeln!(f, "Formula: {}", self.formula)?;
        writeln!(f, "MIDI Notes: {}", midi.join(" "))?;
        writeln!(f, "Note Names: {}", self.pitch_class_names.join(" "))?;
        write!(f, "Scientific: {}", self.scientific_names.join(" "))
    }
}

/// MIDI number of a root spelling in the given octave.
///
/// # Example
/// ```
/// use chxrd::root_midi;
///
/// assert_eq!(root_midi("A", 4).unwrap(), 69);
/// assert_eq!(root_midi("C", -1).unwrap(), 0);
/// ```
pub fn root_midi(root: &str, octave: i32) -> Result<i32, ChordError> {
    let pitch_class = pitch_class_of(root)?;
    Ok(12 * (octave + 1) + i32::from(pitch_class.index()))
}

/// Scientific pitch name of a MIDI number (`60` -> `"C4"`).
pub fn scientific_name(midi: i32) -> String {
    format!("{}{}", PitchClass::from_midi(midi), midi.div_euclid(12) - 1)
}

/// Resolve a formula against a root and octave.
///
/// # Example
/// ```
/// use chxrd::{resolve, Formula};
///
/// let chord = resolve("C", 4, &Formula::parse("1 3 5 7")).unwrap();
/// assert_eq!(chord.midi_notes, vec![60, 64, 67, 71]);
/// assert_eq!(chord.pitch_class_names, vec!["C", "E", "G", "B"]);
/// assert_eq!(chord.scientific_names, vec!["C4", "E4", "G4", "B4"]);
/// ```
///
/// # Errors
/// [`ChordError::UnknownRoot`] if `root` is not a known spelling.
pub fn resolve(root: &str, octave: i32, formula: &Formula) -> Result<ResolvedChord, ChordError> {
    let base = root_midi(root, octave)?;

    let mut midi_notes: Vec<i32> = Vec::with_capacity(formula.len());
    for symbol in formula.iter() {
        let Some(offset) = semitone_of(symbol) else {
            log::debug!("Skipping unknown interval symbol '{}'", symbol);
            continue;
        };
        let midi = base + i32::from(offset);
        if !midi_notes.contains(&midi) {
            midi_notes.push(midi);
        }
    }

    let pitch_class_names = midi_notes
        .iter()
        .map(|&midi| PitchClass::from_midi(midi).name().to_string())
        .collect();
    let scientific_names = midi_notes.iter().map(|&midi| scientific_name(midi)).collect();

    Ok(ResolvedChord {
        root: root.trim().to_string(),
        octave,
        formula: formula.clone(),
        midi_notes,
        pitch_class_names,
        scientific_names,
    })
}

/// Resolve a free-text chord symbol (`"C#maj7"`) against a chord database.
///
/// # Errors
/// - [`ChordError::NoRootMatch`] if the text does not start with a root spelling
/// - [`ChordError::UnknownChord`] if the remaining suffix is not in the database
pub fn resolve_symbol_in(
    database: &ChordDatabase,
    text: &str,
    octave: i32,
) -> Result<ResolvedChord, ChordError> {
    let (root, suffix) = parse_leading_root(text)?;
    let formula = database
        .formula_for(suffix)
        .ok_or_else(|| ChordError::UnknownChord(suffix.to_string()))?;
    resolve(root, octave, formula)
}
