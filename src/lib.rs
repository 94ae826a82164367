//! # chxrd
//!
//! Chord lookup and note resolution: give it a root, an octave and a chord
//! (free-text symbol or guided choices) and it returns concrete pitches as
//! MIDI numbers, note names and scientific pitch names.
//!
//! ## Pipeline
//! ```text
//! "C#maj7" --parse_leading_root--> ("C#", "maj7")
//!          --ChordDatabase::formula_for--> 1 3 5 7
//!          --resolve(root, octave)--> [61, 65, 68, 72]
//! ```
//!
//! Guided mode replaces the database lookup with [`build()`] (or a chord-key
//! lookup in basic mode, see [`Selection`]).
//!
//! ## Example
//! ```rust
//! use chxrd::{resolve_symbol, build, resolve, Base, Quality};
//!
//! let chord = resolve_symbol("Am7", 4)?;
//! assert_eq!(chord.midi_notes, vec![69, 72, 76, 79]);
//! assert_eq!(chord.scientific_names, vec!["A4", "C5", "E5", "G5"]);
//!
//! let formula = build(Some(Base::Major), Some(Quality::Seventh), None);
//! let chord = resolve("C", 4, &formula)?;
//! assert_eq!(chord.pitch_class_names, vec!["C", "E", "G", "B"]);
//! # Ok::<(), chxrd::ChordError>(())
//! ```
//!
//! All tables are built once and never mutated, so every function here can be
//! called from any thread without coordination.

pub mod builder;
pub mod config;
pub mod database;
pub mod error;
pub mod favorites;
pub mod formula;
pub mod interval;
pub mod resolver;
pub mod root;

pub use builder::{build, Base, Extension, Mode, Quality, Selection};
pub use config::Config;
pub use database::{ChordDatabase, RawFormula};
pub use error::ChordError;
pub use favorites::{FavoriteRecord, FavoritesStore};
pub use formula::Formula;
pub use interval::{normalize_symbol, semitone_of};
pub use resolver::{resolve, resolve_symbol_in, root_midi, scientific_name, ResolvedChord};
pub use root::{list_root_spellings, parse_leading_root, pitch_class_of, PitchClass, NOTE_NAMES};

/// Suffixes of the embedded chord database, sorted case-insensitively.
pub fn list_chord_suffixes() -> Vec<&'static str> {
    ChordDatabase::builtin().suffixes()
}

/// Formula for a chord suffix in the embedded database.
pub fn formula_for(suffix: &str) -> Option<&'static Formula> {
    ChordDatabase::builtin().formula_for(suffix)
}

/// Resolve a free-text chord symbol against the embedded database.
///
/// # Errors
/// - [`ChordError::NoRootMatch`] if the symbol does not start with a root
/// - [`ChordError::UnknownChord`] if the suffix is not a known chord
pub fn resolve_symbol(text: &str, octave: i32) -> Result<ResolvedChord, ChordError> {
    resolve_symbol_in(ChordDatabase::builtin(), text, octave)
}
