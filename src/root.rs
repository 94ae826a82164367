//! # Root Resolver
//!
//! Maps note-name tokens to pitch classes and splits free-text chord symbols
//! into root and suffix.
//!
//! ## Spellings
//! Every pitch class has a sharp-spelled canonical name (`NOTE_NAMES`), and the
//! resolver also accepts the flat spellings plus the edge cases `Cb`, `B#`,
//! `Fb` and `E#`. Matching ignores ASCII case, so `"db"` and `"DB"` both read
//! as `Db`.
//!
//! ## Longest Match
//! `parse_leading_root` tries two-character spellings before single letters,
//! so `"C#maj7"` splits as `C#` + `maj7` rather than `C` + `#maj7`.

use crate::error::ChordError;
use std::fmt;

/// Canonical sharp-spelled names, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every accepted root spelling with its pitch class, in display order.
pub const ROOT_SPELLINGS: &[(&str, u8)] = &[
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("Fb", 4),
    ("E#", 5),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("Cb", 11),
    ("B#", 0),
];

/// Pitch class in 0..=11 (C = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Pitch class of any MIDI number (negative numbers wrap).
    pub fn from_midi(midi: i32) -> Self {
        Self(midi.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical sharp-spelled name
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All accepted root spellings in display order.
pub fn list_root_spellings() -> Vec<&'static str> {
    ROOT_SPELLINGS.iter().map(|(name, _)| *name).collect()
}

/// Resolve a root token to its pitch class.
///
/// # Example
/// ```
/// use chxrd::pitch_class_of;
///
/// assert_eq!(pitch_class_of("A").unwrap().index(), 9);
/// assert_eq!(pitch_class_of("Db").unwrap(), pitch_class_of("C#").unwrap());
/// ```
///
/// # Errors
/// [`ChordError::UnknownRoot`] when no spelling matches.
pub fn pitch_class_of(token: &str) -> Result<PitchClass, ChordError> {
    let token = token.trim();
    ROOT_SPELLINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, pc)| PitchClass(*pc))
        .ok_or_else(|| ChordError::UnknownRoot(token.to_string()))
}

/// Split a free-text chord symbol into its root spelling and the remaining suffix.
///
/// The returned root is the table spelling (`"db7"` yields `"Db"`), and the
/// suffix keeps the caller's case.
///
/// # Example
/// ```
/// use chxrd::parse_leading_root;
///
/// let (root, suffix) = parse_leading_root("C#maj7").unwrap();
/// assert_eq!(root, "C#");
/// assert_eq!(suffix, "maj7");
/// ```
///
/// # Errors
/// [`ChordError::NoRootMatch`] when no spelling is a prefix of the input.
pub fn parse_leading_root(text: &str) -> Result<(&'static str, &str), ChordError> {
    let text = text.trim();
    let mut spellings: Vec<&'static str> = list_root_spellings();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()));

    spellings
        .into_iter()
        .find_map(|spelling| {
            let prefix = text.get(..spelling.len())?;
            if prefix.eq_ignore_ascii_case(spelling) {
                Some((spelling, &text[spelling.len()..]))
            } else {
                None
            }
        })
        .ok_or_else(|| ChordError::NoRootMatch(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_notes() {
        assert_eq!(pitch_class_of("C").unwrap().index(), 0);
        assert_eq!(pitch_class_of("D").unwrap().index(), 2);
        assert_eq!(pitch_class_of("E").unwrap().index(), 4);
        assert_eq!(pitch_class_of("F").unwrap().index(), 5);
        assert_eq!(pitch_class_of("G").unwrap().index(), 7);
        assert_eq!(pitch_class_of("A").unwrap().index(), 9);
        assert_eq!(pitch_class_of("B").unwrap().index(), 11);
    }

    #[test]
    fn test_enharmonic_spellings() {
        assert_eq!(pitch_class_of("C#").unwrap(), pitch_class_of("Db").unwrap());
        assert_eq!(pitch_class_of("A#").unwrap(), pitch_class_of("Bb").unwrap());
        assert_eq!(pitch_class_of("Cb").unwrap(), pitch_class_of("B").unwrap());
        assert_eq!(pitch_class_of("B#").unwrap(), pitch_class_of("C").unwrap());
        assert_eq!(pitch_class_of("Fb").unwrap(), pitch_class_of("E").unwrap());
        assert_eq!(pitch_class_of("E#").unwrap(), pitch_class_of("F").unwrap());
    }

    #[test]
    fn test_case_insensitive_root() {
        assert_eq!(pitch_class_of("bb").unwrap().index(), 10);
        assert_eq!(pitch_class_of("f#").unwrap().index(), 6);
    }

    #[test]
    fn test_unknown_root() {
        assert!(matches!(pitch_class_of("H"), Err(ChordError::UnknownRoot(_))));
        assert!(matches!(pitch_class_of(""), Err(ChordError::UnknownRoot(_))));
        assert!(matches!(pitch_class_of("C##"), Err(ChordError::UnknownRoot(_))));
    }

    #[test]
    fn test_every_spelling_names_a_canonical_pitch() {
        for (spelling, pc) in ROOT_SPELLINGS {
            let resolved = pitch_class_of(spelling).unwrap();
            assert_eq!(resolved.index(), *pc);
            assert!(NOTE_NAMES.contains(&resolved.name()));
        }
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(parse_leading_root("C#maj7").unwrap(), ("C#", "maj7"));
        assert_eq!(parse_leading_root("Bbm7").unwrap(), ("Bb", "m7"));
        assert_eq!(parse_leading_root("Cmaj7").unwrap(), ("C", "maj7"));
        assert_eq!(parse_leading_root("G").unwrap(), ("G", ""));
    }

    #[test]
    fn test_parse_leading_root_ignores_case() {
        assert_eq!(parse_leading_root("ebm9").unwrap(), ("Eb", "m9"));
        assert_eq!(parse_leading_root("  dM7 ").unwrap(), ("D", "M7"));
    }

    #[test]
    fn test_no_root_match() {
        assert!(matches!(parse_leading_root("Hmaj7"), Err(ChordError::NoRootMatch(_))));
        assert!(matches!(parse_leading_root(""), Err(ChordError::NoRootMatch(_))));
        assert!(matches!(parse_leading_root("7"), Err(ChordError::NoRootMatch(_))));
    }

    #[test]
    fn test_pitch_class_from_midi() {
        assert_eq!(PitchClass::from_midi(60).name(), "C");
        assert_eq!(PitchClass::from_midi(69).name(), "A");
        assert_eq!(PitchClass::from_midi(-1).name(), "B");
    }
}
