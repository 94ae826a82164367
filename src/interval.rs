//! # Interval Table
//!
//! Static mapping from interval symbol (`"3b"`, `"b9"`, `"#11"`) to the
//! semitone offset above the chord root.
//!
//! Chord data arrives in two notations for the same interval: the legacy
//! suffix form (`"7b"`, `"9#"`, `"11#"`) and the prefix form (`"b7"`, `"#9"`,
//! `"#11"`). Both resolve to the same offset, so formulas from either source
//! can be resolved without rewriting them first.
//!
//! Symbols that are not in the table (decorative or malformed tokens) have no
//! offset; the resolver skips them.
//!
//! ## Semitone Reference
//! - 1 = 0, b2 = 1, 2 = 2, #2/b3 = 3, 3/b4 = 4, 4 = 5, #4/b5 = 6
//! - 5 = 7, #5/b6 = 8, 6/bb7 = 9, #6/b7 = 10, 7 = 11
//! - b9 = 13, 9 = 14, #9 = 15, b11 = 16, 11 = 17, #11 = 18, b13 = 20, 13 = 21

/// Interval symbol to semitone offset from the root.
pub const INTERVALS: &[(&str, u8)] = &[
    ("1", 0),
    ("2b", 1),
    ("b2", 1),
    ("2", 2),
    ("2M", 2),
    ("#2", 3),
    ("3b", 3),
    ("b3", 3),
    ("3", 4),
    ("b4", 4),
    ("4", 5),
    ("#4", 6),
    ("5d", 6),
    ("b5", 6),
    ("5", 7),
    ("5A", 8),
    ("#5", 8),
    ("6b", 8),
    ("b6", 8),
    ("6", 9),
    ("bb7", 9),
    ("#6", 10),
    ("7b", 10),
    ("b7", 10),
    ("7", 11),
    ("9b", 13),
    ("b9", 13),
    ("9", 14),
    ("9#", 15),
    ("#9", 15),
    // Legacy data maps "11b" to a major tenth.
    ("11b", 16),
    ("b11", 16),
    ("11", 17),
    ("11#", 18),
    ("#11", 18),
    ("13b", 20),
    ("b13", 20),
    ("13", 21),
];

/// Look up the semitone offset of an interval symbol.
///
/// Returns `None` for symbols outside the table.
///
/// # Example
/// ```
/// use chxrd::semitone_of;
///
/// assert_eq!(semitone_of("7b"), Some(10));
/// assert_eq!(semitone_of("b7"), Some(10));
/// assert_eq!(semitone_of("add"), None);
/// ```
pub fn semitone_of(symbol: &str) -> Option<u8> {
    INTERVALS
        .iter()
        .find(|(sym, _)| *sym == symbol)
        .map(|(_, semitones)| *semitones)
}

/// Collapse a notational variant to its canonical spelling.
///
/// Only the spellings listed here are rewritten; everything else passes
/// through untouched, so normalizing twice gives the same result.
/// `"13+4"` drops its `+4` component and `"13#4"` becomes `"#13"`, exactly as
/// the chord data has always been read.
pub fn normalize_symbol(symbol: &str) -> &str {
    match symbol {
        "7b" => "b7",
        "9b" => "b9",
        "9#" => "#9",
        "11#" => "#11",
        "13b" => "b13",
        "13+4" => "13",
        "13#4" => "#13",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_and_prefix_spellings_agree() {
        let pairs = [
            ("2b", "b2"),
            ("3b", "b3"),
            ("5d", "b5"),
            ("5A", "#5"),
            ("6b", "b6"),
            ("7b", "b7"),
            ("9b", "b9"),
            ("9#", "#9"),
            ("11#", "#11"),
            ("13b", "b13"),
        ];
        for (legacy, prefix) in pairs {
            assert_eq!(semitone_of(legacy), semitone_of(prefix), "{} vs {}", legacy, prefix);
            assert!(semitone_of(legacy).is_some());
        }
    }

    #[test]
    fn test_offsets_stay_within_two_octaves() {
        for (symbol, semitones) in INTERVALS {
            assert!(*semitones <= 21, "{} out of range", symbol);
        }
        assert_eq!(semitone_of("1"), Some(0));
        assert_eq!(semitone_of("13"), Some(21));
    }

    #[test]
    fn test_augmented_and_diminished_degrees() {
        assert_eq!(semitone_of("#2"), semitone_of("b3"));
        assert_eq!(semitone_of("b4"), semitone_of("3"));
        assert_eq!(semitone_of("#4"), semitone_of("b5"));
        assert_eq!(semitone_of("#6"), semitone_of("b7"));
        assert_eq!(semitone_of("bb7"), semitone_of("6"));
        assert_eq!(semitone_of("b11"), Some(16));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(semitone_of(""), None);
        assert_eq!(semitone_of("add"), None);
        assert_eq!(semitone_of("#13"), None);
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("7b"), "b7");
        assert_eq!(normalize_symbol("11#"), "#11");
        assert_eq!(normalize_symbol("9#"), "#9");
        assert_eq!(normalize_symbol("13+4"), "13");
        assert_eq!(normalize_symbol("13#4"), "#13");
        assert_eq!(normalize_symbol("3b"), "3b");
    }

    #[test]
    fn test_normalize_symbol_is_idempotent() {
        for (symbol, _) in INTERVALS {
            let once = normalize_symbol(symbol);
            assert_eq!(normalize_symbol(once), once);
        }
        for symbol in ["13+4", "13#4"] {
            let once = normalize_symbol(symbol);
            assert_eq!(normalize_symbol(once), once);
        }
    }
}
