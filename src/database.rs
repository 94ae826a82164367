//! # Chord Formula Database
//!
//! Maps chord suffixes (`""`, `"m"`, `"maj7"`, `"7b5"`) to interval formulas.
//!
//! ## Source Format
//! The database is built once from a JSON object whose values are either a
//! space-delimited string or a (possibly nested) list of tokens. Both forms
//! may appear in the same table:
//!
//! ```json
//! {
//!   "m7": "1 3b 5 7b",
//!   "9": [["1", "3", "5"], "7b 9"]
//! }
//! ```
//!
//! ## Construction
//! 1. Flatten nested lists and split strings on whitespace
//! 2. Rewrite notational variants to their canonical spelling (`7b` -> `b7`)
//! 3. Drop repeated symbols, keeping the first occurrence
//!
//! ## Lookup
//! Suffixes are stored exactly as written. Lookup tries the exact suffix first
//! and then falls back to a case-insensitive match, so `"MAJ7"` finds `"maj7"`.
//! The fallback never changes a standalone `M`/`m` quality marker (the `m` of
//! `"m6"`, not the one inside `"maj"` or `"dim"`), so `"M6"` does not find
//! `"m6"` and major/minor chords stay distinct.
//!
//! The crate ships a default table (`data/chords.json`) available through
//! [`ChordDatabase::builtin()`].

use crate::error::ChordError;
use crate::formula::Formula;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

const BUILTIN_CHORDS: &str = include_str!("../data/chords.json");

static BUILTIN: Lazy<ChordDatabase> = Lazy::new(|| {
    ChordDatabase::from_json_str(BUILTIN_CHORDS).expect("embedded chord database is valid JSON")
});

/// Raw token structure for one chord entry, before flattening.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawFormula {
    /// Space-delimited tokens: `"1 3b 5"`
    Text(String),
    /// Token list, nesting allowed: `[["1", "3"], "5 7b"]`
    List(Vec<RawFormula>),
}

impl RawFormula {
    /// Flatten into an ordered token sequence.
    pub fn flatten(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RawFormula::Text(text) => out.extend(text.split_whitespace()),
            RawFormula::List(items) => {
                for item in items {
                    item.collect_tokens(out);
                }
            }
        }
    }
}

impl From<&str> for RawFormula {
    fn from(text: &str) -> Self {
        RawFormula::Text(text.to_string())
    }
}

/// Immutable suffix -> formula table
#[derive(Debug, Clone, Default)]
pub struct ChordDatabase {
    formulas: BTreeMap<String, Formula>,
    // lowercased suffix -> stored suffixes, lowercase spelling first
    folded: HashMap<String, Vec<String>>,
}

impl ChordDatabase {
    /// Build a database from raw entries.
    ///
    /// A suffix appearing twice keeps the later entry.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, RawFormula)>,
        K: Into<String>,
    {
        let formulas: BTreeMap<String, Formula> = entries
            .into_iter()
            .map(|(suffix, raw)| (suffix.into(), Formula::normalized(raw.flatten())))
            .collect();

        let mut folded: HashMap<String, Vec<String>> = HashMap::new();
        for suffix in formulas.keys() {
            let lower = suffix.to_lowercase();
            let stored = folded.entry(lower.clone()).or_default();
            if *suffix == lower {
                stored.insert(0, suffix.clone());
            } else {
                stored.push(suffix.clone());
            }
        }

        Self { formulas, folded }
    }

    /// Parse a JSON chord source.
    ///
    /// # Errors
    /// [`ChordError::Database`] if the JSON is not an object of strings/lists.
    pub fn from_json_str(json: &str) -> Result<Self, ChordError> {
        let raw: BTreeMap<String, RawFormula> =
            serde_json::from_str(json).map_err(|e| ChordError::Database(e.to_string()))?;
        Ok(Self::from_entries(raw))
    }

    /// Load a JSON chord source from disk.
    pub fn from_path(path: &Path) -> Result<Self, ChordError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ChordError::Database(format!("{}: {}", path.display(), e)))?;
        let database = Self::from_json_str(&json)?;
        log::info!("Loaded {} chords from {}", database.len(), path.display());
        Ok(database)
    }

    /// The default table compiled into the crate.
    pub fn builtin() -> &'static ChordDatabase {
        &BUILTIN
    }

    /// Formula for a chord suffix, exact match first, then case-insensitive
    /// as long as the major/minor marker is spelled as stored.
    ///
    /// # Example
    /// ```
    /// use chxrd::ChordDatabase;
    ///
    /// let db = ChordDatabase::builtin();
    /// assert_eq!(db.formula_for("m7").unwrap().to_string(), "1 3b 5 b7");
    /// assert_eq!(db.formula_for("MAJ7"), db.formula_for("maj7"));
    /// assert!(db.formula_for("xyz123").is_none());
    /// assert!(db.formula_for("M6").is_none()); // only "m6" is stored
    /// ```
    pub fn formula_for(&self, suffix: &str) -> Option<&Formula> {
        self.get_exact(suffix).or_else(|| {
            self.folded
                .get(&suffix.to_lowercase())?
                .iter()
                .find(|stored| quality_markers_match(stored, suffix))
                .and_then(|stored| self.formulas.get(stored))
        })
    }

    /// Formula for a suffix spelled exactly as stored.
    pub fn get_exact(&self, suffix: &str) -> Option<&Formula> {
        self.formulas.get(suffix)
    }

    /// All suffixes, sorted case-insensitively (ties broken by exact spelling).
    pub fn suffixes(&self) -> Vec<&str> {
        let mut suffixes: Vec<&str> = self.formulas.keys().map(String::as_str).collect();
        suffixes.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        suffixes
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

/// True when every standalone `M`/`m` of `stored` is spelled the same in `input`.
///
/// A marker is an `M` or `m` not preceded by a letter and not followed by a
/// lowercase letter: the `m` of `"m6"` and the leading `m` of `"mM7"`, but not
/// the `m` of `"maj7"`, `"min"` or `"dim7"`.
fn quality_markers_match(stored: &str, input: &str) -> bool {
    let stored: Vec<char> = stored.chars().collect();
    let input: Vec<char> = input.chars().collect();
    if stored.len() != input.len() {
        return false;
    }
    stored.iter().enumerate().all(|(i, &c)| {
        let is_marker = (c == 'M' || c == 'm')
            && (i == 0 || !stored[i - 1].is_ascii_alphabetic())
            && stored.get(i + 1).map_or(true, |next| !next.is_ascii_lowercase());
        !is_marker || input[i] == c
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::semitone_of;

    #[test]
    fn test_builtin_database_loads() {
        let db = ChordDatabase::builtin();
        assert!(!db.is_empty());
        assert_eq!(db.formula_for("").unwrap().to_string(), "1 3 5");
        assert_eq!(db.formula_for("7").unwrap().to_string(), "1 3 5 b7");
    }

    #[test]
    fn test_builtin_symbols_all_resolve() {
        let db = ChordDatabase::builtin();
        for suffix in db.suffixes() {
            for symbol in db.formula_for(suffix).unwrap().iter() {
                assert!(semitone_of(symbol).is_some(), "{} in '{}'", symbol, suffix);
            }
        }
    }

    #[test]
    fn test_string_and_nested_list_forms() {
        let json = r#"{
            "a": "1 3 5 7b",
            "b": [["1", "3"], ["5", ["7b"]]],
            "c": ["1 3", "5 7b"]
        }"#;
        let db = ChordDatabase::from_json_str(json).unwrap();
        let expected = Formula::new(["1", "3", "5", "b7"]);
        assert_eq!(db.formula_for("a"), Some(&expected));
        assert_eq!(db.formula_for("b"), Some(&expected));
        assert_eq!(db.formula_for("c"), Some(&expected));
    }

    #[test]
    fn test_normalization_and_dedup() {
        let json = r#"{ "x": "1 3 5 7b b7 9# 11# 13+4 3" }"#;
        let db = ChordDatabase::from_json_str(json).unwrap();
        assert_eq!(db.formula_for("x").unwrap().to_string(), "1 3 5 b7 #9 #11 13");
    }

    #[test]
    fn test_13_sharp_4_literal_mapping() {
        let db = ChordDatabase::builtin();
        // "13+4" reads as plain 13
        assert_eq!(
            db.formula_for("13#11").unwrap().to_string(),
            "1 3 5 b7 9 #11 13"
        );
        let db = ChordDatabase::from_json_str(r#"{ "y": "1 13#4" }"#).unwrap();
        assert_eq!(db.formula_for("y").unwrap().to_string(), "1 #13");
    }

    #[test]
    fn test_case_sensitive_keys_stay_distinct() {
        let db = ChordDatabase::builtin();
        assert_eq!(db.formula_for("M7").unwrap().to_string(), "1 3 5 7");
        assert_eq!(db.formula_for("m7").unwrap().to_string(), "1 3b 5 b7");
        assert_ne!(db.formula_for("M"), db.formula_for("m"));
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let db = ChordDatabase::builtin();
        assert_eq!(db.formula_for("DIM7"), db.formula_for("dim7"));
        assert_eq!(db.formula_for("Sus4"), db.formula_for("sus4"));
        assert!(db.get_exact("DIM7").is_none());
    }

    #[test]
    fn test_fallback_keeps_major_and_minor_apart() {
        let db = ChordDatabase::builtin();
        // Only "m6" and "M9#11" are stored
        assert!(db.get_exact("M6").is_none());
        assert!(db.formula_for("M6").is_none());
        assert!(db.formula_for("m9#11").is_none());
        assert_eq!(db.formula_for("M9#11").unwrap().to_string(), "1 3 5 7 9 #11");
        assert_eq!(db.formula_for("m6").unwrap().to_string(), "1 3b 5 6");
        assert!(db.formula_for("M7B5").is_none());
        assert_eq!(db.formula_for("m7B5"), db.formula_for("m7b5"));
    }

    #[test]
    fn test_fallback_still_folds_words() {
        let db = ChordDatabase::builtin();
        assert_eq!(db.formula_for("MAJ7"), db.formula_for("maj7"));
        assert_eq!(db.formula_for("Maj9"), db.formula_for("maj9"));
        assert_eq!(db.formula_for("MIN"), db.formula_for("min"));
        assert_eq!(db.formula_for("DIM7"), db.formula_for("dim7"));
        assert_eq!(db.formula_for("ADD9"), db.formula_for("add9"));
    }

    #[test]
    fn test_quality_markers_match() {
        assert!(quality_markers_match("maj7", "MAJ7"));
        assert!(quality_markers_match("dim7", "DIM7"));
        assert!(quality_markers_match("m7b5", "m7B5"));
        assert!(!quality_markers_match("m6", "M6"));
        assert!(!quality_markers_match("M9#11", "m9#11"));
        assert!(!quality_markers_match("mM7", "MM7"));
        assert!(!quality_markers_match("m7", "m77"));
    }

    #[test]
    fn test_folded_collision_prefers_lowercase() {
        let db = ChordDatabase::from_entries([
            ("M7", RawFormula::from("1 3 5 7")),
            ("m7", RawFormula::from("1 3b 5 7b")),
        ]);
        assert_eq!(db.formula_for("M7").unwrap().to_string(), "1 3 5 7");
        assert_eq!(db.formula_for("m7").unwrap().to_string(), "1 3b 5 b7");
    }

    #[test]
    fn test_suffixes_sorted_case_insensitively() {
        let db = ChordDatabase::from_entries([
            ("maj7", RawFormula::from("1 3 5 7")),
            ("M7", RawFormula::from("1 3 5 7")),
            ("Aug", RawFormula::from("1 3 5A")),
            ("dim", RawFormula::from("1 3b 5d")),
            ("m7", RawFormula::from("1 3b 5 7b")),
        ]);
        assert_eq!(db.suffixes(), vec!["Aug", "dim", "M7", "m7", "maj7"]);
    }

    #[test]
    fn test_invalid_source() {
        assert!(matches!(
            ChordDatabase::from_json_str(r#"{ "x": 5 }"#),
            Err(ChordError::Database(_))
        ));
        assert!(matches!(
            ChordDatabase::from_json_str("not json"),
            Err(ChordError::Database(_))
        ));
    }
}
