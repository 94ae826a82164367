//! # Formula Builder (guided mode)
//!
//! Composes a chord from three discrete choices instead of a free-text symbol:
//!
//! | step      | choices              | appends                         |
//! |-----------|----------------------|---------------------------------|
//! | base      | `5`, `M`, `m`        | `5` / `3 5` / `3b 5` after `1`  |
//! | quality   | `7`, `9`, `11`, `13` | itself                          |
//! | extension | `#11`, `b9`, `#9`    | itself                          |
//!
//! ## Selection
//! [`Selection`] is an immutable snapshot of everything chosen so far (root,
//! octave, base, quality, extension, mode). Every `with_*` call returns a new
//! value. Choosing a base clears quality and extension, since those only make
//! sense relative to the base they were picked for.
//!
//! ## Modes
//! - **Basic**: quality needs a base, extension needs a quality; premature
//!   choices are ignored. The chord key `base + quality + extension`
//!   (e.g. `"M7"`) is looked up in the chord database.
//! - **Scientific**: no gating. The formula comes straight from [`build()`],
//!   so any combination (even quality alone) can be heard.

use crate::database::ChordDatabase;
use crate::error::ChordError;
use crate::formula::Formula;
use crate::resolver::{resolve, ResolvedChord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triad (or power chord) the guided chord starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    /// Power chord: root and fifth, no third
    #[serde(rename = "5")]
    Power,
    #[serde(rename = "M")]
    Major,
    #[serde(rename = "m")]
    Minor,
}

impl Base {
    pub const ALL: [Base; 3] = [Base::Power, Base::Major, Base::Minor];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "5" => Some(Base::Power),
            "M" => Some(Base::Major),
            "m" => Some(Base::Minor),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Base::Power => "5",
            Base::Major => "M",
            Base::Minor => "m",
        }
    }

    fn symbols(self) -> &'static [&'static str] {
        match self {
            Base::Power => &["5"],
            Base::Major => &["3", "5"],
            Base::Minor => &["3b", "5"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "7")]
    Seventh,
    #[serde(rename = "9")]
    Ninth,
    #[serde(rename = "11")]
    Eleventh,
    #[serde(rename = "13")]
    Thirteenth,
}

impl Quality {
    pub const ALL: [Quality; 4] = [
        Quality::Seventh,
        Quality::Ninth,
        Quality::Eleventh,
        Quality::Thirteenth,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "7" => Some(Quality::Seventh),
            "9" => Some(Quality::Ninth),
            "11" => Some(Quality::Eleventh),
            "13" => Some(Quality::Thirteenth),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Seventh => "7",
            Quality::Ninth => "9",
            Quality::Eleventh => "11",
            Quality::Thirteenth => "13",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extension {
    #[serde(rename = "#11")]
    SharpEleven,
    #[serde(rename = "b9")]
    FlatNine,
    #[serde(rename = "#9")]
    SharpNine,
}

impl Extension {
    pub const ALL: [Extension; 3] = [
        Extension::SharpEleven,
        Extension::FlatNine,
        Extension::SharpNine,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "#11" => Some(Extension::SharpEleven),
            "b9" => Some(Extension::FlatNine),
            "#9" => Some(Extension::SharpNine),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Extension::SharpEleven => "#11",
            Extension::FlatNine => "b9",
            Extension::SharpNine => "#9",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Base, Quality, Extension);

/// Guided-mode flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Basic => Mode::Scientific,
            Mode::Scientific => Mode::Basic,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => f.write_str("Basic"),
            Mode::Scientific => f.write_str("Scientific"),
        }
    }
}

/// Compose a formula from guided choices.
///
/// Starts with `1`, appends the base's symbols, then quality and extension
/// verbatim in that order.
///
/// # Example
/// ```
/// use chxrd::{build, Base, Quality};
///
/// let formula = build(Some(Base::Major), Some(Quality::Seventh), None);
/// assert_eq!(formula.to_string(), "1 3 5 7");
/// ```
pub fn build(base: Option<Base>, quality: Option<Quality>, extension: Option<Extension>) -> Formula {
    let mut symbols: Vec<&str> = vec!["1"];
    if let Some(base) = base {
        symbols.extend_from_slice(base.symbols());
    }
    if let Some(quality) = quality {
        symbols.push(quality.as_str());
    }
    if let Some(extension) = extension {
        symbols.push(extension.as_str());
    }
    Formula::new(symbols)
}

/// Immutable snapshot of the guided selection path
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    pub root: Option<&'static str>,
    pub octave: Option<i32>,
    pub base: Option<Base>,
    pub quality: Option<Quality>,
    pub extension: Option<Extension>,
    pub mode: Mode,
}

impl Selection {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Choose a root; the token is replaced by its table spelling.
    pub fn with_root(self, root: &str) -> Result<Self, ChordError> {
        let spelling = crate::root::ROOT_SPELLINGS
            .iter()
            .map(|(name, _)| *name)
            .find(|name| name.eq_ignore_ascii_case(root.trim()))
            .ok_or_else(|| ChordError::UnknownRoot(root.trim().to_string()))?;
        Ok(Self {
            root: Some(spelling),
            ..self
        })
    }

    pub fn with_octave(self, octave: i32) -> Self {
        Self {
            octave: Some(octave),
            ..self
        }
    }

    /// Choose a base, clearing quality and extension.
    pub fn with_base(self, base: Base) -> Self {
        Self {
            base: Some(base),
            quality: None,
            extension: None,
            ..self
        }
    }

    /// Choose a quality. Ignored in basic mode until a base is chosen.
    pub fn with_quality(self, quality: Quality) -> Self {
        if self.mode == Mode::Basic && self.base.is_none() {
            log::debug!("Ignoring quality {} before a base is chosen", quality);
            return self;
        }
        Self {
            quality: Some(quality),
            ..self
        }
    }

    /// Choose an extension. Ignored in basic mode until a quality is chosen.
    pub fn with_extension(self, extension: Extension) -> Self {
        if self.mode == Mode::Basic && self.quality.is_none() {
            log::debug!("Ignoring extension {} before a quality is chosen", extension);
            return self;
        }
        Self {
            extension: Some(extension),
            ..self
        }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn toggle_mode(self) -> Self {
        self.with_mode(self.mode.toggled())
    }

    /// Clear every choice, keeping the mode.
    pub fn reset(self) -> Self {
        Self::new(self.mode)
    }

    /// Database key for the chosen path (`"M"` + `"7"` -> `"M7"`).
    pub fn chord_key(&self) -> String {
        let mut key = String::new();
        if let Some(base) = self.base {
            key.push_str(base.as_str());
        }
        if let Some(quality) = self.quality {
            key.push_str(quality.as_str());
        }
        if let Some(extension) = self.extension {
            key.push_str(extension.as_str());
        }
        key
    }

    /// Formula for the current choices.
    ///
    /// # Errors
    /// [`ChordError::UnknownChord`] in basic mode when the chord key is not in
    /// the database.
    pub fn formula(&self, database: &ChordDatabase) -> Result<Formula, ChordError> {
        match self.mode {
            Mode::Scientific => Ok(build(self.base, self.quality, self.extension)),
            Mode::Basic => {
                let key = self.chord_key();
                database
                    .get_exact(&key)
                    .cloned()
                    .ok_or(ChordError::UnknownChord(key))
            }
        }
    }

    /// Resolve the selection. `Ok(None)` until both root and octave are chosen.
    pub fn resolve(&self, database: &ChordDatabase) -> Result<Option<ResolvedChord>, ChordError> {
        let (Some(root), Some(octave)) = (self.root, self.octave) else {
            return Ok(None);
        };
        let formula = self.formula(database)?;
        resolve(root, octave, &formula).map(Some)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.chord_key();
        let octave = self
            .octave
            .map(|o| o.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(f, "Root: {}  Octave: {}", self.root.unwrap_or("-"), octave)?;
        write!(
            f,
            "Chord Type: {}  Mode: {}",
            if key.is_empty() { "-" } else { key.as_str() },
            self.mode
        )
    }
}
