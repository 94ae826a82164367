//! YAML configuration for the `chxrd` binary.
//!
//! ```yaml
//! chord-database: my-chords.json
//! favorites: favorites.json
//! octave: 3
//! mode: scientific
//! ```
//!
//! Every field is optional; a missing file means all defaults.

use crate::builder::Mode;
use crate::database::ChordDatabase;
use crate::error::ChordError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "chxrd.yaml";
pub const DEFAULT_FAVORITES_FILE: &str = "favorites.json";
pub const DEFAULT_OCTAVE: i32 = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// JSON chord database replacing the embedded table
    pub chord_database: Option<PathBuf>,
    pub favorites: PathBuf,
    /// Octave for free-text chord symbols given without one
    pub octave: i32,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_database: None,
            favorites: PathBuf::from(DEFAULT_FAVORITES_FILE),
            octave: DEFAULT_OCTAVE,
            mode: Mode::Basic,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Read the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let config_error = |message: String| ChordError::Config {
            path: path.to_path_buf(),
            message,
        };
        match fs::read_to_string(path) {
            Ok(yaml) => Self::from_yaml_str(&yaml).map_err(|e| config_error(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(config_error(e.to_string())),
        }
    }

    /// The configured chord database, or the embedded one.
    pub fn database(&self) -> Result<ChordDatabase, ChordError> {
        match &self.chord_database {
            Some(path) => ChordDatabase::from_path(path),
            None => Ok(ChordDatabase::builtin().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.octave, 4);
        assert_eq!(config.mode, Mode::Basic);
        assert_eq!(config.favorites, PathBuf::from("favorites.json"));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_yaml_str("octave: 2\nmode: scientific\n").unwrap();
        assert_eq!(config.octave, 2);
        assert_eq!(config.mode, Mode::Scientific);
        assert_eq!(config.chord_database, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_yaml_str("tempo: 120\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("chxrd.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chxrd.yaml");
        fs::write(&path, "octave: [not, a, number]\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ChordError::Config { .. })));
    }

    #[test]
    fn test_custom_chord_database() {
        let dir = tempdir().unwrap();
        let chords = dir.path().join("chords.json");
        fs::write(&chords, r#"{ "power": ["1", "5", ["1"]] }"#).unwrap();

        let config = Config {
            chord_database: Some(chords),
            ..Config::default()
        };
        let db = config.database().unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.formula_for("power").unwrap().to_string(), "1 5");
    }
}
