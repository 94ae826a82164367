//! # Favorites Store
//!
//! Saved guided-mode chords, persisted as a JSON array of records:
//!
//! ```json
//! [
//!   { "root": "C", "octave": 4, "base": "m", "quality": "7", "extension": null, "mode": "basic" }
//! ]
//! ```
//!
//! A record rebuilds its chord the way it was shown when saved: basic-mode
//! records look their chord key up in the chord database, scientific-mode
//! records go through the formula builder. Records without a `mode` load as
//! basic.
//!
//! The store is read once at startup (a missing file is an empty store) and
//! the whole file is rewritten on every addition. Malformed content is
//! reported as [`ChordError::Favorites`] and the file is left as it was.

use crate::builder::{build, Base, Extension, Mode, Quality, Selection};
use crate::database::ChordDatabase;
use crate::error::ChordError;
use crate::formula::Formula;
use crate::resolver::{resolve, ResolvedChord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot of a guided selection path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub root: String,
    pub octave: i32,
    pub base: Option<Base>,
    pub quality: Option<Quality>,
    pub extension: Option<Extension>,
    #[serde(default)]
    pub mode: Mode,
}

impl FavoriteRecord {
    /// Capture a selection. `None` until both root and octave are chosen.
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        Some(Self {
            root: selection.root?.to_string(),
            octave: selection.octave?,
            base: selection.base,
            quality: selection.quality,
            extension: selection.extension,
            mode: selection.mode,
        })
    }

    /// Rebuild the formula in the record's mode.
    ///
    /// # Errors
    /// [`ChordError::UnknownChord`] if a basic-mode chord key is no longer in
    /// `database`.
    pub fn formula(&self, database: &ChordDatabase) -> Result<Formula, ChordError> {
        match self.mode {
            Mode::Scientific => Ok(build(self.base, self.quality, self.extension)),
            Mode::Basic => self.to_selection().formula(database),
        }
    }

    pub fn resolve(&self, database: &ChordDatabase) -> Result<ResolvedChord, ChordError> {
        resolve(&self.root, self.octave, &self.formula(database)?)
    }

    // Fields are copied as saved; gating already happened when they were chosen.
    fn to_selection(&self) -> Selection {
        Selection {
            root: None,
            octave: Some(self.octave),
            base: self.base,
            quality: self.quality,
            extension: self.extension,
            mode: self.mode,
        }
    }
}

/// Ordered favorites backed by a JSON file
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    records: Vec<FavoriteRecord>,
}

impl FavoritesStore {
    /// Read the store at `path`, or start empty if the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ChordError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).map_err(|e| favorites_error(&path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No favorites at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(favorites_error(&path, e)),
        };
        log::info!("Loaded {} favorites from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    /// Append a record and rewrite the whole file.
    ///
    /// The record is kept in memory only if the write succeeds.
    pub fn add(&mut self, record: FavoriteRecord) -> Result<(), ChordError> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<(), ChordError> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| favorites_error(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| favorites_error(&self.path, e))
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn favorites_error(path: &Path, e: impl std::fmt::Display) -> ChordError {
    ChordError::Favorites {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
