//! # Error Types
//!
//! This module defines all error types for the chord engine.
//!
//! ## Error Types
//! - `UnknownRoot` - A root token matches no known spelling
//! - `NoRootMatch` - Free-text chord symbol does not start with any root spelling
//! - `UnknownChord` - A chord suffix (or guided chord key) has no database entry
//! - `Database` - A chord database source could not be read
//! - `Favorites` - The favorites store could not be read or written
//! - `Config` - The configuration file could not be read
//!
//! Unknown interval symbols inside a formula are NOT errors. They are skipped
//! during resolution.
//!
//! ## Usage
//! ```rust
//! use chxrd::{resolve_symbol, ChordError};
//!
//! match resolve_symbol("Cxyz123", 4) {
//!     Ok(chord) => println!("{}", chord),
//!     Err(ChordError::UnknownChord(suffix)) => eprintln!("no such chord: {}", suffix),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// Root token matches no known spelling.
    ///
    /// # Example
    /// ```
    /// # use chxrd::ChordError;
    /// let err = ChordError::UnknownRoot("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown root note: H");
    /// ```
    #[error("Unknown root note: {0}")]
    UnknownRoot(String),

    /// No root spelling is a prefix of the free-text chord symbol.
    ///
    /// # Example
    /// ```
    /// # use chxrd::ChordError;
    /// let err = ChordError::NoRootMatch("Hmaj7".to_string());
    /// assert_eq!(err.to_string(), "No root note found at the start of 'Hmaj7'");
    /// ```
    #[error("No root note found at the start of '{0}'")]
    NoRootMatch(String),

    /// The chord suffix has no entry in the chord database.
    ///
    /// # Example
    /// ```
    /// # use chxrd::ChordError;
    /// let err = ChordError::UnknownChord("xyz123".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord: xyz123");
    /// ```
    #[error("Unknown chord: {0}")]
    UnknownChord(String),

    /// Chord database source is malformed.
    #[error("Invalid chord database: {0}")]
    Database(String),

    /// Favorites store could not be read or written.
    #[error("Favorites store {}: {message}", .path.display())]
    Favorites { path: PathBuf, message: String },

    /// Configuration file could not be read or parsed.
    #[error("Config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
