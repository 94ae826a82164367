//! Chord formula: an ordered list of distinct interval symbols.

use crate::interval::normalize_symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, duplicate-free sequence of interval symbols (e.g. `1 3 5 b7`).
///
/// Symbols are kept as written. Whether they resolve to a pitch is decided
/// later by the interval table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formula(Vec<String>);

impl Formula {
    /// Build a formula from tokens, dropping repeated symbols (first occurrence wins).
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut symbols: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into();
            if !symbols.contains(&token) {
                symbols.push(token);
            }
        }
        Self(symbols)
    }

    /// Build a formula after collapsing notational variants (`7b` -> `b7`).
    pub fn normalized<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            tokens
                .into_iter()
                .map(|token| normalize_symbol(token.as_ref()).to_string()),
        )
    }

    /// Parse a space-delimited formula string such as `"1 3b 5 7b"`.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    pub fn normalize(&self) -> Self {
        Self::normalized(&self.0)
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for Formula {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
