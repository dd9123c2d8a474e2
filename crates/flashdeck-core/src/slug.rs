use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a game title. The same string appears in navigation
/// links and as the base filename of the game's asset, so the charset is
/// restricted to what is safe in both: ASCII alphanumerics, `-`, and `_`.
///
/// Path separators and `.` are outside the charset, so a parsed slug can
/// never name anything outside the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    Empty,
    BadChar { raw: String, ch: char },
}

impl fmt::Display for SlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "game id is empty"),
            Self::BadChar { raw, ch } => {
                write!(f, "game id {raw:?} contains {ch:?} (allowed: a-z, A-Z, 0-9, '-', '_')")
            },
        }
    }
}

impl std::error::Error for SlugError {}

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        if raw.is_empty() {
            return Err(SlugError::Empty);
        }
        for ch in raw.chars() {
            if !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
                return Err(SlugError::BadChar {
                    raw: raw.to_string(),
                    ch,
                });
            }
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Deserialization goes through `parse` so a hand-edited catalog file cannot
// smuggle in a slug the rest of the crate would reject.
impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Slug::parse(&raw).map_err(serde::de::Error::custom)
    }
}
