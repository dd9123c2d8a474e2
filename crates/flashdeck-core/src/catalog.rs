use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::slug::Slug;

/// One playable title. Entries are authored in `games.toml` and never change
/// at runtime; a deployment's catalog is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    pub slug: Slug,
    pub title: String,
}

/// The authored list of titles, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<GameEntry>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateSlug(Slug),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read catalog: {e}"),
            Self::Parse(e) => write!(f, "failed to parse catalog: {e}"),
            Self::DuplicateSlug(slug) => write!(f, "duplicate catalog slug: {slug}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    games: Vec<EntryFile>,
}

#[derive(Debug, Deserialize)]
struct EntryFile {
    slug: Slug,
    /// Display title. When absent it is derived from the slug.
    title: Option<String>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(file.games.len());
        for entry in file.games {
            if !seen.insert(entry.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(entry.slug));
            }
            let title = entry
                .title
                .unwrap_or_else(|| title_from_slug(entry.slug.as_str()));
            entries.push(GameEntry {
                slug: entry.slug,
                title,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn get(&self, slug: &Slug) -> Option<&GameEntry> {
        self.entries.iter().find(|e| &e.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default display title for a slug: `-` and `_` become spaces, each word is
/// capitalized. Titles that don't derive cleanly carry an explicit `title` in
/// the catalog file instead.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_derivation() {
        assert_eq!(title_from_slug("copter"), "Copter");
        assert_eq!(title_from_slug("bubble-trouble"), "Bubble Trouble");
        assert_eq!(title_from_slug("gem_tower_defense"), "Gem Tower Defense");
        assert_eq!(title_from_slug("sonny-2"), "Sonny 2");
    }

    #[test]
    fn parse_catalog_with_and_without_titles() {
        let catalog = Catalog::from_toml_str(
            r#"
[[games]]
slug = "copter"
title = "Helicopter Game"

[[games]]
slug = "bubble-trouble"
"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].title, "Helicopter Game");
        assert_eq!(catalog.entries()[1].title, "Bubble Trouble");
    }

    #[test]
    fn lookup_by_slug() {
        let catalog = Catalog::from_toml_str("[[games]]\nslug = \"fishy\"\n").unwrap();
        let slug = Slug::parse("fishy").unwrap();
        assert_eq!(catalog.get(&slug).unwrap().title, "Fishy");
        assert!(catalog.get(&Slug::parse("copter").unwrap()).is_none());
    }

    #[test]
    fn duplicate_slugs_rejected() {
        let err = Catalog::from_toml_str(
            "[[games]]\nslug = \"copter\"\n\n[[games]]\nslug = \"copter\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));
    }

    #[test]
    fn invalid_slug_in_file_is_a_parse_error() {
        let err = Catalog::from_toml_str("[[games]]\nslug = \"../secret\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
