use std::collections::BTreeMap;

use crate::error::HopError;

const BUILTIN: &[(&str, &str)] = &[
    ("home", "~"),
    ("docs", "~/Documents"),
    ("dl", "~/Downloads"),
    ("desk", "~/Desktop"),
    ("tmp", "/tmp"),
    ("gh", "https://github.com"),
    ("crates", "https://crates.io"),
    ("std", "https://doc.rust-lang.org/std/"),
    ("rs", "https://www.rust-lang.org"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a> {
    Url(&'a str),
    Path(&'a str),
}

impl<'a> Target<'a> {
    pub fn classify(target: &'a str) -> Self {
        if target.starts_with("http://") || target.starts_with("https://") {
            Target::Url(target)
        } else {
            Target::Path(target)
        }
    }
}

/// Immutable alias → target mapping, built once at startup.
#[derive(Debug)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn builtin() -> Result<Self, HopError> {
        Self::from_entries(BUILTIN.iter().copied())
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, HopError> {
        let mut map = BTreeMap::new();
        for (alias, target) in entries {
            if map.insert(alias.to_owned(), target.to_owned()).is_some() {
                return Err(HopError::DuplicateAlias(alias.to_owned()));
            }
        }

        Ok(Self { entries: map })
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }
}
