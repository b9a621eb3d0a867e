//! Whitelist of application names that stay visible during a focus session.
//!
//! Parsed from free text typed by the user. Entries are separated by commas
//! or newlines; membership tests ignore case.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<String>,
    folded: Vec<String>,
}

impl Whitelist {
    /// Parse whitelist text.
    ///
    /// Every entry is trimmed, empty entries are dropped and later
    /// duplicates (ignoring case) are skipped. Order of first appearance
    /// is kept.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::default();
        for raw in text.split([',', '\n', '\r']) {
            list.insert(raw);
        }
        list
    }

    /// Add one entry. Returns false when it was empty or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.folded.push(fold(name));
        self.entries.push(name.to_string());
        true
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        let needle = fold(name.trim());
        self.folded.iter().any(|e| *e == needle)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for Whitelist {
    /// Comma separated, the same shape `parse` accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(", "))
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}
