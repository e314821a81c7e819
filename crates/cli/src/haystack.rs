// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The text being searched.
//!
//! A haystack is read-only: matching never rewrites, filters or reorders it.
//! All offsets are character offsets, not byte offsets.

use crate::error::{Error, Result};

/// Immutable, character-indexed haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    text: String,
    chars: Box<[char]>,
}

impl Haystack {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Build a haystack from input that may be absent.
    ///
    /// An absent haystack is an error; an empty one is valid and simply
    /// matches nothing.
    pub fn from_input(input: Option<&str>) -> Result<Self> {
        input.map(Self::new).ok_or_else(|| Error::InvalidHaystack {
            reason: "no haystack supplied".to_string(),
        })
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Text covered by the character span `[start, stop)`, clamped to the haystack.
    pub fn span_text(&self, start: usize, stop: usize) -> String {
        let stop = stop.min(self.chars.len());
        let start = start.min(stop);
        self.chars[start..stop].iter().collect()
    }
}

impl From<&str> for Haystack {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Haystack {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
#[path = "haystack_tests.rs"]
mod tests;
