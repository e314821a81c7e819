// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character classification used between needle segments.
//!
//! Noise is whatever a gap may skip. It is never removed from the haystack,
//! only stepped over while looking for the next literal segment.

use std::collections::BTreeSet;

/// Characters a gap is allowed to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NoiseAlphabet {
    /// Anything that is not alphanumeric (`char::is_alphanumeric`).
    #[default]
    NonAlphanumeric,
    /// Exactly these characters.
    Chars(BTreeSet<char>),
}

impl NoiseAlphabet {
    /// Noise made of exactly the characters in `chars`.
    pub fn chars(chars: &str) -> Self {
        NoiseAlphabet::Chars(chars.chars().collect())
    }

    #[inline]
    pub fn is_noise(&self, c: char) -> bool {
        match self {
            NoiseAlphabet::NonAlphanumeric => !c.is_alphanumeric(),
            NoiseAlphabet::Chars(set) => set.contains(&c),
        }
    }

    /// Whether some noise character compares equal to `c` under `case`.
    ///
    /// `c` is already in folded form.
    pub fn can_fold_to(&self, c: char, case: CaseMode) -> bool {
        match self {
            NoiseAlphabet::NonAlphanumeric => !c.is_alphanumeric(),
            NoiseAlphabet::Chars(set) => set.iter().any(|&n| case.fold(n) == c),
        }
    }
}

/// How literal segments are compared with the haystack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// Compare by simple lowercase mapping, one character to one character.
    Insensitive,
}

impl CaseMode {
    /// Map a character to its comparison form.
    ///
    /// Characters whose lowercase form is more than one character are kept
    /// as-is so haystack offsets never shift.
    #[inline]
    pub fn fold(self, c: char) -> char {
        match self {
            CaseMode::Sensitive => c,
            CaseMode::Insensitive => {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => l,
                    _ => c,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "noise_tests.rs"]
mod tests;
