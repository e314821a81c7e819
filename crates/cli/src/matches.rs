// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match spans and the raw match set.

use crate::needle::NeedleId;

/// Half-open character span `[start, stop)` in a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop);
        Self { start, stop }
    }

    /// Characters covered, including noise absorbed by gaps.
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// True if `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.stop <= self.stop
    }
}

/// One occurrence of one needle.
///
/// Field order gives the canonical ordering: start, then stop, then needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub start: usize,
    pub stop: usize,
    pub needle: NeedleId,
}

impl Match {
    pub fn new(needle: NeedleId, start: usize, stop: usize) -> Self {
        debug_assert!(start < stop);
        Self {
            start,
            stop,
            needle,
        }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.stop)
    }
}

/// Every occurrence found by the scanner, unresolved.
///
/// Matches of different needles may overlap or nest freely. The set is
/// kept in canonical order so equal inputs give identical sets regardless
/// of how the scan was split across workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatchSet {
    matches: Vec<Match>,
}

impl RawMatchSet {
    /// Build a set from matches in any order.
    pub fn from_unsorted(mut matches: Vec<Match>) -> Self {
        matches.sort_unstable();
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Matches of a single needle, in canonical order.
    pub fn for_needle(&self, needle: NeedleId) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.needle == needle)
    }
}

impl<'a> IntoIterator for &'a RawMatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl FromIterator<Match> for RawMatchSet {
    fn from_iter<T: IntoIterator<Item = Match>>(iter: T) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "matches_tests.rs"]
mod tests;
