// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-needle match report.
//!
//! Resolution only orders each needle's occurrences and drops repeated spans
//! of the same needle. Occurrences of different needles that overlap or nest
//! are all kept; the possibility index describes how they interact.

use crate::matches::{RawMatchSet, Span};
use crate::needle::{NeedleId, NeedleSet};

/// Occurrences of one needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub needle: NeedleId,
    pub name: String,
    /// Ordered by start, then stop; no span appears twice.
    pub spans: Vec<Span>,
}

/// Every needle of a set with its ordered occurrences, in needle input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    entries: Vec<ReportEntry>,
}

/// Build the match report from the raw match set.
pub fn resolve(needles: &NeedleSet, raw: &RawMatchSet) -> MatchReport {
    let mut spans: Vec<Vec<Span>> = vec![Vec::new(); needles.len()];
    for m in raw {
        match spans.get_mut(m.needle.index()) {
            Some(list) => list.push(m.span()),
            None => tracing::warn!("match for unknown needle {} ignored", m.needle),
        }
    }

    let entries = needles
        .iter()
        .zip(spans)
        .map(|((id, spec), mut list)| {
            list.sort_unstable();
            list.dedup();
            ReportEntry {
                needle: id,
                name: spec.raw().to_string(),
                spans: list,
            }
        })
        .collect();

    MatchReport { entries }
}

impl MatchReport {
    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    /// Occurrences of the needle with this raw string.
    pub fn get(&self, needle: &str) -> Option<&[Span]> {
        self.entries
            .iter()
            .find(|e| e.name == needle)
            .map(|e| e.spans.as_slice())
    }

    pub fn spans(&self, needle: NeedleId) -> Option<&[Span]> {
        self.entries.get(needle.index()).map(|e| e.spans.as_slice())
    }

    /// Total number of reported occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.spans.len()).sum()
    }

    /// True when no needle has any occurrence.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Entries with at least one occurrence.
    pub fn matched(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.spans.is_empty())
    }

    /// Naive non-subsetting view.
    ///
    /// Drops an occurrence when an occurrence of a different needle covers it
    /// and is wider, or equally wide with a longer needle string. Every
    /// occurrence of this report is used as a potential cover, so the result
    /// does not depend on the order needles are visited. This can discard a
    /// chain of short needles in favour of one long one; the possibility index
    /// keeps the full picture.
    pub fn outermost(&self) -> MatchReport {
        let mut covers: Vec<(Span, usize)> = self
            .entries
            .iter()
            .enumerate()
            .flat_map(|(i, e)| e.spans.iter().map(move |&s| (s, i)))
            .collect();
        covers.sort_unstable();
        let widest = covers.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| ReportEntry {
                needle: e.needle,
                name: e.name.clone(),
                spans: e
                    .spans
                    .iter()
                    .copied()
                    .filter(|s| !self.is_subsumed(i, s, &covers, widest))
                    .collect(),
            })
            .collect();

        MatchReport { entries }
    }

    /// A cover of `span` starts in `span.stop - widest ..= span.start`, so
    /// only that window of the sorted covers is inspected.
    fn is_subsumed(
        &self,
        entry: usize,
        span: &Span,
        covers: &[(Span, usize)],
        widest: usize,
    ) -> bool {
        let earliest = span.stop.saturating_sub(widest);
        let lo = covers.partition_point(|(t, _)| t.start < earliest);
        let hi = covers.partition_point(|(t, _)| t.start <= span.start);
        if lo >= hi {
            return false;
        }
        covers[lo..hi].iter().any(|(t, other)| {
            *other != entry && t.contains(span) && self.outranks(*other, t, entry, span)
        })
    }

    fn outranks(&self, a: usize, a_span: &Span, b: usize, b_span: &Span) -> bool {
        if a_span.len() != b_span.len() {
            return a_span.len() > b_span.len();
        }
        self.entries[a].name.chars().count() > self.entries[b].name.chars().count()
    }
}

impl<'a> IntoIterator for &'a MatchReport {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
