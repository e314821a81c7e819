// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-position possibility index.
//!
//! For each haystack position, the needles whose occurrence covers it. An
//! empty set means nothing in the needle set explains that character; more
//! than one needle means the position is ambiguous. The index never picks
//! an answer.

use crate::matches::{RawMatchSet, Span};
use crate::needle::NeedleId;

/// Needle sets per position, stored contiguously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PossibilityIndex {
    /// `offsets[p]..offsets[p + 1]` indexes `needles` for position `p`.
    offsets: Vec<usize>,
    needles: Vec<NeedleId>,
}

/// Maximal run of consecutive positions sharing the same needle set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a> {
    pub span: Span,
    pub needles: &'a [NeedleId],
}

/// Build the possibility index over `haystack_len` positions.
pub fn build_index(raw: &RawMatchSet, haystack_len: usize) -> PossibilityIndex {
    let mut sets: Vec<Vec<NeedleId>> = vec![Vec::new(); haystack_len];
    for m in raw {
        let stop = m.stop.min(haystack_len);
        for set in &mut sets[m.start.min(stop)..stop] {
            set.push(m.needle);
        }
    }

    let mut offsets = Vec::with_capacity(haystack_len + 1);
    let mut needles = Vec::new();
    offsets.push(0);
    for mut set in sets {
        set.sort_unstable();
        set.dedup();
        needles.extend(set);
        offsets.push(needles.len());
    }

    PossibilityIndex { offsets, needles }
}

impl PossibilityIndex {
    /// Number of positions.
    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Needles possible at `pos`, ordered by needle id. Empty past the end.
    pub fn at(&self, pos: usize) -> &[NeedleId] {
        match (self.offsets.get(pos), self.offsets.get(pos + 1)) {
            (Some(&start), Some(&stop)) => &self.needles[start..stop],
            _ => &[],
        }
    }

    pub fn contains(&self, pos: usize, needle: NeedleId) -> bool {
        self.at(pos).binary_search(&needle).is_ok()
    }

    /// Per-position sets, in position order.
    pub fn iter(&self) -> impl Iterator<Item = &[NeedleId]> {
        (0..self.len()).map(|p| self.at(p))
    }

    /// Positions grouped into maximal runs of identical sets.
    pub fn runs(&self) -> Vec<Run<'_>> {
        let mut runs: Vec<Run<'_>> = Vec::new();
        for (pos, set) in self.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.needles == set => run.span.stop = pos + 1,
                _ => runs.push(Run {
                    span: Span::new(pos, pos + 1),
                    needles: set,
                }),
            }
        }
        runs
    }

    /// Maximal runs no needle explains.
    pub fn uncovered(&self) -> Vec<Span> {
        self.runs_where(|set| set.is_empty())
    }

    /// Maximal runs where more than one needle is possible.
    pub fn ambiguous(&self) -> Vec<Span> {
        self.runs_where(|set| set.len() > 1)
    }

    /// Share of positions covered by at least one needle, 0.0 for an empty haystack.
    pub fn coverage(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let covered = self.iter().filter(|set| !set.is_empty()).count();
        covered as f64 / self.len() as f64
    }

    fn runs_where(&self, keep: impl Fn(&[NeedleId]) -> bool) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for (pos, set) in self.iter().enumerate() {
            if !keep(set) {
                continue;
            }
            match spans.last_mut() {
                Some(span) if span.stop == pos => span.stop = pos + 1,
                _ => spans.push(Span::new(pos, pos + 1)),
            }
        }
        spans
    }
}

#[cfg(test)]
#[path = "possibility_tests.rs"]
mod tests;
