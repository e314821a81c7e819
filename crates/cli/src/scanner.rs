// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gap-tolerant multi-needle scanner.
//!
//! First segments of all needles are deduplicated and compiled into a single
//! Aho-Corasick automaton, so one pass over the haystack finds every place a
//! needle could start. Each hit is then extended segment by segment, stepping
//! over noise between segments. Extension is independent per hit and runs on
//! rayon when there are enough hits to be worth it.

use std::borrow::Cow;
use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::haystack::Haystack;
use crate::matches::{Match, RawMatchSet};
use crate::needle::{NeedleId, NeedleSet};
use crate::noise::{CaseMode, NoiseAlphabet};
use crate::options::MatchOptions;

/// Below this many first-segment hits, extension stays on the calling thread.
const PARALLEL_MIN_HITS: usize = 2048;

/// Compiled scanner for one needle set.
pub struct Scanner {
    options: MatchOptions,
    /// None when the needle set is empty.
    automaton: Option<AhoCorasick>,
    /// Needles starting with each automaton pattern.
    heads: Vec<Vec<NeedleId>>,
    /// Segments after the first, per needle.
    tails: Vec<Vec<TailSegment>>,
}

/// A folded segment that follows a gap.
#[derive(Debug)]
struct TailSegment {
    chars: Box<[char]>,
    /// No noise character can match the first character, so the segment
    /// can only start where a run of noise ends.
    anchored: bool,
}

impl TailSegment {
    fn new(chars: Box<[char]>, noise: &NoiseAlphabet, case: CaseMode) -> Self {
        let anchored = chars.first().is_some_and(|&c| !noise.can_fold_to(c, case));
        Self { chars, anchored }
    }
}

/// A place where some first segment occurs, in character offsets.
#[derive(Debug, Clone, Copy)]
struct Hit {
    pattern: usize,
    start: usize,
    end: usize,
}

impl Scanner {
    pub fn new(needles: &NeedleSet, options: MatchOptions) -> Result<Self> {
        let case = options.case;
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_ids: HashMap<String, usize> = HashMap::new();
        let mut heads: Vec<Vec<NeedleId>> = Vec::new();
        let mut tails = Vec::with_capacity(needles.len());

        for (id, spec) in needles.iter() {
            let mut segments = spec.segments().iter().map(|s| fold_segment(s, case));
            let Some(head) = segments.next() else {
                return Err(Error::Internal(format!(
                    "needle {:?} compiled without segments",
                    spec.raw()
                )));
            };
            let head: String = head.iter().collect();
            let pattern = *pattern_ids.entry(head.clone()).or_insert_with(|| {
                patterns.push(head);
                heads.push(Vec::new());
                patterns.len() - 1
            });
            heads[pattern].push(id);
            tails.push(
                segments
                    .map(|chars| TailSegment::new(chars, &options.noise, case))
                    .collect(),
            );
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            let automaton = AhoCorasick::builder()
                .match_kind(MatchKind::Standard)
                .build(&patterns)
                .map_err(|e| Error::Internal(format!("aho-corasick error: {}", e)))?;
            Some(automaton)
        };

        tracing::debug!(
            "scanner built: {} needles share {} distinct first segments",
            needles.len(),
            patterns.len()
        );

        Ok(Self {
            options,
            automaton,
            heads,
            tails,
        })
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Find every occurrence of every needle.
    pub fn scan(&self, haystack: &Haystack) -> RawMatchSet {
        let Some(automaton) = &self.automaton else {
            return RawMatchSet::default();
        };
        if haystack.is_empty() {
            return RawMatchSet::default();
        }

        let text = &SearchText::new(haystack, &self.options);
        let hits: Vec<Hit> = automaton
            .find_overlapping_iter(text.folded.as_ref())
            .filter_map(|m| {
                Some(Hit {
                    pattern: m.pattern().as_usize(),
                    start: text.char_index(m.start())?,
                    end: text.char_index(m.end())?,
                })
            })
            .collect();

        let matches: Vec<Match> = if self.options.parallel && hits.len() >= PARALLEL_MIN_HITS {
            tracing::debug!("extending {} hits in parallel", hits.len());
            hits.par_iter()
                .flat_map_iter(|&hit| self.extend_hit(text, hit))
                .collect()
        } else {
            tracing::debug!("extending {} hits", hits.len());
            hits.iter()
                .flat_map(|&hit| self.extend_hit(text, hit))
                .collect()
        };

        RawMatchSet::from_unsorted(matches)
    }

    /// Every needle starting with the hit's pattern, extended from the hit.
    fn extend_hit<'a>(
        &'a self,
        text: &'a SearchText<'_>,
        hit: Hit,
    ) -> impl Iterator<Item = Match> + 'a {
        self.heads[hit.pattern].iter().filter_map(move |&needle| {
            let stop = self.extend(text, needle, hit.end)?;
            tracing::trace!("needle {} matched {}..{}", needle, hit.start, stop);
            Some(Match::new(needle, hit.start, stop))
        })
    }

    /// Match the remaining segments of `needle` from `pos`, returning the stop offset.
    fn extend(&self, text: &SearchText<'_>, needle: NeedleId, mut pos: usize) -> Option<usize> {
        for segment in &self.tails[needle.index()] {
            pos = self.cross_gap(text, segment, pos)?;
        }
        Some(pos)
    }

    /// Skip noise from `pos` until `segment` matches; fail on anything else.
    ///
    /// Anchored segments jump straight to the end of the noise run. Others
    /// walk the run one character at a time, so a long noise run followed
    /// by many hits costs time proportional to the run per hit unless
    /// `max_gap` bounds it.
    fn cross_gap(
        &self,
        text: &SearchText<'_>,
        segment: &TailSegment,
        mut pos: usize,
    ) -> Option<usize> {
        let segment_len = segment.chars.len();
        if segment.anchored {
            let end = *text.noise_end.get(pos)?;
            if self.options.max_gap.is_some_and(|max| end - pos > max) {
                return None;
            }
            return text
                .matches_at(end, &segment.chars)
                .then_some(end + segment_len);
        }
        let mut skipped = 0;
        loop {
            if text.matches_at(pos, &segment.chars) {
                return Some(pos + segment_len);
            }
            let c = *text.original.get(pos)?;
            if !self.options.noise.is_noise(c) {
                return None;
            }
            if self.options.max_gap.is_some_and(|max| skipped >= max) {
                return None;
            }
            pos += 1;
            skipped += 1;
        }
    }
}

/// Compile needles and scan a haystack in one call.
pub fn scan(needles: &NeedleSet, haystack: &Haystack, options: &MatchOptions) -> Result<RawMatchSet> {
    Ok(Scanner::new(needles, options.clone())?.scan(haystack))
}

fn fold_segment(segment: &str, case: CaseMode) -> Box<[char]> {
    segment.chars().map(|c| case.fold(c)).collect()
}

/// Haystack view used for comparisons.
///
/// `folded` is what literals are compared against; noise is always judged
/// on the original characters.
struct SearchText<'h> {
    original: &'h [char],
    /// For each offset, the first offset at or after it that is not noise.
    noise_end: Vec<usize>,
    chars: Cow<'h, [char]>,
    folded: Cow<'h, str>,
    /// Byte offset of each folded character, plus the total length.
    byte_offsets: Vec<usize>,
}

impl<'h> SearchText<'h> {
    fn new(haystack: &'h Haystack, options: &MatchOptions) -> Self {
        let case = options.case;
        let (chars, folded) = match case {
            CaseMode::Sensitive => (
                Cow::Borrowed(haystack.chars()),
                Cow::Borrowed(haystack.as_str()),
            ),
            CaseMode::Insensitive => {
                let chars: Vec<char> = haystack.chars().iter().map(|&c| case.fold(c)).collect();
                let folded: String = chars.iter().collect();
                (Cow::Owned(chars), Cow::Owned(folded))
            }
        };
        let byte_offsets = folded
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(folded.len()))
            .collect();
        let original = haystack.chars();
        let mut noise_end = vec![original.len(); original.len() + 1];
        for (i, &c) in original.iter().enumerate().rev() {
            noise_end[i] = if options.noise.is_noise(c) {
                noise_end[i + 1]
            } else {
                i
            };
        }
        Self {
            original,
            noise_end,
            chars,
            folded,
            byte_offsets,
        }
    }

    fn char_index(&self, byte: usize) -> Option<usize> {
        self.byte_offsets.binary_search(&byte).ok()
    }

    fn matches_at(&self, pos: usize, segment: &[char]) -> bool {
        self.chars
            .get(pos..pos + segment.len())
            .is_some_and(|window| window == segment)
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
