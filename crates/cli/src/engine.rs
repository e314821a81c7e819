// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching engine: compile once, run against any number of haystacks.

use crate::error::Result;
use crate::haystack::Haystack;
use crate::matches::RawMatchSet;
use crate::needle::NeedleSet;
use crate::options::MatchOptions;
use crate::possibility::{PossibilityIndex, build_index};
use crate::resolve::{MatchReport, resolve};
use crate::scanner::Scanner;

/// Compiled needles plus the scanner built from them.
pub struct Engine {
    needles: NeedleSet,
    scanner: Scanner,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub haystack_len: usize,
    pub raw: RawMatchSet,
    pub report: MatchReport,
    pub possibilities: PossibilityIndex,
}

impl Engine {
    /// Compile `needles`; fails on empty or duplicate needles.
    pub fn new<I, S>(needles: I, options: MatchOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = NeedleSet::new(needles)?;
        Self::from_set(needles, options)
    }

    pub fn from_set(needles: NeedleSet, options: MatchOptions) -> Result<Self> {
        let scanner = Scanner::new(&needles, options)?;
        Ok(Self { needles, scanner })
    }

    pub fn needles(&self) -> &NeedleSet {
        &self.needles
    }

    pub fn options(&self) -> &MatchOptions {
        self.scanner.options()
    }

    /// Scan `haystack` and derive both views from the same raw match set.
    pub fn run(&self, haystack: &Haystack) -> Outcome {
        let raw = self.scanner.scan(haystack);
        tracing::debug!(
            "{} raw matches over {} characters",
            raw.len(),
            haystack.len()
        );
        let report = resolve(&self.needles, &raw);
        let possibilities = build_index(&raw, haystack.len());
        Outcome {
            haystack_len: haystack.len(),
            raw,
            report,
            possibilities,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
