// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching options consumed by the engine.

use crate::noise::{CaseMode, NoiseAlphabet};

/// Knobs for one matching run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Characters a gap may skip.
    pub noise: NoiseAlphabet,
    /// Literal comparison mode.
    pub case: CaseMode,
    /// Maximum noise characters per gap (None = unbounded).
    pub max_gap: Option<usize>,
    /// Extend first-segment hits on the rayon pool when there are many.
    pub parallel: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            noise: NoiseAlphabet::default(),
            case: CaseMode::default(),
            max_gap: None,
            parallel: true,
        }
    }
}

impl MatchOptions {
    pub fn with_noise(mut self, noise: NoiseAlphabet) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    pub fn with_max_gap(mut self, max_gap: Option<usize>) -> Self {
        self.max_gap = max_gap;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
