// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Needle compilation.
//!
//! A needle is broken on whitespace into literal segments. Consecutive
//! segments are joined by a gap that may absorb any run of noise in the
//! haystack, including an empty one. The compiled form is plain data, so
//! characters like `*` or `.` are always compared literally.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Dense index of a needle within its [`NeedleSet`], in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeedleId(pub usize);

impl NeedleId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeedleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compiled match specification for one needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedleSpec {
    raw: String,
    segments: Vec<String>,
}

impl NeedleSpec {
    /// The needle as supplied; this is its identifier.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Literal segments in order. Never empty, no segment is empty.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// Compile a needle string into its match specification.
pub fn compile(needle: &str) -> Result<NeedleSpec> {
    if needle.is_empty() {
        return Err(Error::InvalidNeedle {
            needle: needle.to_string(),
            reason: "needle is empty".to_string(),
        });
    }

    let segments: Vec<String> = needle.split_whitespace().map(String::from).collect();
    if segments.is_empty() {
        return Err(Error::InvalidNeedle {
            needle: needle.to_string(),
            reason: "needle has no literal segment".to_string(),
        });
    }

    Ok(NeedleSpec {
        raw: needle.to_string(),
        segments,
    })
}

/// A fixed set of compiled needles with unique raw strings.
#[derive(Debug, Clone, Default)]
pub struct NeedleSet {
    specs: Vec<NeedleSpec>,
    by_raw: HashMap<String, NeedleId>,
}

impl NeedleSet {
    /// Compile every needle, preserving input order.
    pub fn new<I, S>(needles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = NeedleSet::default();
        for needle in needles {
            let needle = needle.as_ref();
            if set.by_raw.contains_key(needle) {
                return Err(Error::DuplicateNeedle {
                    needle: needle.to_string(),
                });
            }
            let spec = compile(needle)?;
            let id = NeedleId(set.specs.len());
            set.by_raw.insert(spec.raw.clone(), id);
            set.specs.push(spec);
        }
        tracing::debug!(
            "compiled {} needles ({} segments)",
            set.specs.len(),
            set.specs.iter().map(|s| s.segments.len()).sum::<usize>()
        );
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, id: NeedleId) -> Option<&NeedleSpec> {
        self.specs.get(id.0)
    }

    /// Raw string of a needle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    pub fn name(&self, id: NeedleId) -> &str {
        &self.specs[id.0].raw
    }

    pub fn id_of(&self, needle: &str) -> Option<NeedleId> {
        self.by_raw.get(needle).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NeedleId, &NeedleSpec)> {
        self.specs.iter().enumerate().map(|(i, s)| (NeedleId(i), s))
    }
}

#[cfg(test)]
#[path = "needle_tests.rs"]
mod tests;
