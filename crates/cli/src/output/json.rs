// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Needles keep
//! their input order in the `matches` object.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::FormatOptions;
use crate::engine::Outcome;
use crate::matches::Span;
use crate::needle::NeedleSet;
use crate::resolve::MatchReport;

/// One occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SpanOutput {
    pub start: usize,
    pub length: usize,
    pub stop: usize,
}

impl From<&Span> for SpanOutput {
    fn from(span: &Span) -> Self {
        Self {
            start: span.start,
            length: span.len(),
            stop: span.stop,
        }
    }
}

/// Needle → occurrences, serialized as an object in needle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    entries: Vec<(String, Vec<SpanOutput>)>,
}

impl From<&MatchReport> for ReportOutput {
    fn from(report: &MatchReport) -> Self {
        Self {
            entries: report
                .iter()
                .map(|e| (e.name.clone(), e.spans.iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

impl Serialize for ReportOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (needle, spans) in &self.entries {
            map.serialize_entry(needle, spans)?;
        }
        map.end()
    }
}

/// Complete output of one scan.
#[derive(Debug, serde::Serialize)]
pub struct ScanOutput<'a> {
    pub haystack_len: usize,
    pub matches: ReportOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outermost: Option<ReportOutput>,
    /// Candidate needles per character position.
    pub possibilities: Vec<Vec<&'a str>>,
}

/// Build the serializable view of a run.
pub fn create_output<'a>(
    outcome: &Outcome,
    needles: &'a NeedleSet,
    options: &FormatOptions,
) -> ScanOutput<'a> {
    ScanOutput {
        haystack_len: outcome.haystack_len,
        matches: (&outcome.report).into(),
        outermost: options
            .outermost
            .then(|| (&outcome.report.outermost()).into()),
        possibilities: outcome
            .possibilities
            .iter()
            .map(|ids| ids.iter().map(|&id| needles.name(id)).collect())
            .collect(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
    compact: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W, options: &FormatOptions) -> Self {
        Self {
            writer,
            compact: options.compact,
        }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &ScanOutput<'_>) -> std::io::Result<()> {
        let json = if self.compact {
            serde_json::to_string(output)
        } else {
            serde_json::to_string_pretty(output)
        }
        .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
