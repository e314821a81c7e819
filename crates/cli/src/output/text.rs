// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! matches:
//!   <needle>: <start>..<stop> (length <n>) "<text>"
//! possibilities:
//!   <start>..<stop>  <needle> | <needle>
//! <m> of <n> needles matched (<k> occurrences)
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::engine::Outcome;
use crate::haystack::Haystack;
use crate::needle::NeedleSet;
use crate::possibility::PossibilityIndex;
use crate::resolve::MatchReport;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write every section for one run.
    pub fn write(
        &mut self,
        outcome: &Outcome,
        haystack: &Haystack,
        needles: &NeedleSet,
    ) -> std::io::Result<()> {
        self.write_report("matches", &outcome.report, haystack)?;
        if self.options.outermost {
            self.write_report("outermost", &outcome.report.outermost(), haystack)?;
        }
        self.write_possibilities(&outcome.possibilities, needles)?;
        self.write_summary(&outcome.report)
    }

    fn write_header(&mut self, title: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(self.out, "{}:", title)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// One line per occurrence, needles in input order.
    pub fn write_report(
        &mut self,
        title: &str,
        report: &MatchReport,
        haystack: &Haystack,
    ) -> std::io::Result<()> {
        self.write_header(title)?;
        if report.is_empty() {
            return writeln!(self.out, "  (none)");
        }

        for entry in report.matched() {
            for span in &entry.spans {
                write!(self.out, "  ")?;
                self.out.set_color(&scheme::needle())?;
                write!(self.out, "{}", entry.name)?;
                self.out.reset()?;
                write!(self.out, ": ")?;
                self.out.set_color(&scheme::span())?;
                write!(self.out, "{}..{}", span.start, span.stop)?;
                self.out.reset()?;
                write!(self.out, " (length {}) ", span.len())?;
                self.out.set_color(&scheme::excerpt())?;
                write!(self.out, "{:?}", haystack.span_text(span.start, span.stop))?;
                self.out.reset()?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Runs of positions sharing the same candidate set.
    pub fn write_possibilities(
        &mut self,
        index: &PossibilityIndex,
        needles: &NeedleSet,
    ) -> std::io::Result<()> {
        self.write_header("possibilities")?;
        for run in index.runs() {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::span())?;
            write!(self.out, "{}..{}", run.span.start, run.span.stop)?;
            self.out.reset()?;
            write!(self.out, "  ")?;

            if run.needles.is_empty() {
                self.out.set_color(&scheme::uncovered())?;
                write!(self.out, "-")?;
                self.out.reset()?;
            } else {
                let names: Vec<&str> = run.needles.iter().map(|&id| needles.name(id)).collect();
                write!(self.out, "{}", names.join(" | "))?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, report: &MatchReport) -> std::io::Result<()> {
        let needles = report.iter().len();
        let matched = report.matched().count();
        let total = report.total();
        writeln!(
            self.out,
            "{} of {} needle{} matched ({} occurrence{})",
            matched,
            needles,
            if needles == 1 { "" } else { "s" },
            total,
            if total == 1 { "" } else { "s" }
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
