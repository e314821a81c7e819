// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::noise::{CaseMode, NoiseAlphabet};
use crate::options::MatchOptions;

/// Find whitespace-gapped needles in noisy text
#[derive(Parser)]
#[command(name = "brokenneedle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BROKENNEEDLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a haystack for needles
    Scan(ScanArgs),
}

#[derive(clap::Args, Default)]
pub struct ScanArgs {
    /// Haystack text ("-" or omitted reads stdin)
    #[arg(value_name = "HAYSTACK")]
    pub haystack: Option<String>,

    /// Read the haystack from a file
    #[arg(long, value_name = "PATH")]
    pub haystack_file: Option<PathBuf>,

    /// Needle to search for (repeatable)
    #[arg(short = 'n', long = "needle", value_name = "NEEDLE")]
    pub needles: Vec<String>,

    /// Read needles from a file, one per line
    #[arg(short = 'N', long, value_name = "PATH")]
    pub needles_file: Option<PathBuf>,

    /// Characters a gap may skip (default: any non-alphanumeric)
    #[arg(long, value_name = "CHARS")]
    pub noise: Option<String>,

    /// Compare literals case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Maximum noise characters per gap
    #[arg(long, value_name = "N")]
    pub max_gap: Option<usize>,

    /// Extend hits on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Also print the outermost-only view
    #[arg(long)]
    pub outermost: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Output compact JSON (no whitespace, single line)
    #[arg(long)]
    pub compact: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl ScanArgs {
    /// Apply command-line overrides on top of `base` (usually from the config file).
    pub fn match_options(&self, base: MatchOptions) -> MatchOptions {
        let mut options = base;
        if let Some(noise) = &self.noise {
            options = options.with_noise(NoiseAlphabet::chars(noise));
        }
        if self.ignore_case {
            options = options.with_case(CaseMode::Insensitive);
        }
        if self.max_gap.is_some() {
            options = options.with_max_gap(self.max_gap);
        }
        if self.no_parallel {
            options = options.with_parallel(false);
        }
        options
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
