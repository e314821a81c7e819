// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::io::IsTerminal;

use brokenneedle::cli::{Cli, OutputFormat, ScanArgs};
use brokenneedle::color::color_choice;
use brokenneedle::config::{self, Config};
use brokenneedle::discovery;
use brokenneedle::engine::Engine;
use brokenneedle::error::ExitCode;
use brokenneedle::input::{self, HaystackSource};
use brokenneedle::output::FormatOptions;
use brokenneedle::output::json::{self, JsonFormatter};
use brokenneedle::output::text::TextFormatter;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    let options = args.match_options(config.match_options());

    let needles = input::collect_needles(&args.needles, args.needles_file.as_deref())?;
    let stdin = std::io::stdin();
    let source = HaystackSource::select(
        args.haystack.as_deref(),
        args.haystack_file.as_deref(),
        stdin.is_terminal(),
    )?;
    let haystack = source.read(stdin.lock())?;

    let engine = Engine::new(&needles, options)?;
    let outcome = engine.run(&haystack);

    let format_options = FormatOptions::default()
        .with_outermost(args.outermost)
        .with_compact(args.compact);

    match args.output {
        OutputFormat::Text => {
            let choice = color_choice(args.color, args.no_color);
            let mut formatter = TextFormatter::stdout(choice, format_options);
            formatter.write(&outcome, &haystack, engine.needles())?;
        }
        OutputFormat::Json => {
            let output = json::create_output(&outcome, engine.needles(), &format_options);
            let mut formatter = JsonFormatter::new(std::io::stdout(), &format_options);
            formatter.write(&output)?;
        }
    }

    if outcome.report.is_empty() {
        Ok(ExitCode::NoMatch)
    } else {
        Ok(ExitCode::Success)
    }
}
