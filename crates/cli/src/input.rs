// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading needles and haystacks from the command line, files, or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::haystack::Haystack;

/// Where the haystack text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaystackSource {
    Inline(String),
    File(PathBuf),
    Stdin,
    /// No haystack given and stdin is a terminal.
    Missing,
}

impl HaystackSource {
    /// Pick a source from the positional argument and `--haystack-file`.
    ///
    /// A positional `-` reads stdin. With no source at all, piped stdin is
    /// read and a terminal stdin means nothing was supplied.
    pub fn select(
        inline: Option<&str>,
        file: Option<&Path>,
        stdin_is_terminal: bool,
    ) -> Result<Self> {
        match (inline, file) {
            (Some(_), Some(_)) => Err(Error::Argument(
                "give the haystack either inline or with --haystack-file, not both".to_string(),
            )),
            (None, None) if stdin_is_terminal => Ok(Self::Missing),
            (Some("-"), None) | (None, None) => Ok(Self::Stdin),
            (Some(text), None) => Ok(Self::Inline(text.to_string())),
            (None, Some(path)) => Ok(Self::File(path.to_path_buf())),
        }
    }

    /// Read the haystack; `stdin` is only consumed for [`HaystackSource::Stdin`].
    pub fn read(&self, mut stdin: impl Read) -> Result<Haystack> {
        match self {
            Self::Inline(text) => Ok(Haystack::new(text.as_str())),
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| Error::Io {
                    path: path.clone(),
                    source: e,
                })?;
                decode(bytes, &path.display().to_string())
            }
            Self::Stdin => {
                let mut bytes = Vec::new();
                stdin.read_to_end(&mut bytes).map_err(|e| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
                decode(bytes, "<stdin>")
            }
            Self::Missing => Haystack::from_input(None),
        }
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<Haystack> {
    let text = String::from_utf8(bytes).map_err(|e| Error::InvalidHaystack {
        reason: format!("{} is not valid UTF-8 (byte {})", origin, e.utf8_error().valid_up_to()),
    })?;
    tracing::debug!("read {} bytes of haystack from {}", text.len(), origin);
    Ok(Haystack::new(text))
}

/// One needle per line. Blank lines are skipped and a trailing `\r` is dropped.
pub fn parse_needles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a needles file.
pub fn read_needles_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_needles(&content))
}

/// Needles from repeated `--needle` flags followed by those from `--needles-file`.
pub fn collect_needles(inline: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut needles = inline.to_vec();
    if let Some(path) = file {
        needles.extend(read_needles_file(path)?);
    }
    if needles.is_empty() {
        return Err(Error::Argument(
            "no needles given (use --needle or --needles-file)".to_string(),
        ));
    }
    Ok(needles)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
