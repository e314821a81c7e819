pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod haystack;
pub mod input;
pub mod matches;
pub mod needle;
pub mod noise;
pub mod options;
pub mod output;
pub mod possibility;
pub mod resolve;
pub mod scanner;

pub use engine::{Engine, Outcome};
pub use error::{Error, ExitCode, Result};
pub use haystack::Haystack;
pub use matches::{Match, RawMatchSet, Span};
pub use needle::{NeedleId, NeedleSet, NeedleSpec, compile};
pub use noise::{CaseMode, NoiseAlphabet};
pub use options::MatchOptions;
pub use possibility::{PossibilityIndex, build_index};
pub use resolve::{MatchReport, ReportEntry, resolve};
pub use scanner::{Scanner, scan};

#[cfg(test)]
pub mod test_utils;
