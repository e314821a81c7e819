//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running `brokenneedle scan`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the brokenneedle binary
pub fn brokenneedle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("brokenneedle"));
    cmd.env_remove("BROKENNEEDLE_CONFIG")
        .env_remove("BROKENNEEDLE_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Create a scan builder
pub fn scan() -> ScanBuilder<Text> {
    ScanBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Scan command builder for fluent test assertions
pub struct ScanBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Vec<u8>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl ScanBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> ScanBuilder<Json> {
        ScanBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    /// Expect at least one match (exit 0)
    pub fn matches(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    /// Expect a successful run with nothing matched (exit 1)
    pub fn misses(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

// JSON mode -> returns ScanJson
impl ScanBuilder<Json> {
    pub fn matches(self) -> ScanJson {
        let output = run_exits(self.command(), 0);
        ScanJson::new(&output.output.stdout)
    }

    #[allow(dead_code)]
    pub fn misses(self) -> ScanJson {
        let output = run_exits(self.command(), 1);
        ScanJson::new(&output.output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> ScanBuilder<Mode> {
    /// Add a `--needle`
    pub fn needle(mut self, needle: &str) -> Self {
        self.args.push("--needle".to_string());
        self.args.push(needle.to_string());
        self
    }

    /// Add several `--needle` flags
    pub fn needles(self, needles: &[&str]) -> Self {
        needles.iter().fold(self, |b, n| b.needle(n))
    }

    /// Positional haystack argument
    pub fn haystack(mut self, haystack: &str) -> Self {
        self.args.push(haystack.to_string());
        self
    }

    /// Bytes fed to stdin
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = input.into();
        self
    }

    /// Set fixture directory by name
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the command
    fn command(self) -> assert_cmd::Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();

        let mut cmd = brokenneedle_cmd();
        cmd.arg("scan");
        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        let mut cmd = assert_cmd::Command::from_std(cmd);
        cmd.write_stdin(self.stdin);
        cmd
    }
}

fn run_exits(mut cmd: assert_cmd::Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// JSON output of one scan
pub struct ScanJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ScanJson {
    fn new(stdout: &[u8]) -> Self {
        let root = serde_json::from_slice(stdout).expect("stdout should be valid JSON");
        Self { root }
    }

    pub fn root(&self) -> &serde_json::Value {
        &self.root
    }

    /// `(start, stop)` pairs reported for `needle`
    pub fn spans(&self, needle: &str) -> Vec<(u64, u64)> {
        self.root["matches"][needle]
            .as_array()
            .unwrap_or_else(|| panic!("no matches entry for {needle:?}"))
            .iter()
            .map(|m| (m["start"].as_u64().unwrap(), m["stop"].as_u64().unwrap()))
            .collect()
    }

    /// Candidate needles at character position `pos`
    pub fn possible_at(&self, pos: usize) -> Vec<String> {
        self.root["possibilities"][pos]
            .as_array()
            .unwrap_or_else(|| panic!("no possibilities at {pos}"))
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout.as_ref(), expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should not match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

/// Path to a directory under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Creates a temp directory marked as a git root so config discovery stops there.
pub fn temp_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}
