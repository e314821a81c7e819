//! Configuration parsing and validation.
//!
//! Handles brokenneedle.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::noise::{CaseMode, NoiseAlphabet};
use crate::options::MatchOptions;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    matching: Option<toml::Value>,

    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// How literals and gaps are matched.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Scan execution settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[matching]` section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Characters a gap may skip. Absent means every non-alphanumeric character.
    pub noise: Option<String>,

    /// Literal comparison is case-sensitive (default: true).
    pub case_sensitive: Option<bool>,

    /// Maximum noise characters per gap (default: unbounded).
    pub max_gap: Option<usize>,
}

/// `[scan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Extend hits on multiple threads (default: true).
    #[serde(default = "ScanConfig::default_parallel")]
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel: Self::default_parallel(),
        }
    }
}

impl ScanConfig {
    fn default_parallel() -> bool {
        true
    }
}

impl Config {
    /// Matching options described by this config.
    pub fn match_options(&self) -> MatchOptions {
        let noise = match &self.matching.noise {
            Some(chars) => NoiseAlphabet::chars(chars),
            None => NoiseAlphabet::NonAlphanumeric,
        };
        let case = match self.matching.case_sensitive {
            Some(false) => CaseMode::Insensitive,
            _ => CaseMode::Sensitive,
        };
        MatchOptions::default()
            .with_noise(noise)
            .with_case(case)
            .with_max_gap(self.matching.max_gap)
            .with_parallel(self.scan.parallel)
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "brokenneedle.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "matching", "scan"];

/// Known `[matching]` keys.
const KNOWN_MATCHING_KEYS: &[&str] = &["noise", "case_sensitive", "max_gap"];

/// Known `[scan]` keys.
const KNOWN_SCAN_KEYS: &[&str] = &["parallel"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    check_version(version, path)?;

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let matching = match flexible.matching {
        Some(value) => {
            warn_unknown_section_keys(path, "matching", &value, KNOWN_MATCHING_KEYS);
            value
                .try_into::<MatchingConfig>()
                .map_err(|e| config_error(path, format!("[matching]: {}", e)))?
        }
        None => MatchingConfig::default(),
    };

    let scan = match flexible.scan {
        Some(value) => {
            warn_unknown_section_keys(path, "scan", &value, KNOWN_SCAN_KEYS);
            value
                .try_into::<ScanConfig>()
                .map_err(|e| config_error(path, format!("[scan]: {}", e)))?
        }
        None => ScanConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        matching,
        scan,
    })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade brokenneedle to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

fn warn_unknown_section_keys(path: &Path, section: &str, value: &toml::Value, known: &[&str]) {
    if let toml::Value::Table(table) = value {
        for key in table.keys() {
            if !known.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("{}.{}", section, key));
            }
        }
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::debug!("ignoring unknown config key {}", key);
    eprintln!(
        "brokenneedle: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
