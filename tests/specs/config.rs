//! Config file specs: discovery, validation, and flag precedence.

use crate::prelude::*;
use std::fs;

/// > brokenneedle.toml in the working directory is picked up
#[test]
fn discovered_config_sets_noise() {
    let json = scan()
        .on("comma")
        .args(&["-N", "needles.txt"])
        .haystack("NEW,ORLEANS,ORLEANS,NEW,YORK")
        .json()
        .matches();
    assert_eq!(json.spans("ORLEANS"), vec![(4, 11), (12, 19)]);
}

/// > Config noise excludes other punctuation
#[test]
fn discovered_config_restricts_gaps() {
    scan()
        .on("comma")
        .needle("NEW YORK")
        .haystack("NEW!YORK")
        .misses();
}

/// > Flags override config values
#[test]
fn flags_override_config() {
    scan()
        .on("comma")
        .needle("NEW YORK")
        .haystack("NEW!YORK")
        .args(&["--noise", "!"])
        .matches();
}

/// > --config selects an explicit file
#[test]
fn explicit_config_path() {
    let dir = temp_root();
    fs::write(
        dir.path().join("strict.toml"),
        "version = 1\n[matching]\nmax_gap = 0\n",
    )
    .unwrap();

    scan()
        .pwd(dir.path())
        .needle("NEW YORK")
        .haystack("NEW,YORK")
        .args(&["--config", "strict.toml"])
        .misses();
}

/// > BROKENNEEDLE_CONFIG selects an explicit file
#[test]
fn config_env_var() {
    let dir = temp_root();
    let path = dir.path().join("folded.toml");
    fs::write(&path, "version = 1\n[matching]\ncase_sensitive = false\n").unwrap();

    scan()
        .pwd(dir.path())
        .needle("YORK")
        .haystack("york")
        .env("BROKENNEEDLE_CONFIG", path.to_str().unwrap())
        .matches();
}

/// > A missing explicit config is an input error
#[test]
fn missing_explicit_config_exits_two() {
    let dir = temp_root();
    scan()
        .pwd(dir.path())
        .needle("YORK")
        .haystack("YORK")
        .args(&["--config", "nope.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unsupported config versions are rejected
#[test]
fn unsupported_version_exits_two() {
    let dir = temp_root();
    fs::write(dir.path().join("brokenneedle.toml"), "version = 2\n").unwrap();

    scan()
        .pwd(dir.path())
        .needle("YORK")
        .haystack("YORK")
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > Unknown keys warn and are ignored
#[test]
fn unknown_keys_warn() {
    let dir = temp_root();
    fs::write(
        dir.path().join("brokenneedle.toml"),
        "version = 1\nfuzzy = true\n[matching]\nstemming = true\n",
    )
    .unwrap();

    scan()
        .pwd(dir.path())
        .needle("YORK")
        .haystack("YORK")
        .matches()
        .stderr_has("unrecognized field `fuzzy`")
        .stderr_has("unrecognized field `matching.stemming`");
}
