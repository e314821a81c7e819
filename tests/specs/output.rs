//! Output format specs: text layout, JSON shape, and color.

use crate::prelude::*;

/// > Text output lists matches, then possibility runs, then a summary
#[test]
fn text_output_layout() {
    scan()
        .needles(&["NEW YORK", "YORK"])
        .haystack("NEW,YORK")
        .matches()
        .stdout_eq(
            r#"matches:
  NEW YORK: 0..8 (length 8) "NEW,YORK"
  YORK: 4..8 (length 4) "YORK"
possibilities:
  0..4  NEW YORK
  4..8  NEW YORK | YORK
2 of 2 needles matched (2 occurrences)
"#,
        );
}

/// > Uncovered runs are shown as "-"
#[test]
fn uncovered_runs_are_dashes() {
    scan()
        .needle("YORK")
        .haystack("',YORK,'")
        .matches()
        .stdout_has("  0..2  -\n")
        .stdout_has("  6..8  -\n");
}

/// > --outermost adds the outermost-only section
#[test]
fn outermost_section() {
    scan()
        .needles(&["NEW YORK", "YORK"])
        .haystack("NEW,YORK")
        .args(&["--outermost"])
        .matches()
        .stdout_has("outermost:\n  NEW YORK: 0..8 (length 8) \"NEW,YORK\"\npossibilities:");
}

/// > JSON lists every needle, matched or not
#[test]
fn json_lists_every_needle() {
    let json = scan()
        .needles(&["YORK", "AUSTRIA"])
        .haystack("YORK")
        .json()
        .matches();

    assert_eq!(
        json.root()["matches"],
        serde_json::json!({"YORK": [{"start": 0, "length": 4, "stop": 4}], "AUSTRIA": []})
    );
    assert!(json.root().get("outermost").is_none());
}

/// > JSON outermost view appears only when requested
#[test]
fn json_outermost() {
    let json = scan()
        .needles(&["NEW YORK", "YORK"])
        .haystack("NEW,YORK")
        .args(&["--outermost"])
        .json()
        .matches();
    assert_eq!(json.root()["outermost"]["YORK"], serde_json::json!([]));
}

/// > --compact JSON is a single line
#[test]
fn compact_json_is_one_line() {
    let output = scan()
        .needle("YORK")
        .haystack("YORK")
        .args(&["-o", "json", "--compact"])
        .matches();
    assert_eq!(output.stdout().lines().count(), 1);
}

/// > No color when stdout is not a terminal
#[test]
fn no_color_when_piped() {
    scan()
        .needle("YORK")
        .haystack("YORK")
        .matches()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces color output
#[test]
fn color_env_forces_color() {
    scan()
        .needle("YORK")
        .haystack("YORK")
        .env("COLOR", "1")
        .matches()
        .stdout_has("\x1b[");
}

/// > NO_COLOR wins over COLOR
#[test]
fn no_color_env_wins() {
    scan()
        .needle("YORK")
        .haystack("YORK")
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .matches()
        .stdout_lacks("\x1b[");
}

/// > --color forces color output
#[test]
fn color_flag_forces_color() {
    scan()
        .needle("YORK")
        .haystack("YORK")
        .args(&["--color"])
        .matches()
        .stdout_has("\x1b[");
}
