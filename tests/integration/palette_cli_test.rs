//! Behavior of the dank16 binary

use predicates::prelude::*;

use crate::helpers::{stdout_lines, TestHome, MATUGEN_CACHE, PYWAL_LIGHT_CACHE};

#[test]
fn dark_palette_in_kitty_format() {
    let home = TestHome::new();
    let output = home.dank16().arg("#1f6feb").output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "color0   #1a1a1a");
    assert_eq!(lines[7], "color7   #abb2bf");
    assert_eq!(lines[8], "color8   #5c6370");
    assert_eq!(lines[15], "color15   #ffffff");
    for (slot, line) in lines.iter().enumerate() {
        let prefix = format!("color{}   #", slot);
        assert!(line.starts_with(&prefix), "{line}");
        assert_eq!(line.len(), prefix.len() + 6);
    }
}

#[test]
fn light_flag_switches_tables() {
    let home = TestHome::new();
    let output = home.dank16().args(["1f6feb", "--light"]).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "color0   #f8f8f8");
    assert_eq!(lines[7], "color7   #2e2e2e");
    assert_eq!(lines[15], "color15   #1a1a1a");
}

#[test]
fn explicit_background_fills_slot_zero() {
    let home = TestHome::new();
    home.dank16()
        .args(["#1f6feb", "--background", "#282C34"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("color0   #282c34\n"));
}

#[test]
fn output_is_deterministic() {
    let home = TestHome::new();
    let args = ["#c678dd", "--honor-primary", "#8ab4f8"];
    let first = home.dank16().args(args).output().unwrap();
    let second = home.dank16().args(args).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_base_color_exits_one_with_usage() {
    let home = TestHome::new();
    home.dank16()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No base color provided"))
        .stderr(predicate::str::contains("Usage: dank16"));
}

#[test]
fn malformed_base_is_a_usage_error() {
    let home = TestHome::new();
    home.dank16()
        .arg("#12345")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("6 digits"));
}

#[test]
fn light_and_dark_are_mutually_exclusive() {
    let home = TestHome::new();
    home.dank16()
        .args(["#1f6feb", "--light", "--dark"])
        .assert()
        .code(2);
}

#[test]
fn cache_supplies_base_and_ghostty_extras() {
    let home = TestHome::new();
    let cache = home.write_cache("colors.json", MATUGEN_CACHE);

    let output = home
        .dank16()
        .arg("--ghostty")
        .arg("--wal-cache")
        .arg(&cache)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 22);
    assert_eq!(lines[0], "background = #101418");
    assert_eq!(lines[1], "foreground = #e0e2e8");
    assert_eq!(lines[2], "cursor-color = #e0e2e8");
    assert_eq!(lines[5], "selection-foreground = #e0e2e8");
    assert_eq!(lines[6], "palette = 0=#101418");
    assert!(lines[21].starts_with("palette = 15=#"));
}

#[test]
fn default_cache_location_is_under_home() {
    let home = TestHome::new();
    home.write_cache(".cache/wal/colors.json", PYWAL_LIGHT_CACHE);

    let lines = stdout_lines(&home.dank16().output().unwrap());
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "color0   #fdf8fd");
    assert_eq!(lines[15], "color15   #1a1a1a");
}

#[test]
fn explicit_mode_beats_cached_background() {
    let home = TestHome::new();
    let cache = home.write_cache("colors.json", PYWAL_LIGHT_CACHE);

    let output = home
        .dank16()
        .arg("--dark")
        .arg("--wal-cache")
        .arg(&cache)
        .output()
        .unwrap();
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "color0   #fdf8fd");
    assert_eq!(lines[15], "color15   #ffffff");
}

#[test]
fn unreadable_cache_is_ignored_when_base_given() {
    let home = TestHome::new();
    let cache = home.write_cache("colors.json", "{ truncated");

    let output = home
        .dank16()
        .arg("#1f6feb")
        .arg("--wal-cache")
        .arg(&cache)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0], "color0   #1a1a1a");
}

#[test]
fn config_can_select_ghostty_dialect() {
    let home = TestHome::new();
    home.write_config("[output]\ndialect = \"ghostty\"\n");

    home.dank16()
        .arg("#1f6feb")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("palette = 0=#1a1a1a\n"));
}

#[test]
fn config_can_relocate_cache() {
    let home = TestHome::new();
    let cache = home.write_cache("schemes/current.json", MATUGEN_CACHE);
    home.write_config(&format!(
        "[sources]\nwal_cache = {:?}\n",
        cache.to_string_lossy()
    ));

    let lines = stdout_lines(&home.dank16().output().unwrap());
    assert_eq!(lines[0], "color0   #101418");
}

#[test]
fn malformed_config_exits_one() {
    let home = TestHome::new();
    home.write_config("[output\n");

    home.dank16()
        .arg("#1f6feb")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let home = TestHome::new();
    let output = home
        .dank16()
        .env("DANK16_LOG", "debug")
        .args(["#1f6feb", "--wal-cache", "/nonexistent/colors.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 16);
    assert!(String::from_utf8_lossy(&output.stderr).contains("color-scheme cache unavailable"));
}

#[test]
fn help_lists_all_flags() {
    let home = TestHome::new();
    let output = home.dank16().arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--light",
        "--dark",
        "--ghostty",
        "--honor-primary",
        "--background",
        "--wal-cache",
    ] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}
