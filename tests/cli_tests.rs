use regex::Regex;
use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_morseref"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn test_lookup_codes_and_patterns() {
    let out = run(&["lookup", "2", "...", ".-.-", "16"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);

    let re = Regex::new(r"^\s*(\d+)\s+([.-]*)\s+(.+)$").unwrap();
    let caps = re.captures(lines[0]).unwrap();
    assert_eq!(&caps[1], "2");
    assert_eq!(&caps[2], "-");
    assert_eq!(&caps[3], "t");

    assert!(lines[1].ends_with('s'));
    assert!(lines[2].ends_with("\\r"));
    assert!(lines[3].ends_with("(unassigned)"));
}

#[test]
fn test_lookup_strict_rejects_unassigned() {
    let out = run(&["lookup", "--strict", "16"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no assigned character"));
}

#[test]
fn test_lookup_out_of_range() {
    let out = run(&["lookup", "116"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("outside the reference table"));
}

#[test]
fn test_table_csv() {
    let out = run(&["table", "--format", "csv"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("code,pattern,symbol"));
    // Header plus one line per assigned entry
    assert_eq!(text.trim_end().lines().count(), 53);
}

#[test]
fn test_table_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{ "format": "json", "show_unassigned": true }"#).unwrap();

    let out = run(&["table", "--config", path.to_str().unwrap()]);
    assert!(out.status.success());
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(parsed.len(), 116);
}

#[test]
fn test_listing() {
    let out = run(&["listing", "--max", "9"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[8].trim(), "8  ---");
}

#[test]
fn test_lookup_strict_flag_after_queries() {
    let out = run(&["lookup", ".-", "--strict", "16"]);
    assert_eq!(out.status.code(), Some(1));
    // The flag is honored, so 16 is looked up and rejected as unassigned.
    assert!(stdout(&out).lines().next().unwrap().ends_with('a'));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Code 16 has no assigned character"), "{}", stderr);
    assert!(!stderr.contains("exceeds"));
}

#[test]
fn test_lookup_hyphen_patterns_after_separator() {
    let out = run(&["lookup", "--strict", "--", "-", "--", "---", "--.-"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let symbols: Vec<&str> = text
        .lines()
        .map(|l| l.split_whitespace().last().unwrap())
        .collect();
    assert_eq!(symbols, vec!["t", "m", "o", "q"]);

    let re = Regex::new(r"^\s*4\s+--\s+m$").unwrap();
    assert!(text.lines().any(|l| re.is_match(l)));
}

#[test]
fn test_lookup_lone_dash_without_separator() {
    let out = run(&["lookup", "-"]);
    assert!(out.status.success());
    assert!(stdout(&out).trim_end().ends_with('t'));
}

#[test]
fn test_lookup_huge_code_reports_query_text() {
    let out = run(&["lookup", "99999999999999999999999"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'99999999999999999999999'"), "{}", stderr);
    assert!(!stderr.contains("18446744073709551615"));
}

#[test]
fn test_table_json_line_break_rendering() {
    let out = run(&["table", "--format", "json", "--show-line-break-as", "NL"]);
    assert!(out.status.success());
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout(&out)).unwrap();
    let line_break = parsed.iter().find(|r| r["code"] == 26).unwrap();
    assert_eq!(line_break["symbol"], "NL");
}
