//! Integration tests for the cellsort CLI.

use std::path::PathBuf;
use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write_temp_csv(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cellsort-test-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).expect("Failed to write temp csv");
    path
}

#[test]
fn test_sort_text_ascending() {
    let path = write_temp_csv("asc.csv", "banana\napple\ncherry\n");
    let (stdout, _, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=text"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "apple\nbanana\ncherry\n");
}

#[test]
fn test_sort_number_descending() {
    let path = write_temp_csv("desc.csv", "1\n3\n2\n");
    let (stdout, _, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=number DOWN"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "3\n2\n1\n");
}

#[test]
fn test_comma_joins_comparators_not_entries() {
    let path = write_temp_csv("tie.csv", "a,2\na,1\nb,0\n");
    let (_, stderr, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=text,B=number"]);
    assert_ne!(code, 0);
    assert!(
        stderr.contains("Invalid character '=' at 8"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_two_entry_spec() {
    let path = write_temp_csv("two.csv", "a,2\na,1\nb,0\n");
    let (stdout, _, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=text;B=number"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "a,1\na,2\nb,0\n");
}

#[test]
fn test_duplicate_column_error() {
    let path = write_temp_csv("dup.csv", "x\n");
    let (_, stderr, code) = run_command(&[
        path.to_str().unwrap(),
        "--sort",
        "A=day-of-month;A=month-of-year",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Duplicate column A"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_comparator_error() {
    let path = write_temp_csv("unknown.csv", "x\n");
    let (_, stderr, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=no-such"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown comparator no-such"), "stderr: {}", stderr);
}

#[test]
fn test_list_comparators() {
    let (stdout, _, code) = run_command(&["--list-comparators"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("day-of-month"));
    assert!(stdout.contains("text-case-insensitive"));
}

#[test]
fn test_aliases_restrict_and_rename() {
    let path = write_temp_csv("alias.csv", "b\na\n");
    let (stdout, _, code) = run_command(&[
        path.to_str().unwrap(),
        "--aliases",
        "txt text",
        "--sort",
        "A=txt",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "a\nb\n");

    // The original name is no longer visible through the alias layer.
    let (_, stderr, code) = run_command(&[
        path.to_str().unwrap(),
        "--aliases",
        "txt text",
        "--sort",
        "A=text",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown comparator text"), "stderr: {}", stderr);
}

#[test]
fn test_dates_sort_chronologically() {
    let path = write_temp_csv("dates.csv", "2022-02-02\n1999-12-31\n2000-01-01\n");
    let (stdout, _, code) = run_command(&[path.to_str().unwrap(), "--sort", "A=date"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "1999-12-31\n2000-01-01\n2022-02-02\n");
}
