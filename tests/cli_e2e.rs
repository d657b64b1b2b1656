//! End-to-end CLI tests for chatframe.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // US export, 12-hour clock
    let us = "12/25/23, 2:30 PM - Messages and calls are end-to-end encrypted.
12/25/23, 2:31 PM - Alice: Hello everyone!
12/25/23, 2:32 PM - Bob: Hi Alice!
12/25/23, 2:33 PM - Alice: <Media omitted>
12/25/23, 2:34 PM - Alice: How is everyone doing?
12/26/23, 9:05 AM - Bob: I'm good!";
    fs::write(dir.path().join("us_export.txt"), us).unwrap();

    // EU export, day-first with 4-digit year
    let eu = "15/01/2024, 10:30 - Мария: Привет всем! 🎉
15/01/2024, 10:31 - Bob: Привет!
15/01/2024, 22:05 - Мария: Как дела?";
    fs::write(dir.path().join("eu_export.txt"), eu).unwrap();

    // Semicolons and quotes for CSV escaping
    let special = "06/06/25, 19:29 - Alice: Hello; with; semicolons
06/06/25, 19:30 - Bob: Quotes \"inside\" text";
    fs::write(dir.path().join("special.txt"), special).unwrap();

    // Garbage text without any timestamp
    fs::write(dir.path().join("garbage.txt"), "just some notes\nno timestamps\n").unwrap();

    // Wrong extension
    fs::write(dir.path().join("export.json"), "{}").unwrap();

    dir
}

fn chatframe_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatframe"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_us_export_to_csv() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("records"));

        assert!(output.exists());
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Alice"));
        assert!(content.contains("Hello everyone!"));
        // Media placeholder rows are dropped by default
        assert!(!content.contains("<Media omitted>"));
    }

    #[test]
    fn test_notification_rows_kept_under_sentinel() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("group_notification"));
        assert!(content.contains("end-to-end encrypted"));
    }

    #[test]
    fn test_eu_export_with_unicode() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("eu_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Мария"));
        assert!(content.contains("Привет всем! 🎉"));
        // Day-first reading: January, not month 15
        assert!(content.contains("January"));
    }

    #[test]
    fn test_keep_media_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "--keep-media",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("<Media omitted>"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_output_csv_default() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        // Semicolon delimiter with the full derived header
        assert!(content.starts_with("timestamp;author;body;date;year;month_num"));
    }

    #[test]
    fn test_output_json() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.json");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "-f",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed.is_array());
        assert!(!parsed.as_array().unwrap().is_empty());
        assert!(parsed[0].get("period").is_some());
    }

    #[test]
    fn test_output_jsonl() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.jsonl");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "-f",
                "jsonl",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        for line in content.lines() {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed.is_object());
            assert!(parsed.get("author").is_some());
            assert!(parsed.get("body").is_some());
        }
    }

    #[test]
    fn test_basic_columns_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "--basic-columns",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("timestamp;author;body\n"));
        assert!(!content.contains("day_name"));
    }

    #[test]
    fn test_default_output_filename_changes_with_format() {
        let fixtures = setup_fixtures();

        chatframe_cmd()
            .current_dir(fixtures.path())
            .args(["us_export.txt", "-f", "jsonl"])
            .assert()
            .success();

        assert!(fixtures.path().join("records.jsonl").exists());
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_filter_by_author() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "--author",
                "Alice",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Author:"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Alice"));
        assert!(!content.contains("Bob"));
        assert!(!content.contains("group_notification"));
    }

    #[test]
    fn test_filter_by_author_case_insensitive() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "--author",
                "alice",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Alice"));
    }

    #[test]
    fn test_filter_date_range() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "--after",
                "2023-12-26",
                "--before",
                "2023-12-31",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("After:"))
            .stdout(predicate::str::contains("Before:"));

        let content = fs::read_to_string(&output).unwrap();
        // Only Bob's Dec 26 message falls in the window
        assert!(content.contains("I'm good!"));
        assert!(!content.contains("Hello everyone!"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatframe_cmd()
            .args(["nonexistent_file.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_wrong_extension() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("export.json");

        chatframe_cmd()
            .args([input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported file type"));
    }

    #[test]
    fn test_no_timestamp_pattern() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("garbage.txt");

        chatframe_cmd()
            .args([input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no valid timestamp pattern"));
    }

    #[test]
    fn test_invalid_date_format() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "--after", "not-a-date"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_missing_input_argument() {
        chatframe_cmd().assert().failure();
    }

    #[test]
    fn test_invalid_format_option() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-f", "invalid_format"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_special_characters_csv_escaping() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("special.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"Hello; with; semicolons\""));
    }

    #[test]
    fn test_path_with_spaces() {
        let fixtures = setup_fixtures();
        let dir_with_space = fixtures.path().join("path with spaces");
        fs::create_dir_all(&dir_with_space).unwrap();

        let input = dir_with_space.join("chat.txt");
        fs::copy(fixtures.path().join("us_export.txt"), &input).unwrap();

        let output = dir_with_space.join("output.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(output.exists());
    }
}

// ============================================================================
// Help and Version Tests
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatframe_cmd()
            .args(["--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatframe"))
            .stdout(predicate::str::contains("--keep-media"))
            .stdout(predicate::str::contains("--author"));
    }

    #[test]
    fn test_help_flag_short() {
        chatframe_cmd()
            .args(["-h"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_version_flag() {
        chatframe_cmd()
            .args(["--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatframe"))
            .stdout(predicate::str::contains("0."));
    }
}

// ============================================================================
// Output Verification Tests
// ============================================================================

mod output_verification {
    use super::*;

    #[test]
    fn test_output_shows_statistics() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.csv");

        chatframe_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("Parsed"))
            .stdout(predicate::str::contains("Authors"))
            .stdout(predicate::str::contains("Performance"))
            .stdout(predicate::str::contains("records/sec"));
    }

    #[test]
    fn test_output_shows_format_info() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("us_export.txt");
        let output = output_path(&fixtures, "out.json");

        chatframe_cmd()
            .args([
                input.to_str().unwrap(),
                "-f",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Format:"))
            .stdout(predicate::str::contains("JSON"));
    }
}
