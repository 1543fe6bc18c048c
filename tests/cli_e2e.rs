//! End-to-end CLI tests for chatplot.
//!
//! These tests run the actual binary against small exports and check the
//! files it writes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const EXPORT: &str = "\
12/11/22, 18:01 - Los mensajes y las llamadas están cifrados de extremo a extremo.
12/11/22, 18:02 - ~ Lucía: hola a todos
12/11/22, 18:05 - Pablo: qué tal
13/11/22, 09:15 - Pablo: <Multimedia omitido>
01/01/23, 00:00 - ~ Lucía: feliz año
32/13/99, 99:99 - Pablo: fecha rota
";

/// Creates a temporary directory with an export and a stop-word list.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), EXPORT).unwrap();
    fs::write(dir.path().join("stop.txt"), "# common words\na\nqué\n\n").unwrap();
    dir
}

fn chatplot_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatplot"));
    Command::from_std(cmd)
}

fn run_ok(dir: &TempDir, extra: &[&str]) -> PathBuf {
    let out = dir.path().join("out");
    chatplot_cmd()
        .current_dir(dir.path())
        .arg("chat.txt")
        .arg("-o")
        .arg(&out)
        .args(extra)
        .assert()
        .success();
    out
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_default_run() {
        let fixtures = setup_fixtures();
        let out = fixtures.path().join("out");

        chatplot_cmd()
            .current_dir(fixtures.path())
            .args(["chat.txt", "-o", out.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Found 4 messages from 2 senders"))
            .stdout(predicate::str::contains("Invalid:   1 bad timestamps"));

        // pie + 5 periods x 3 participants + 3 word clouds
        assert_eq!(files_in(&out).len(), 19);
        assert!(out.join("pie.csv").exists());
        assert!(out.join("hour_Lucía.csv").exists());
        assert!(out.join("progression_Total.csv").exists());
        assert!(out.join("wordcloud_Pablo.csv").exists());
    }

    #[test]
    fn test_pie_contents() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["--no-clouds"]);
        let pie = fs::read_to_string(out.join("pie.csv")).unwrap();
        assert_eq!(pie, "Label;Value\nLucía;5\nPablo;4\n");
    }

    #[test]
    fn test_hour_chart_has_24_rows() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["--period", "hour", "--no-clouds"]);
        let hours = fs::read_to_string(out.join("hour_Total.csv")).unwrap();
        // header + 24 buckets
        assert_eq!(hours.lines().count(), 25);
        assert!(hours.contains("\n18;2\n"));
    }

    #[test]
    fn test_missing_language_list_is_not_fatal() {
        let fixtures = setup_fixtures();
        chatplot_cmd()
            .current_dir(fixtures.path())
            .args(["chat.txt", "--language", "klingon"])
            .assert()
            .success();
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_output_json() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["-f", "json", "--period", "year", "--no-clouds"]);
        let content = fs::read_to_string(out.join("year_Pablo.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["title"], "Messages per year Pablo");
        assert_eq!(value["labels"][0], "2022");
        assert_eq!(value["values"][0], 2);
    }

    #[test]
    fn test_output_jsonl() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["--format", "jsonl", "--period", "month", "--no-clouds"]);
        let content = fs::read_to_string(out.join("month_Total.jsonl")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![r#"{"label":"1","value":1}"#, r#"{"label":"11","value":3}"#]);
    }

    #[test]
    fn test_periods_limit_outputs() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["--period", "day", "--period", "year", "--no-clouds"]);
        assert_eq!(
            files_in(&out),
            vec![
                "day_Lucía.csv",
                "day_Pablo.csv",
                "day_Total.csv",
                "pie.csv",
                "year_Lucía.csv",
                "year_Pablo.csv",
                "year_Total.csv",
            ]
        );
    }
}

// ============================================================================
// Word Cloud Tests
// ============================================================================

mod word_clouds {
    use super::*;

    #[test]
    fn test_stop_words_file() {
        let fixtures = setup_fixtures();
        let out = run_ok(&fixtures, &["--period", "hour", "--stop-words", "stop.txt"]);
        let total = fs::read_to_string(out.join("wordcloud_Total.csv")).unwrap();
        assert!(!total.contains("\na;"));
        assert!(!total.contains("qué"));
        assert!(!total.contains("multimedia"));
        assert!(total.contains("hola;1"));
    }

    #[test]
    fn test_exclude_and_max_words() {
        let fixtures = setup_fixtures();
        let out = run_ok(
            &fixtures,
            &["--period", "hour", "--exclude", "hola", "--max-words", "2"],
        );
        let lucia = fs::read_to_string(out.join("wordcloud_Lucía.csv")).unwrap();
        assert!(!lucia.contains("hola"));
        assert_eq!(lucia.lines().count(), 3);
    }

    #[test]
    fn test_missing_mask_fails() {
        let fixtures = setup_fixtures();
        chatplot_cmd()
            .current_dir(fixtures.path())
            .args(["chat.txt", "--mask", "no_such_mask.png"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("no_such_mask.png"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        let fixtures = setup_fixtures();
        chatplot_cmd()
            .current_dir(fixtures.path())
            .arg("nonexistent_chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_missing_stop_words_file() {
        let fixtures = setup_fixtures();
        chatplot_cmd()
            .current_dir(fixtures.path())
            .args(["chat.txt", "--stop-words", "missing.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_invalid_period() {
        chatplot_cmd()
            .args(["chat.txt", "--period", "week"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("week"));
    }

    #[test]
    fn test_invalid_format() {
        chatplot_cmd()
            .args(["chat.txt", "--format", "xml"])
            .assert()
            .failure();
    }

    #[test]
    fn test_help_and_version() {
        chatplot_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--period"))
            .stdout(predicate::str::contains("--stop-words"));

        chatplot_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_export() {
        let fixtures = setup_fixtures();
        fs::write(fixtures.path().join("empty.txt"), "").unwrap();
        let out = fixtures.path().join("out");

        chatplot_cmd()
            .current_dir(fixtures.path())
            .args(["empty.txt", "-o", out.to_str().unwrap(), "--no-clouds"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 0 messages"));

        // pie + one chart per period for Total
        assert_eq!(files_in(&out).len(), 6);
    }

    #[test]
    fn test_crlf_export() {
        let fixtures = setup_fixtures();
        fs::write(
            fixtures.path().join("chat.txt"),
            EXPORT.replace('\n', "\r\n"),
        )
        .unwrap();
        let out = run_ok(&fixtures, &["--no-clouds"]);
        let pie = fs::read_to_string(out.join("pie.csv")).unwrap();
        assert_eq!(pie, "Label;Value\nLucía;5\nPablo;4\n");
    }
}
