#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn passgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_passgen"))
}

fn stdout_line(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute passgen");
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .trim_end()
        .to_string()
}

#[test]
fn test_default_password_has_four_words() {
    let password = stdout_line(&mut passgen());
    let words: Vec<&str> = password.split('-').collect();
    assert_eq!(words.len(), 4, "{password}");
    assert!(words.iter().all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_custom_word_count_and_separator() {
    let password = stdout_line(passgen().args(["-w", "6", "-s", "."]));
    assert_eq!(password.split('.').count(), 6, "{password}");
}

#[test]
fn test_exact_length_with_extras() {
    let password = stdout_line(passgen().args(["-w", "3", "-l", "20", "-c", "-n", "-y"]));
    let chars: Vec<char> = password.chars().collect();
    assert_eq!(chars.len(), 22, "{password}");
    assert!(chars[20].is_ascii_digit(), "{password}");
    assert!(!chars[21].is_alphanumeric(), "{password}");
    let body: String = chars[..20].iter().collect();
    assert_eq!(body.split('-').count(), 3, "{password}");
    assert!(body.split('-').all(|w| w.starts_with(|c: char| c.is_ascii_uppercase())));
}

#[test]
fn test_length_too_short_is_an_error() {
    // Four words need at least 4*3 + 3 = 15 characters.
    passgen()
        .args(["-l", "14"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("requested length 14 is out of range"));
}

#[test]
fn test_length_too_long_is_an_error() {
    passgen()
        .args(["-w", "2", "-l", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum length is 29"));
}

#[test]
fn test_zero_words_is_an_error() {
    passgen()
        .args(["-w", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("number of words must be greater than 0"));
}

#[test]
fn test_count_and_json_output() {
    let output = passgen()
        .args(["--count", "3", "--json", "-w", "2"])
        .output()
        .expect("Failed to execute passgen");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).expect("line is not JSON");
        let password = value["password"].as_str().expect("password is a string");
        assert_eq!(password.split('-').count(), 2);
        assert_eq!(value["words"], 2);
        assert_eq!(value["length"], password.chars().count());
    }
}

#[test]
fn test_custom_word_files() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let words_path = temp_dir.path().join("words.txt");
    let short_path = temp_dir.path().join("short.txt");
    fs::write(&words_path, "correct\n\nhorse\n  battery \nstaple\n")
        .expect("Failed to write words");
    fs::write(&short_path, "ox\n").expect("Failed to write short words");

    let password = stdout_line(
        passgen()
            .arg("--words-file")
            .arg(&words_path)
            .arg("--short-words-file")
            .arg(&short_path)
            .args(["-s", " "]),
    );
    for word in password.split(' ') {
        assert!(["correct", "horse", "battery", "staple"].contains(&word), "{password}");
    }
}

#[test]
fn test_empty_word_file_is_a_load_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let words_path = temp_dir.path().join("empty.txt");
    fs::write(&words_path, "\n  \n").expect("Failed to write words");

    passgen()
        .arg("--words-file")
        .arg(&words_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error loading words"))
        .stderr(predicate::str::contains("no words found"));
}

#[test]
fn test_missing_word_file_is_a_load_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    passgen()
        .arg("--short-words-file")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load word list"));
}

#[test]
#[cfg(not(feature = "clipboard"))]
fn test_clipboard_failure_still_prints_password() {
    let output = passgen()
        .arg("-b")
        .output()
        .expect("Failed to execute passgen");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert_eq!(stdout.trim_end().split('-').count(), 4);
    let stderr = String::from_utf8(output.stderr).expect("stderr is not UTF-8");
    assert!(stderr.contains("Error copying to clipboard"), "{stderr}");
}

#[test]
fn test_help_lists_the_flags() {
    passgen()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--separator"))
        .stdout(predicate::str::contains("--capitalize"))
        .stdout(predicate::str::contains("--clipboard"));
}

#[test]
fn test_version_flag() {
    passgen()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
