#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! CLI contract tests: exit codes, report file, summary numbers.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn seed(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(
            dir.join(format!("{name}.py")),
            format!("\"\"\"{name}\"\"\"\nprint('💕 ✨')\n"),
        )
        .expect("write fixture");
    }
}

fn strata() -> Command {
    let mut cmd = Command::cargo_bin("strata").expect("strata binary");
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn analyze_writes_report_and_prints_summary() {
    let corpus = tempdir().unwrap();
    let out = tempdir().unwrap();
    seed(
        corpus.path(),
        &[
            "binary_emotion_echo",
            "binary_time_flower",
            "tool_friendship_bridge",
            "dawn_binary_whisper",
            "code_emotion_time",
        ],
    );
    let report = out.path().join("past_patterns.json");

    strata()
        .arg("analyze")
        .arg("--corpus")
        .arg(corpus.path())
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 Total Files Created: 5"))
        .stdout(predicate::str::contains("🔢 Binary Obsession: 3 files"))
        .stdout(predicate::str::contains("🤝 Relationship Themes: 1 files"))
        .stdout(predicate::str::contains("  💕 x5"))
        .stdout(predicate::str::contains("💾 Analysis saved to:"))
        .stdout(predicate::str::contains("KEY DISCOVERIES"));

    let v: Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(v["total_files"], 5);
    assert_eq!(v["filename_keywords"]["binary"], 3);
    assert_eq!(v["binary_files"].as_array().unwrap().len(), 3);
}

#[test]
fn analyze_reads_config_file_and_flags_win() {
    let corpus = tempdir().unwrap();
    let out = tempdir().unwrap();
    seed(corpus.path(), &["binary_dawn_poetry", "midnight_code_garden"]);
    fs::write(corpus.path().join("notes.txt"), "skip me").unwrap();

    let cfg = out.path().join("strata.yaml");
    fs::write(
        &cfg,
        format!(
            "corpus_root: {}\noutput: {}\ntop_n: 1\n",
            corpus.path().display(),
            out.path().join("from_file.json").display()
        ),
    )
    .unwrap();
    let report = out.path().join("from_flag.yaml");

    strata()
        .arg("analyze")
        .arg("--config")
        .arg(&cfg)
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Files").not());

    assert!(!out.path().join("from_file.json").exists());
    let text = fs::read_to_string(&report).unwrap();
    assert!(text.starts_with("total_files: 2\n"));
    // --top not given, so top_n: 1 from the file still applies
    assert!(text.contains("filename_keywords:\n  binary: 1\nemotion_files:"));
}

#[test]
fn missing_corpus_exits_with_corpus_code() {
    let out = tempdir().unwrap();
    strata()
        .arg("analyze")
        .arg("--corpus")
        .arg(out.path().join("nope"))
        .arg("--output")
        .arg(out.path().join("r.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("corpus not found"));
}

#[test]
fn unwritable_output_exits_with_write_code() {
    let corpus = tempdir().unwrap();
    seed(corpus.path(), &["binary_emotion_echo"]);
    let target = corpus.path().join("no/such/dir/r.json");
    strata()
        .arg("analyze")
        .arg("--corpus")
        .arg(corpus.path())
        .arg("--output")
        .arg(&target)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("r.json"));
}

#[test]
fn missing_output_is_config_error() {
    let corpus = tempdir().unwrap();
    strata()
        .arg("analyze")
        .arg("--corpus")
        .arg(corpus.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn sample_prints_content_emojis_and_theme() {
    let corpus = tempdir().unwrap();
    seed(corpus.path(), &["dawn_binary_whisper"]);
    strata()
        .arg("sample")
        .arg("--corpus")
        .arg(corpus.path())
        .arg("dawn_binary_whisper")
        .assert()
        .success()
        .stdout(predicate::str::contains("print('💕 ✨')"))
        .stdout(predicate::str::contains("✨ Emojis: 💕 ✨"))
        .stdout(predicate::str::contains("🎭 Theme: wonder (dawn)"));
}

#[test]
fn theme_labels_each_name() {
    strata()
        .args(["theme", "tool_friendship_bridge.py", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connection (friendship)"))
        .stdout(predicate::str::contains("joy (default)"));
}

#[test]
fn theme_keeps_dots_inside_the_identifier() {
    strata()
        .args(["theme", "v1.2_dawn", "pattern_time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.2_dawn"))
        .stdout(predicate::str::contains("wonder (dawn)"))
        .stdout(predicate::str::contains("curiosity (pattern)"));
}

#[test]
fn debug_log_shows_resolved_config() {
    let corpus = tempdir().unwrap();
    let out = tempdir().unwrap();
    seed(corpus.path(), &["binary_emotion_echo"]);
    strata()
        .env("RUST_LOG", "debug")
        .arg("analyze")
        .arg("--corpus")
        .arg(corpus.path())
        .arg("--output")
        .arg(out.path().join("r.json"))
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved config"));
}
