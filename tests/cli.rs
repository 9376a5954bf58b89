//! CLI argument parsing and validation tests.
//!
//! These tests verify that invalid inputs are rejected before any rendering
//! happens. The one happy-path test skips itself when the machine has no
//! system font to render with.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("cardgen").unwrap();
    // Isolate from any user-level config or font override
    cmd.env("CARDGEN_CONFIG", "/nonexistent/cardgen.toml");
    cmd.env_remove("CARDGEN_FONT");
    cmd
}

fn pool_file(dir: &Path, lines: usize) -> PathBuf {
    let path = dir.join("pool.txt");
    let content: Vec<String> = (0..lines).map(|i| format!("word number {i}")).collect();
    std::fs::write(&path, content.join("\n")).unwrap();
    path
}

fn system_font() -> Option<&'static str> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ]
    .into_iter()
    .find(|p| Path::new(p).exists())
}

#[test]
fn zero_count_exits_with_error() {
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Number of cards must be 1 or more"));
}

#[test]
fn zero_length_exits_with_error() {
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "-l", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Board length must be 1 or more"));
}

#[test]
fn free_space_on_even_board_exits_with_error() {
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "-l", "4", "--free"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("free space needs a center cell"));
}

#[test]
fn invalid_format_exits_with_error() {
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "--format", "gif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn resolution_and_cell_size_conflict() {
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "-r", "512", "--cell-size", "90"])
        .assert()
        .failure();
}

#[test]
fn undersized_resolution_exits_with_error() {
    // Default borders and outline alone need more than 30 pixels
    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "-r", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout"));
}

#[test]
fn missing_input_file_exits_with_error() {
    cmd()
        .args(["-i", "/nonexistent/pool.txt", "-o", "b.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn small_pool_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let pool = pool_file(dir.path(), 10);

    cmd()
        .args(["-i", pool.to_str().unwrap(), "-o", "b.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 25 values"));
}

#[test]
fn unparsable_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "not toml {{{").unwrap();

    cmd()
        .args(["-i", "p.txt", "-o", "b.jpg", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn generates_numbered_cards() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping render test");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let pool = pool_file(dir.path(), 30);
    let out = dir.path().join("cards");

    cmd()
        .args([
            "-i",
            pool.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-n",
            "3",
            "-r",
            "256",
            "--free",
            "--seed",
            "42",
            "--font",
            font,
        ])
        .assert()
        .success();

    for i in 1..=3 {
        let path = out.join(format!("board-{i:02}.jpg"));
        assert!(path.exists(), "missing {}", path.display());
        // Fit-to-target never undershoots the requested resolution
        let img = image::open(&path).unwrap();
        assert!(img.width() >= 256 && img.height() >= 256);
    }
}

#[test]
fn single_card_writes_file_directly() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping render test");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let pool = pool_file(dir.path(), 30);
    let out = dir.path().join("board.png");

    cmd()
        .args([
            "-i",
            pool.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-f",
            "png",
            "--cell-size",
            "48",
            "--font",
            font,
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    assert!(out.exists());
    assert!(!out.with_file_name("board-01.png").exists());
}
