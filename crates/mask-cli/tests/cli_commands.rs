//! Integration tests for the mask CLI commands.

#![allow(deprecated)] // Command::cargo_bin, pending the cargo_bin! macro

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mask(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mask").unwrap();
    cmd.arg("--dir").arg(dir.path());
    cmd
}

fn save_text(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("maskexe_save.json")).unwrap()
}

// -- show ------------------------------------------------------------------

#[test]
fn show_without_save_prints_defaults() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("no save yet"))
        .stdout(predicate::str::contains("play count"))
        .stdout(predicate::str::contains("0 of 6 paths completed"));
}

#[test]
fn show_json_prints_camel_case_record() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"playCount\": 0"))
        .stdout(predicate::str::contains("\"completedPaths\""))
        .stdout(predicate::str::contains("\"lastEndingId\": null"));
}

#[test]
fn show_reads_legacy_save() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("maskexe_save.json"),
        r#"{"has_played_before":true,"play_count":4,"masks_used":["joy","rage"],"last_ending_id":"A2"}"#,
    )
    .unwrap();

    mask(&dir)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"playCount\": 4"))
        .stdout(predicate::str::contains("\"lastEndingId\": \"A2\""));
}

#[test]
fn show_survives_corrupt_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("maskexe_save.json"), "{ not json").unwrap();

    mask(&dir)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"playCount\": 0"))
        .stderr(predicate::str::contains("could not be loaded"));

    mask(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be loaded"))
        .stdout(predicate::str::contains("no save yet").not());
}

#[test]
fn show_keeps_good_fields_next_to_a_bad_one() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("maskexe_save.json"),
        r#"{"hasPlayedBefore":true,"playCount":5,"hungerUnlocked":"yes"}"#,
    )
    .unwrap();

    mask(&dir)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"playCount\": 5"))
        .stderr(predicate::str::contains("could not be loaded").not());
}

#[test]
fn show_uses_custom_key() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["--key", "slot2", "commit", "C"])
        .assert()
        .success();
    assert!(dir.path().join("slot2.json").exists());
    assert!(!dir.path().join("maskexe_save.json").exists());

    mask(&dir)
        .args(["--key", "slot2", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"playCount\": 1"));
}

// -- commit ----------------------------------------------------------------

#[test]
fn commit_writes_save() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "A1", "--completed", "joy", "truth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"))
        .stdout(predicate::str::contains("Eternal Smile"))
        .stdout(predicate::str::contains("newly completed: joy, truth"));

    let text = save_text(&dir);
    assert!(text.contains("\"playCount\": 1"));
    assert!(text.contains("\"hasPlayedBefore\": true"));
    assert!(text.contains("\"lastEndingId\": \"A1\""));
}

#[test]
fn commits_accumulate_across_invocations() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "A1", "--completed", "joy"])
        .assert()
        .success();
    mask(&dir)
        .args(["commit", "B1", "--completed", "rage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("play count: 2"))
        .stdout(predicate::str::contains("newly completed: rage"));

    mask(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 6 paths completed"));
}

#[test]
fn commit_early_script_break_marks_profile() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "T0_SCRIPT_BREAK_EARLY"])
        .assert()
        .success();
    assert!(save_text(&dir).contains("\"scriptDeletedOnce\": true"));
}

#[test]
fn second_script_break_reports_auto_loop() {
    let dir = TempDir::new().unwrap();
    mask(&dir).args(["commit", "B2"]).assert().success();
    mask(&dir)
        .args(["commit", "B2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto-loop"));
}

#[test]
fn commit_unknown_ending_fails() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "Z9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ending"));
    assert!(!dir.path().join("maskexe_save.json").exists());
}

#[test]
fn commit_unknown_path_fails() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "C", "--completed", "envy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown path"));
}

#[test]
fn commit_keeps_unknown_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("maskexe_save.json"),
        r#"{"playCount":1,"settings":{"volume":0.5}}"#,
    )
    .unwrap();

    mask(&dir).args(["commit", "C"]).assert().success();
    let text = save_text(&dir);
    assert!(text.contains("\"settings\""));
    assert!(text.contains("\"playCount\": 2"));
}

#[test]
fn commit_refuses_to_overwrite_unreadable_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("maskexe_save.json"), "{ not json").unwrap();

    mask(&dir)
        .args(["commit", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(save_text(&dir), "{ not json");
}

#[test]
fn commit_force_overwrites_unreadable_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("maskexe_save.json"), "[1, 2]").unwrap();

    mask(&dir)
        .args(["commit", "C", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("overwriting unreadable save"));
    assert!(save_text(&dir).contains("\"playCount\": 1"));
}

// -- clear -----------------------------------------------------------------

#[test]
fn clear_resets_save() {
    let dir = TempDir::new().unwrap();
    mask(&dir)
        .args(["commit", "A1", "--completed", "joy"])
        .assert()
        .success();
    mask(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    let text = save_text(&dir);
    assert!(text.contains("\"playCount\": 0"));
    assert!(text.contains("\"hasPlayedBefore\": false"));
}

// -- resolve ---------------------------------------------------------------

#[test]
fn resolve_prints_ending() {
    mask(&TempDir::new().unwrap())
        .args(["resolve", "wear", "--last", "rage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A2"))
        .stdout(predicate::str::contains("Arena Loop"));
}

#[test]
fn resolve_give_is_true_release() {
    mask(&TempDir::new().unwrap())
        .args(["resolve", "give", "--last", "sorrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("True Release"));
}

#[test]
fn resolve_without_last_mask_is_generic() {
    mask(&TempDir::new().unwrap())
        .args(["resolve", "destroy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B_generic"));
}

#[test]
fn resolve_unknown_choice_fails() {
    mask(&TempDir::new().unwrap())
        .args(["resolve", "shrug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown final choice"));
}

// -- endings ---------------------------------------------------------------

#[test]
fn endings_lists_every_ending() {
    mask(&TempDir::new().unwrap())
        .arg("endings")
        .assert()
        .success()
        .stdout(predicate::str::contains("T0_SCRIPT_BREAK_EARLY"))
        .stdout(predicate::str::contains("Forgotten Name"))
        .stdout(predicate::str::contains("8 endings"));
}
