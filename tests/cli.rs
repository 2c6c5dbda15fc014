use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

fn discogs_split(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_discogs-split"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run discogs-split")
}

#[test]
fn missing_arguments_are_rejected() {
    let output = discogs_split(&["only-input.mp3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn zero_release_id_is_rejected() {
    let output = discogs_split(&["in.mp3", "out", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("positive integer"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = discogs_split(&["in.mp3", "out", "1", "--overwrite"]);
    assert!(!output.status.success());
}

#[test]
fn missing_input_fails_before_any_output() {
    let dir = tempdir().expect("failed to create temp dir");
    let input: PathBuf = dir.path().join("absent.mp3");
    let out_dir = dir.path().join("tracks");

    let output = discogs_split(&[
        input.to_str().unwrap(),
        out_dir.to_str().unwrap(),
        "249504",
        "--offset",
        "150",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: input file does not exist"),
        "unexpected stderr:\n{}",
        stderr
    );
    assert!(!out_dir.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
