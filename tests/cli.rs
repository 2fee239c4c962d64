extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn writes_out_gif_in_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gifbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-pow=1.1", "--size", "16x16", "--threads", "1"])
        .assert()
        .success();
    let written = fs::read(dir.path().join("out.gif")).unwrap();
    assert_eq!(&written[..6], b"GIF89a");
}

#[test]
fn writes_a_still_frame_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let gif = dir.path().join("anim.gif");
    let still = dir.path().join("last.pgm");
    Command::cargo_bin("gifbrot")
        .unwrap()
        .args(&["--pow", "1.06", "--size", "12x8", "--palette", "mono", "-o"])
        .arg(&gif)
        .arg("--still")
        .arg(&still)
        .assert()
        .success();
    assert!(gif.exists());
    let pgm = fs::read(&still).unwrap();
    assert_eq!(&pgm[..2], b"P5");
    assert!(pgm[pgm.len() - 96..].iter().all(|&g| g == 0 || g == 255));
}

#[test]
fn empty_sweep_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gifbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--pow=0.5", "--size", "8x8"])
        .assert()
        .success();
    assert!(dir.path().join("out.gif").exists());
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("gifbrot")
        .unwrap()
        .args(&["--size", "sixteen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_an_inverted_plane() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gifbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--size", "8x8", "--leftlower=1,1", "--rightupper=-1,-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid plane"));
    assert!(!dir.path().join("out.gif").exists());
}

#[test]
fn reports_an_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no-such-dir").join("out.gif");
    Command::cargo_bin("gifbrot")
        .unwrap()
        .args(&["--pow=1.04", "--size", "8x8", "-o"])
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
