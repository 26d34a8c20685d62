//! End-to-end tests for the rastconv binary

use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn rastconv() -> Command {
    let mut cmd = Command::cargo_bin("rastconv").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RASTCONV_JOBS");
    cmd
}

fn write_png(path: &Path) {
    RgbImage::from_fn(10, 7, |x, y| Rgb([(x * 20) as u8, (y * 30) as u8, 90]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn dirs() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    (tmp, input, output)
}

#[test]
fn test_help_exits_zero() {
    rastconv()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("-i, --input"));
    rastconv().arg("--help").assert().success();
}

#[test]
fn test_missing_required_flags_exit_one() {
    let (_tmp, input, output) = dirs();
    write_png(&input.join("a.png"));

    rastconv()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .code(1);
    rastconv()
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .code(1);
    rastconv().assert().code(1);

    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_unreadable_input_directory_exits_one() {
    let (tmp, _input, output) = dirs();
    rastconv()
        .args(["-i", tmp.path().join("missing").to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not read directory"));
}

#[test]
fn test_input_that_is_a_file_exits_one() {
    let (_tmp, input, output) = dirs();
    let file = input.join("a.png");
    write_png(&file);

    rastconv()
        .args(["-i", file.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a directory"));

    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_colliding_destinations_convert_once() {
    let (_tmp, input, output) = dirs();
    write_png(&input.join("x.PNG"));
    write_png(&input.join("x.png"));

    rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .arg("-p")
        .assert()
        .success()
        .stdout(predicate::str::contains("destination already used by"));

    assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
    assert!(output.join("x.jpg").exists());
}

#[test]
fn test_sequential_scenario_valid_and_corrupt() {
    let (_tmp, input, output) = dirs();
    write_png(&input.join("a.png"));
    fs::write(input.join("b.png"), b"\x89PNG\r\n\x1a\nnot really").unwrap();

    let assert = rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let converted: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Converted ")).collect();
    let decoding: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Error Decoding "))
        .collect();
    assert_eq!(converted.len(), 1);
    assert_eq!(decoding.len(), 1);
    assert!(decoding[0].contains("b.png"));
    assert!(stdout.contains("Converting "));

    let a = image::open(output.join("a.jpg")).unwrap();
    assert_eq!(a.dimensions(), (10, 7));
    assert!(!output.join("b.jpg").exists());
}

#[test]
fn test_parallel_mode_converts_everything() {
    let (_tmp, input, output) = dirs();
    for i in 0..20 {
        write_png(&input.join(format!("f{}.png", i)));
    }
    fs::create_dir(input.join("skipme")).unwrap();

    let assert = rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["-p", "-j", "3"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Converting ")).count(), 20);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Converted ")).count(), 20);
    assert_eq!(fs::read_dir(&output).unwrap().count(), 20);
}

#[test]
fn test_failed_jobs_keep_exit_zero_unless_requested() {
    let (_tmp, input, output) = dirs();
    fs::write(input.join("junk.png"), b"junk").unwrap();

    rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error Decoding"));

    rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .arg("--fail-on-error")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 conversion(s) failed"));
}

#[test]
fn test_png_to_bmp_with_pattern() {
    let (_tmp, input, output) = dirs();
    write_png(&input.join("keep.png"));
    fs::write(input.join("notes.txt"), b"hello").unwrap();

    rastconv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["--to", "bmp", "--pattern", "*.png"])
        .assert()
        .success();

    assert!(output.join("keep.bmp").exists());
    assert!(!output.join("notes.bmp").exists());
}
