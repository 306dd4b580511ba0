//! End-to-end tests for the generate command.

use ahtone_audio::SynthParams;
use ahtone_cli::commands::generate::{generate_to, run, run_status, EXIT_IO};
use ahtone_cli::DEFAULT_OUTPUT_PATH;
use pretty_assertions::assert_eq;

#[test]
fn test_default_output_path_layout() {
    assert_eq!(DEFAULT_OUTPUT_PATH, "public/sounds/human_ah.wav");
}

#[test]
fn test_run_writes_playable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join("sounds").join("human_ah.wav");

    run(&path).unwrap();
    assert_eq!(run_status(&path).unwrap(), 0);

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(reader.len(), 52920);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("human_ah.wav");

    let first = generate_to(&SynthParams::default(), &path).unwrap();
    let first_bytes = std::fs::read(&path).unwrap();
    let second = generate_to(&SynthParams::default(), &path).unwrap();
    let second_bytes = std::fs::read(&path).unwrap();

    assert_eq!(first.pcm_hash, second.pcm_hash);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_unwritable_destination_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("public");
    std::fs::write(&blocker, b"file, not directory").unwrap();

    let path = blocker.join("sounds").join("human_ah.wav");
    let err = generate_to(&SynthParams::default(), &path).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(!path.exists());

    // The command reports the failure through its exit status.
    assert_eq!(run_status(&path).unwrap(), EXIT_IO);
    assert!(!path.exists());
}
