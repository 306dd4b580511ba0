//! Generate command implementation
//!
//! Synthesizes the "ah" tone and writes it to a WAV file.

use ahtone_audio::{generate, write_wav_file, SynthParams, ToneError};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Summary of a completed generation.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Where the WAV file was written.
    pub path: PathBuf,
    /// Number of samples written.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// Synthesizes `params` and writes the WAV file to `out_path`.
///
/// Performs no console output; [`run`] wraps this with reporting.
pub fn generate_to(params: &SynthParams, out_path: &Path) -> Result<GenerateSummary, ToneError> {
    let result = generate(params)?;
    write_wav_file(out_path, &result.wav.wav_data)?;

    Ok(GenerateSummary {
        path: out_path.to_path_buf(),
        num_samples: result.wav.num_samples,
        sample_rate: result.wav.sample_rate,
        pcm_hash: result.wav.pcm_hash,
    })
}

/// Exit status for rejected synthesis parameters.
pub const EXIT_INVALID_PARAMS: u8 = 1;

/// Exit status for filesystem failures, including ones outside the writer.
pub const EXIT_IO: u8 = 2;

/// Run the generate command
///
/// # Arguments
/// * `out_path` - Destination WAV path (relative paths resolve against the
///   working directory)
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters, 2 I/O failure
pub fn run(out_path: &Path) -> Result<ExitCode> {
    run_status(out_path).map(ExitCode::from)
}

/// Same as [`run`], returning the numeric exit status.
pub fn run_status(out_path: &Path) -> Result<u8> {
    let start = Instant::now();
    let out_path = resolve(out_path)?;
    let params = SynthParams::default();

    println!("{} {}", "Generating:".cyan().bold(), out_path.display());
    println!(
        "{} {} Hz, {} s, F0 {} Hz, {} harmonics",
        "Voice:".dimmed(),
        params.sample_rate,
        params.duration_seconds,
        params.fundamental_hz,
        params.harmonics.len()
    );

    match generate_to(&params, &out_path) {
        Ok(summary) => {
            println!(
                "{} {} samples at {} Hz",
                "Samples:".dimmed(),
                summary.num_samples,
                summary.sample_rate
            );
            println!("{} {}", "PCM hash:".dimmed(), summary.pcm_hash);
            println!(
                "\n{} Generated {} in {}ms",
                "SUCCESS".green().bold(),
                summary.path.display(),
                start.elapsed().as_millis()
            );
            Ok(0)
        }
        Err(e) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                e.code().red(),
                e
            );
            Ok(exit_status_for(&e))
        }
    }
}

fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    Ok(cwd.join(path))
}

/// Exit status for a tone error: 1 for invalid parameters, 2 otherwise.
pub fn exit_status_for(err: &ToneError) -> u8 {
    if err.is_invalid_params() {
        EXIT_INVALID_PARAMS
    } else {
        EXIT_IO
    }
}

/// Exit status for an error that escaped [`run`].
///
/// Tone errors keep their own mapping; anything else (such as failing to read
/// the working directory) is an I/O failure.
pub fn exit_status_for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ToneError>() {
        Some(tone) => exit_status_for(tone),
        None => EXIT_IO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_to_writes_default_tone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public/sounds/human_ah.wav");

        let summary = generate_to(&SynthParams::default(), &path).unwrap();
        assert_eq!(summary.path, path);
        assert_eq!(summary.num_samples, 52920);
        assert_eq!(summary.sample_rate, 44100);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 44 + 105840);
    }

    #[test]
    fn test_generate_to_rejects_bad_params_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let params = SynthParams {
            sample_rate: 0,
            ..SynthParams::default()
        };

        let err = generate_to(&params, &path).unwrap_err();
        assert!(err.is_invalid_params());
        assert!(!path.exists());
        assert_eq!(exit_status_for(&err), 1);
    }

    #[test]
    fn test_io_failure_maps_to_exit_code_2() {
        let err = ToneError::io(
            "/tmp/x.wav",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(exit_status_for(&err), 2);
    }

    #[test]
    fn test_escaped_errors_map_to_io_status() {
        let cwd_failure = Err::<(), _>(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "working directory removed",
        ))
        .context("Failed to resolve working directory")
        .unwrap_err();
        assert_eq!(exit_status_for_error(&cwd_failure), EXIT_IO);

        let invalid = anyhow::Error::new(ToneError::InvalidSampleRate { rate: 0 });
        assert_eq!(exit_status_for_error(&invalid), EXIT_INVALID_PARAMS);
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let abs = dir.path().join("a.wav");
        assert_eq!(resolve(&abs).unwrap(), abs);
        assert!(resolve(Path::new("rel.wav")).unwrap().is_absolute());
    }
}
