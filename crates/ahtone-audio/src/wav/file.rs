//! Writing finished WAV bytes to a destination path.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{ToneError, ToneResult};

/// Writes `wav_data` to `path`, creating missing parent directories.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so a failed write never leaves a truncated file
/// at the destination. The file gets the same mode a plain `fs::write` would
/// give it (0666 minus the umask on unix).
pub fn write_wav_file(path: &Path, wav_data: &[u8]) -> ToneResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| ToneError::io(parent, e))?;

    let mut tmp = create_temp_in(parent).map_err(|e| ToneError::io(parent, e))?;
    tmp.write_all(wav_data)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ToneError::io(path, e))?;
    tmp.persist(path).map_err(|e| ToneError::io(path, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The mode is passed to open(2), so the process umask still applies.
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
