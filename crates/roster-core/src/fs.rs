//! Filesystem utilities for atomic file replacement.

use std::fs;
use std::io;
use std::path::Path;

/// Rename `temp_path` over `destination`, replacing it if it exists.
///
/// On some platforms (notably Windows) `fs::rename` fails when the target
/// already exists, so a failed rename removes the destination and retries.
/// The temp file is cleaned up when the retry also fails.
///
/// # Errors
///
/// Returns the retry error when the rename fails after the fallback.
pub fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
