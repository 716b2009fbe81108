// Filesystem helpers used when writing generated documents.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Creates a directory if it doesn't exist
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes content to a file, creating parent directories if needed
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}
