use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

/// Create a file, creating its parent directories first. Repeated
/// calls are safe; `create_dir_all` is a no-op on existing directories.
pub(crate) fn create_output_file(path: impl AsRef<Path>) -> Result<File, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

pub(crate) fn write_text_file(path: impl AsRef<Path>, contents: &str) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
