use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(PathBuf),
}

/// Read an input file as UTF-8 text
pub fn read_input(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read all remaining text from a reader, typically stdin
pub fn read_input_from<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Write a rendered page, creating parent directories as needed
pub fn write_page(path: &Path, html: &str) -> Result<(), IoError> {
    if path.is_dir() {
        return Err(IoError::OutputIsDirectory(path.to_path_buf()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Where the page for `input` goes inside `output_dir`: same stem, `.html` extension
pub fn page_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    output_path_for(input, output_dir, "html")
}

/// Output file for `input` inside `output_dir` with the given extension.
/// Inputs without a stem (stdin) are named `output`.
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{stem}.{extension}"))
}
