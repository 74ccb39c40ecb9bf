use crate::engine::ContrarianError;
use std::path::Path;

/// Reads a whole text file, rejecting files with nothing but whitespace.
pub fn load_file_safe(path: &str) -> Result<String, ContrarianError> {
    let content = std::fs::read_to_string(Path::new(path))?;

    if content.trim().is_empty() {
        return Err(ContrarianError::EmptyFile(path.to_string()));
    }

    Ok(content)
}
