//! Text file reading helpers.

use datagen_core::FactoryError;
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_all_text(path: &Path) -> Result<String, FactoryError> {
    let content = fs::read_to_string(path).map_err(|source| FactoryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Read the non-blank lines of a UTF-8 text file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FactoryError> {
    let content = read_all_text(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
