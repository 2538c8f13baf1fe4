// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading script files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the file as text. Invalid UTF-8 sequences become U+FFFD, and a leading
    /// byte-order mark is dropped.
    pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
        let bytes = Self::read_to_end(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
    }
}
