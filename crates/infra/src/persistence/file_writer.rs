// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path` through a temp file in the same directory and a rename,
    /// so readers never observe a half-written report.
    pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let tmp = parent.join(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
        let result = Self::write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(data)?;
        writer.flush()?;
        // 失敗しても書き込み自体は完了している
        let _ = writer.get_ref().sync_all();
        Ok(())
    }
}
