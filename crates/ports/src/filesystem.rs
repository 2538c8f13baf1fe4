// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use script_lines_shared_kernel::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

/// DTO representing one child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryDto {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryDto {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Blocking access to local script files.
pub trait ScriptFileSystem: Send + Sync {
    fn kind(&self, path: &Path) -> Result<EntryKind>;

    /// Children of `path`. Order is unspecified.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryDto>>;

    /// File contents as UTF-8; invalid sequences are replaced.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
