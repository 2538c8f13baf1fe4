// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use script_lines_ports::{DirEntryDto, EntryKind, ScriptFileSystem};
use script_lines_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `ScriptFileSystem` port with `std::fs`.
///
/// Symlinks are followed: a link to a directory is listed as a directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalScriptFileSystem;

impl LocalScriptFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptFileSystem for LocalScriptFileSystem {
    fn kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = fs::metadata(path).map_err(|source| fs_error("stat", path, source))?;
        Ok(if metadata.is_dir() { EntryKind::Directory } else { EntryKind::File })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryDto>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|source| fs_error("read_dir", path, source))? {
            let entry = entry.map_err(|source| fs_error("read_dir", path, source))?;
            let entry_path = entry.path();
            let file_type = entry.file_type().map_err(|source| fs_error("stat", &entry_path, source))?;
            // シンボリックリンクはリンク先の種別で判定する
            let is_dir = if file_type.is_symlink() { entry_path.is_dir() } else { file_type.is_dir() };
            entries.push(DirEntryDto {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: if is_dir { EntryKind::Directory } else { EntryKind::File },
                path: entry_path,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        FileReader::read_text_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}

fn fs_error(operation: &str, path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::FileSystemOperation { operation: operation.to_string(), path: path.to_path_buf(), source }
}
