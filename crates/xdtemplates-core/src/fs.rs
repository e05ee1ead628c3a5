//! File-system capability used by the batch runner
//!
//! The runner never touches `std::fs` directly; it goes through
//! [`FileSystem`] so tests can swap in doubles (failing writes, corrupted
//! read-back) without touching the disk layout.

use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Leading byte-order mark written by some Windows editors
pub const BOM: char = '\u{feff}';

pub trait FileSystem {
    /// Read a file as text, without a leading byte-order mark
    fn read_text(&self, path: &Path) -> io::Result<String>;

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Regular files directly inside `dir` whose file name matches `pattern`,
    /// sorted by file name
    fn list_files(&self, dir: &Path, pattern: &Pattern) -> io::Result<Vec<PathBuf>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "{} is not valid UTF-8, invalid bytes replaced with U+FFFD",
                    path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        match text.strip_prefix(BOM) {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }

    fn list_files(&self, dir: &Path, pattern: &Pattern) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                log::warn!(
                    "Skipping {}: file name is not valid UTF-8",
                    entry.path().display()
                );
                continue;
            };

            if pattern.matches(name) {
                files.push(entry.path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
