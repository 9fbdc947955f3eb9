use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of executing one generation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,

    /// The file existed and is owned by the user
    Skipped,
}

/// Destination of generated files.
pub trait Writer {
    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes to the file system, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl Writer for FsWriter {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)
    }
}

/// Records what would be written and leaves the disk alone. Existence
/// checks still look at the disk so skips are reported faithfully.
#[derive(Debug, Clone, Default)]
pub struct DryRunWriter {
    files: Vec<(PathBuf, String)>,
}

impl DryRunWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files
            .iter()
            .rev()
            .find(|(file, _)| file == path)
            .map(|(_, contents)| contents.as_str())
    }
}

impl Writer for DryRunWriter {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.files.iter().any(|(file, _)| file == path) {
            return Ok(true);
        }

        path.try_exists()
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}
