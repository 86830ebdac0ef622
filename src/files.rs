//! File access behind a trait, so pipelines can be fed from disk or from memory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A source of named text files.
pub trait FileSource {
    fn read_to_string(&self, name: &str) -> io::Result<String>;
}

/// Reads files relative to a root directory.
#[derive(Debug, Clone)]
pub struct DiskFiles {
    root: PathBuf,
}

impl DiskFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for DiskFiles {
    fn read_to_string(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(name))
    }
}

/// In-memory files. Unknown names fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StubFiles {
    files: HashMap<String, String>,
}

impl StubFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }
}

impl FileSource for StubFiles {
    fn read_to_string(&self, name: &str) -> io::Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing file!"))
    }
}

impl<S: FileSource + ?Sized> FileSource for &S {
    fn read_to_string(&self, name: &str) -> io::Result<String> {
        (**self).read_to_string(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stub_known_and_unknown() {
        let files = StubFiles::new().with_file("config.json", r#"{"port":8888}"#);
        assert_eq!(files.read_to_string("config.json").unwrap(), r#"{"port":8888}"#);
        let err = files.read_to_string("other.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "missing file!");
    }

    #[test]
    fn disk_reads_under_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let files = DiskFiles::new(dir.path());
        assert_eq!(files.root(), dir.path());
        assert_eq!(files.read_to_string("a.txt").unwrap(), "hello");
        assert!(files.read_to_string("b.txt").is_err());
    }
}
