use std::{
    io,
    path::{Path, PathBuf},
};

/// A file to be written.
///
/// Writing never creates missing parent directories: scaffolded files land
/// in a directory the component generator is expected to have created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file, overwriting any existing content.
    pub fn write(&self) -> io::Result<()> {
        std::fs::write(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        File::new(&path, "hello").write().unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();
        File::new(&path, "updated").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_fails_without_parent_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("test.txt");

        let err = File::new(&path, "nested").write().unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());
    }
}
