//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use initgen_core::application::{GenerationError, ports::Filesystem};

/// In-memory filesystem for testing. Files hold raw bytes so binary wrapper
/// resources round-trip.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's bytes (testing helper).
    pub fn read_bytes(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a file as UTF-8 text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        String::from_utf8(self.read_bytes(path)?).ok()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// Check if a path is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    /// All file paths, sorted for deterministic comparison.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut paths: Vec<_> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// File paths under `root`, relative to it, with their contents. Sorted.
    pub fn files_under(&self, root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner
            .files
            .iter()
            .filter_map(|(path, bytes)| {
                path.strip_prefix(root)
                    .ok()
                    .map(|rel| (rel.to_path_buf(), bytes.clone()))
            })
            .collect();
        files.sort();
        files
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.executables.clear();
    }

    fn lock_err() -> GenerationError {
        GenerationError::workspace("memory filesystem lock poisoned")
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), GenerationError> {
        self.write_binary(path, content.as_bytes())
    }

    fn write_binary(&self, path: &Path, content: &[u8]) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(GenerationError::filesystem(
                    path,
                    "parent directory does not exist",
                ));
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;
        if !inner.files.contains_key(path) {
            return Err(GenerationError::filesystem(path, "no such file"));
        }
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.directories.retain(|p| !p.starts_with(path));
        inner.executables.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/a/b.txt")).unwrap(), "x");
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/root/sub")).unwrap();
        fs.write_file(Path::new("/root/sub/f.txt"), "x").unwrap();

        fs.remove_dir_all(Path::new("/root")).unwrap();
        assert!(!fs.exists(Path::new("/root")));
        assert!(!fs.exists(Path::new("/root/sub/f.txt")));
    }

    #[test]
    fn files_under_strips_the_root() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/root")).unwrap();
        fs.write_file(Path::new("/root/a.txt"), "a").unwrap();

        let files = fs.files_under(Path::new("/root"));
        assert_eq!(files, vec![(PathBuf::from("a.txt"), b"a".to_vec())]);
    }
}
