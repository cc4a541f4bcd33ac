//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crudgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrudgenResult,
};

/// In-memory filesystem. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> CrudgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> CrudgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> CrudgenResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::filesystem(path, "No such file").into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut inner = self.write()?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::filesystem(path, "Parent directory does not exist").into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut inner = self.write()?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::filesystem(path, "Parent directory does not exist").into());
        }

        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        insert_ancestors(&mut self.write()?.directories, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> CrudgenResult<Vec<PathBuf>> {
        let inner = self.read()?;
        let is_child = |p: &&PathBuf| p.parent() == Some(path);

        let mut entries: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(is_child)
            .chain(inner.directories.iter().filter(is_child))
            .cloned()
            .collect();
        entries.sort();
        entries.dedup();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.php"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.php"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.php")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new().with_file("/p/routes/api.php", "<?php");
        let other = fs.clone();

        other.append(Path::new("/p/routes/api.php"), "\nline").unwrap();

        assert_eq!(
            fs.read_to_string(Path::new("/p/routes/api.php")).unwrap(),
            "<?php\nline"
        );
        assert!(fs.exists(Path::new("/p/routes")));
    }

    #[test]
    fn list_dir_only_returns_direct_children() {
        let fs = MemoryFilesystem::new()
            .with_file("/m/2024_create_a_table.php", "")
            .with_file("/m/sub/deep.php", "");

        assert_eq!(
            fs.list_dir(Path::new("/m")).unwrap(),
            vec![
                PathBuf::from("/m/2024_create_a_table.php"),
                PathBuf::from("/m/sub"),
            ]
        );
    }
}
