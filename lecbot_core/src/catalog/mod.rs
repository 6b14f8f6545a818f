//! Lecture file inventory.
//!
//! The catalog is whatever the store lists at call time. Nothing is cached:
//! files added or removed out of band show up on the next lookup.

mod matcher;

pub use matcher::FileMatcher;

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Read-only access to the directory holding lecture files.
pub trait FileStore: Send + Sync {
    /// Names of the files currently in the store.
    fn list_names(&self) -> io::Result<Vec<String>>;

    /// Whether `name` refers to a file in the store.
    fn exists(&self, name: &str) -> bool;

    /// Open the file called `name` for reading.
    fn open(&self, name: &str) -> io::Result<File>;
}

impl<T: FileStore + ?Sized> FileStore for Arc<T> {
    fn list_names(&self) -> io::Result<Vec<String>> {
        (**self).list_names()
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn open(&self, name: &str) -> io::Result<File> {
        (**self).open(name)
    }
}

/// [`FileStore`] backed by a local directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the root, rejecting anything but a single plain file name.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => Some(self.root.join(part)),
            _ => None,
        }
    }
}

impl FileStore for DirectoryStore {
    /// Regular files only, sorted by name. Symlinks count when they point at
    /// a file, so every listed name also `exists`. Non UTF-8 names are skipped.
    fn list_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }

    fn open(&self, name: &str) -> io::Result<File> {
        let path = self.resolve(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid file name: {name}"))
        })?;
        File::open(path)
    }
}
