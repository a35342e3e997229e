//! Upload directory access.
//!
//! Files are keyed by the name the client uploaded them under. Saving a name
//! that already exists replaces the previous content, and nothing here tracks
//! which exam refers to which file.

use crate::error::{AppError, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// An uploaded file held in memory between the multipart reader and the store.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates the store, creating `root` if it does not exist yet.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        // Only runs at startup, not worth making the constructor async.
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` to `<root>/<name>` and returns the name to store in the record.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
        let path = self.resolve(name)?;
        fs::create_dir_all(&self.root).await?;
        let mut file = fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        debug!("Saved {} bytes to {:?}", bytes.len(), path);
        Ok(name.to_string())
    }

    /// Deletes the file. Returns `false` when it was already gone.
    pub async fn remove(&self, name: &str) -> Result<bool> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Names of the regular files in the upload directory, sorted.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut dir = fs::read_dir(&self.root).await?;
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Whole file contents. Downloads go through `path` and stream instead.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::not_found("File")),
            Err(e) => Err(e.into()),
        }
    }

    /// Absolute location of an existing file, for streaming it back to a client.
    pub async fn path(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve(name)?;
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(AppError::not_found("File")),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::not_found("File")),
            Err(e) => Err(e.into()),
        }
    }

    /// Joins `name` onto the root after checking it is a single plain component.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if !name.contains(['/', '\\']) => {
                Ok(self.root.join(part))
            }
            _ => Err(AppError::validation(format!("invalid file name: {:?}", name))),
        }
    }
}
