//! File-backed durable token store: one file per key under the adboard
//! config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use adboard_core::auth::TokenStoreTrait;
use adboard_core::errors::{Error, Result};

pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    /// Opens the store, creating the directory if needed. Without an
    /// explicit directory the platform config dir is used.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = match dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or_else(|| Error::TokenStore("cannot locate a config directory".to_string()))?
                .join("adboard"),
        };
        fs::create_dir_all(&dir)
            .map_err(|e| Error::TokenStore(format!("cannot create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStoreTrait for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::TokenStore(format!("cannot read {}: {}", key, e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path(key), value)
            .map_err(|e| Error::TokenStore(format!("cannot write {}: {}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::TokenStore(format!("cannot remove {}: {}", key, e))),
        }
    }
}
