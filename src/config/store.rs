//! File-backed configuration store

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

/// Persisted configuration contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Data {
    /// API host of the targeted cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Username for authenticated targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Loads and saves configuration data
pub trait Persister: Send {
    fn load(&self) -> ConfigResult<Data>;
    fn save(&self, data: &Data) -> ConfigResult<()>;
}

/// Persists config as YAML at a fixed path. A missing file loads
/// defaults; parent directories are created on save.
pub struct FilePersister {
    path: PathBuf,
}

impl FilePersister {
    pub fn new(path: PathBuf) -> Self {
        FilePersister { path }
    }
}

impl Persister for FilePersister {
    fn load(&self) -> ConfigResult<Data> {
        if !self.path.exists() {
            return Ok(Data::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }

    fn save(&self, data: &Data) -> ConfigResult<()> {
        let write_err = |e: String| ConfigError::Write {
            path: self.path.clone(),
            error: e,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let contents = serde_yaml::to_string(data).map_err(|e| write_err(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| write_err(e.to_string()))
    }
}

/// In-memory persister for tests and throwaway stores
#[derive(Default)]
pub struct MemPersister {
    data: RefCell<Data>,
}

impl Persister for MemPersister {
    fn load(&self) -> ConfigResult<Data> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, data: &Data) -> ConfigResult<()> {
        *self.data.borrow_mut() = data.clone();
        Ok(())
    }
}

/// Typed access to config data over a persister
pub struct Store {
    persister: Box<dyn Persister>,
    data: Data,
}

impl Store {
    /// Create a store, loading whatever the persister currently holds.
    pub fn new(persister: Box<dyn Persister>) -> ConfigResult<Self> {
        let data = persister.load()?;
        Ok(Store { persister, data })
    }

    pub fn target(&self) -> Option<&str> {
        self.data.target.as_deref()
    }

    pub fn set_target(&mut self, target: &str) {
        self.data.target = Some(target.to_string());
    }

    pub fn username(&self) -> Option<&str> {
        self.data.username.as_deref()
    }

    pub fn set_username(&mut self, username: &str) {
        self.data.username = Some(username.to_string());
    }

    /// Write the current data through the persister.
    pub fn save(&self) -> ConfigResult<()> {
        self.persister.save(&self.data)
    }

    /// Replace the current data with what the persister holds.
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.data = self.persister.load()?;
        Ok(())
    }
}
