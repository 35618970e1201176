use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Client configuration, deserialized from a toml file and handed to
/// [`Context::new`](crate::Context::new) explicitly.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Config {
    pub api: Api,
    pub storage: Storage,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    /// Backend origin, e.g. `https://uact-backend.onrender.com`.
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Storage {
    /// Directory holding the persisted session file.
    pub data_dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }
}
