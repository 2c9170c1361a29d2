use crate::core::calculator::settlement::DEFAULT_SESSION_COST;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "carpool-ledger";

/// Every key the config file is expected to carry, used by `config --check`.
pub const CONFIG_KEYS: [&str; 4] = ["store", "session_cost", "guest_label", "currency"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_session_cost")]
    pub session_cost: f64,
    #[serde(default = "default_guest_label")]
    pub guest_label: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_session_cost() -> f64 {
    DEFAULT_SESSION_COST
}
fn default_guest_label() -> String {
    "QuickRide Guest".to_string()
}
fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            session_cost: default_session_cost(),
            guest_label: default_guest_label(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(format!("{APP_DIR}.conf"))
    }

    /// Return the default path of the JSON session store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join(format!("{APP_DIR}.json"))
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("config {} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        log::debug!("loaded config {}", path.display());
        Ok(cfg)
    }

    /// Keys from [`CONFIG_KEYS`] that are absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(CONFIG_KEYS.to_vec());
        }

        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let mapping = value.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| {
                mapping
                    .map(|m| !m.contains_key(*k))
                    .unwrap_or(true)
            })
            .collect())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and store files.
    ///
    /// `custom_store` may be absolute or relative to the config directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let store_path = match custom_store {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::store_file(),
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save(&Self::config_file())?;
            log::info!("config written to {}", Self::config_file().display());
        }

        if !store_path.exists() {
            crate::store::SessionStore::default().save(&config.store)?;
        }

        Ok(config)
    }
}
