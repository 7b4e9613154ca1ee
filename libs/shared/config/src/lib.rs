use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_STORAGE_PATH: &str = "data/local_storage.json";
pub const DEFAULT_STORAGE_KEY: &str = "appointments";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub storage_path: PathBuf,
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            bind_address: env::var("CLINIC_BIND_ADDRESS")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_BIND_ADDRESS not set, using default");
                    DEFAULT_BIND_ADDRESS.to_string()
                }),
            storage_path: env::var("CLINIC_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("CLINIC_STORAGE_PATH not set, using default");
                    PathBuf::from(DEFAULT_STORAGE_PATH)
                }),
            storage_key: env::var("CLINIC_STORAGE_KEY")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_STORAGE_KEY not set, using default");
                    DEFAULT_STORAGE_KEY.to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - empty storage settings");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.bind_address.is_empty()
            && !self.storage_key.is_empty()
            && !self.storage_path.as_os_str().is_empty()
    }
}
