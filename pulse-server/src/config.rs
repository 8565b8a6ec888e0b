use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    /// Fixed RNG seed for reproducible datasets. Unset means fresh entropy
    /// on every generation.
    pub seed: Option<u64>,
    pub history_days: u32,
    pub post_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub data: Data,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Try to load from settings.toml (optional for deployment)
        let config_file_name = "settings.toml";

        // Check in current directory
        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in pulse-server directory (for development)
        let dev_path = PathBuf::from("pulse-server").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Override with environment variables (highest priority)
        // Default to 0.0.0.0 so the dashboard is reachable from other hosts;
        // override with HOST for local development.
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("data.seed", None::<u64>)?
            .set_default("data.history_days", 30)?
            .set_default("data.post_count", 20)?;

        // Read from environment variables
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(seed) = std::env::var("SEED") {
            builder = builder.set_override("data.seed", seed)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
