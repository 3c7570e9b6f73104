use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use tanks_events::settings::ClientSettings;
use tracing::Level;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory produced by `pack-wasm`
    pub dist_dir: PathBuf,
    pub log_level: Level,
    pub settings: ClientSettings,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a number, got `{port}`"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = lookup("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .with_context(|| format!("LOG_LEVEL `{level}` is not a tracing level"))?,
            None => Level::INFO,
        };

        let settings = match lookup("TANKS_SETTINGS") {
            Some(path) => load_settings(&path)?,
            None => ClientSettings::default(),
        };

        Ok(Self {
            port,
            dist_dir,
            log_level,
            settings,
        })
    }
}

/// Read a settings document, rejecting anything the game could not run with
pub fn load_settings(path: &str) -> Result<ClientSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file `{path}`"))?;

    parse_settings(&raw).with_context(|| format!("invalid settings file `{path}`"))
}

fn parse_settings(raw: &str) -> Result<ClientSettings> {
    let settings: ClientSettings = serde_json::from_str(raw)?;
    Ok(settings.validated()?)
}
