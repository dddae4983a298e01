//! Application configuration management.
//!
//! This module handles loading and saving the shell configuration,
//! which includes the site origin, the cache store names, and the
//! precache manifest.
//!
//! Configuration is stored at `~/.config/sitecache/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::worker::WorkerConfig;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "sitecache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default precache store name. The version suffix distinguishes
/// precache generations; activation deletes stores not carrying the
/// current name.
const DEFAULT_PRECACHE_NAME: &str = "sitecache-static-v1";

/// Default name of the store that grows as requests are observed.
const DEFAULT_DYNAMIC_NAME: &str = "sitecache-dynamic";

/// Default asset shell precached on install: home document, compiled
/// application entry points, icon, manifest descriptor.
const DEFAULT_MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    "/index.wasm",
    "/index.js",
    "/icon.png",
    "/manifest.json",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme and authority requests are resolved against.
    pub origin: Option<String>,
    pub precache_name: String,
    pub dynamic_name: String,
    pub precache_manifest: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: None,
            precache_name: DEFAULT_PRECACHE_NAME.to_string(),
            dynamic_name: DEFAULT_DYNAMIC_NAME.to_string(),
            precache_manifest: DEFAULT_MANIFEST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Root directory the cache stores live under.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Worker settings drawn from this configuration.
    pub fn worker(&self) -> WorkerConfig {
        WorkerConfig {
            precache_name: self.precache_name.clone(),
            dynamic_name: self.dynamic_name.clone(),
            manifest: self.precache_manifest.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
