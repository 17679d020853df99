// crates/vouch-cli/src/config.rs
//
// Runtime configuration for the vouch CLI.
// Loaded from a TOML file or populated with defaults.

use std::fs;

use serde::Deserialize;

use vouch_engine::EngineConfig;

/// Top-level configuration file layout.
///
/// ```toml
/// log_level = "info"
///
/// [cache]
/// backend = "rocksdb"
/// path = "~/.vouch/cache"
///
/// [website]
/// timeout_secs = 7
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct VouchConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Cache and collector settings (`[cache]`, `[dns]`, `[website]`, `[whois]`).
    #[serde(flatten)]
    pub engine: EngineConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for VouchConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            engine: EngineConfig::default(),
        }
    }
}

impl VouchConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: VouchConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
