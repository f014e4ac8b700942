//! Server configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Path every route is nested under, e.g. `/rest`. Empty serves at the root.
    pub api_prefix: String,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            api_prefix: String::new(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_LISTEN_ADDR` - Socket address to bind (default: 0.0.0.0:8080)
    /// - `ROSTER_API_PREFIX` - Route prefix such as `/rest` (default: none)
    /// - `ROSTER_STORE` - `memory` or `file` (default: memory)
    /// - `ROSTER_DATA_DIR` - Directory for the file store (default: platform-specific)
    /// - `ROSTER_LOG_TO_FILE` - Also write logs to a file (default: false)
    /// - `ROSTER_LOG_DIR` - Directory for the log file (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = env::var("ROSTER_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Ok(prefix) = env::var("ROSTER_API_PREFIX") {
            config.api_prefix = prefix;
        }

        if let Some(kind) = read_env::<StoreKind>("ROSTER_STORE") {
            config.store.kind = kind;
        }
        config.store.data_dir = env::var("ROSTER_DATA_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("ROSTER_LOG_TO_FILE") {
            config.logging.to_file = enable;
        }
        config.logging.log_dir = env::var("ROSTER_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

/// Which repository backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreKind {
    /// Records live only as long as the process.
    #[default]
    Memory,
    /// Records are snapshotted to `players.json` in the data directory.
    File,
}

#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Configured data directory, or the platform default.
    ///
    /// - macOS: `~/Library/Application Support/roster`
    /// - Linux: `~/.local/share/roster` (or `$XDG_DATA_HOME/roster`)
    /// - Windows: `%APPDATA%\roster`
    /// - Fallback: `./roster_data`
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "roster")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./roster_data"))
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub to_file: bool,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Configured log directory, or the platform cache directory.
    ///
    /// - macOS: `~/Library/Caches/roster/logs`
    /// - Linux: `~/.cache/roster/logs` (or `$XDG_CACHE_HOME/roster/logs`)
    /// - Windows: `%LOCALAPPDATA%\roster\logs`
    /// - Fallback: `/tmp/roster/logs`
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "roster")
                .map(|dirs| dirs.cache_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("/tmp/roster"))
                .join("logs")
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
