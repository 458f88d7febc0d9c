//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERACITY_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERACITY_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path of the SQLite document ledger. Default: `./veracity.db`.
    pub db_path: PathBuf,

    /// Directory holding the embedding model files
    /// (`config.json`, `tokenizer.json`, `model.safetensors`).
    pub model_path: Option<PathBuf>,

    /// Path of a reference corpus text file (built-in corpus when unset).
    pub corpus_path: Option<PathBuf>,

    /// Origins allowed to call the API cross-origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            db_path: PathBuf::from("./veracity.db"),
            model_path: None,
            corpus_path: None,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERACITY_PORT";
    const ENV_BIND_ADDR: &'static str = "VERACITY_BIND_ADDR";
    const ENV_DB_PATH: &'static str = "VERACITY_DB_PATH";
    const ENV_MODEL_PATH: &'static str = "VERACITY_MODEL_PATH";
    const ENV_CORPUS_PATH: &'static str = "VERACITY_CORPUS_PATH";
    const ENV_ALLOWED_ORIGINS: &'static str = "VERACITY_ALLOWED_ORIGINS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let db_path = Self::parse_path_from_env(Self::ENV_DB_PATH, defaults.db_path);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let allowed_origins =
            Self::parse_origins_from_env(Self::ENV_ALLOWED_ORIGINS, defaults.allowed_origins);

        Ok(Self {
            port,
            bind_addr,
            db_path,
            model_path,
            corpus_path,
            allowed_origins,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.exists() && !self.db_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.db_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_origins_from_env(var_name: &str, default: Vec<String>) -> Vec<String> {
        match env::var(var_name) {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => default,
        }
    }
}
