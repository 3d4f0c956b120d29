use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use grievance_core::domain::TransitionPolicy;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "grievance";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
pub const MAX_BUSY_TIMEOUT_MS: u64 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file; `None` falls back to the XDG data directory.
    pub database: Option<PathBuf>,
    pub reports_dir: PathBuf,
    pub busy_timeout_ms: u64,
    pub lifecycle: LifecycleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleConfig {
    pub policy: TransitionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: None,
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            lifecycle: LifecycleConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid busy_timeout_ms value: {0}")]
    InvalidBusyTimeout(u64),
    #[error("invalid {field} value: path is empty")]
    EmptyPath { field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    database: Option<PathBuf>,
    reports_dir: Option<PathBuf>,
    busy_timeout_ms: Option<u64>,
    lifecycle: Option<LifecycleFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LifecycleFile {
    policy: Option<TransitionPolicy>,
}

/// Loads the config file. An explicit path must exist; the default location
/// is optional and yields defaults when absent.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(database) = parsed.database {
        if database.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { field: "database" });
        }
        config.database = Some(database);
    }

    if let Some(reports_dir) = parsed.reports_dir {
        if reports_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath {
                field: "reports_dir",
            });
        }
        config.reports_dir = reports_dir;
    }

    if let Some(timeout) = parsed.busy_timeout_ms {
        if timeout == 0 || timeout > MAX_BUSY_TIMEOUT_MS {
            return Err(ConfigError::InvalidBusyTimeout(timeout));
        }
        config.busy_timeout_ms = timeout;
    }

    if let Some(policy) = parsed.lifecycle.and_then(|lifecycle| lifecycle.policy) {
        config.lifecycle.policy = policy;
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
