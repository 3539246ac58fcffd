// TOML config adapter - Optional per-user configuration file

use crate::error::{DjiError, DjiResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "DJIUTIL_CONFIG";

/// Settings read from the `[djiutil]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Card or clip directory used when `--dir`/`DJIUTIL_DIR` are absent
    pub dir: Option<PathBuf>,
    /// Default log level
    pub log_level: Option<String>,
    /// Default import destination
    pub import_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    djiutil: AppConfig,
}

impl AppConfig {
    /// Pick the clip directory: explicit value (flag or env) over config file
    pub fn resolve_dir(&self, explicit: Option<PathBuf>) -> DjiResult<PathBuf> {
        explicit.or_else(|| self.dir.clone()).ok_or_else(|| {
            DjiError::usage("no directory given: use --dir, DJIUTIL_DIR or `dir` in the config file")
        })
    }

    /// Pick the import destination: explicit argument over config file
    pub fn resolve_import_dir(&self, explicit: Option<PathBuf>) -> DjiResult<PathBuf> {
        explicit.or_else(|| self.import_dir.clone()).ok_or_else(|| {
            DjiError::usage("no destination given: pass DEST or set `import_dir` in the config file")
        })
    }
}

/// TOML configuration adapter
#[derive(Debug, Clone)]
pub struct TomlConfigAdapter {
    config_file_path: Option<PathBuf>,
}

impl TomlConfigAdapter {
    /// Use `$DJIUTIL_CONFIG`, or the platform config directory
    pub fn new() -> Self {
        let config_file_path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(Self::get_default_config_path);
        Self { config_file_path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file_path: Some(path.into()),
        }
    }

    /// Get default config file path, e.g. `~/.config/djiutil/config.toml`
    pub fn get_default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "djiutil").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    /// Load the configuration; a missing file yields defaults
    pub fn load(&self) -> DjiResult<AppConfig> {
        let Some(path) = &self.config_file_path else {
            return Ok(AppConfig::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loading configuration from {}", path.display());
                Self::deserialize_config(&content, path)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(e) => Err(DjiError::io(path, e)),
        }
    }

    /// Deserialize config from TOML string
    fn deserialize_config(content: &str, path: &Path) -> DjiResult<AppConfig> {
        let parsed: ConfigFile = toml::from_str(content).map_err(|e| {
            DjiError::usage(format!("failed to parse config file {}: {}", path.display(), e))
        })?;
        Ok(parsed.djiutil)
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}
